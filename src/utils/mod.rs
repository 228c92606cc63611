//! Utility functions.

pub mod fs;
