//! Core business logic modules.

pub mod matcher;
pub mod parser;
pub mod relocator;
pub mod sorter;
