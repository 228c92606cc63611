//! Plex Sorter Library
//!
//! Files watched TV episodes from an "unsorted" Plex section into the
//! `Show/Season N/` folders of a target section.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
