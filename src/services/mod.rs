//! External service clients.

pub mod plex;
