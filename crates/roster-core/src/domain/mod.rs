//! Domain entities of the user directory.

pub mod entities;

pub use entities::*;
