//! # Roster Core
//!
//! Core types and error definitions shared by every layer of the Roster
//! user directory: the `User` entity, typed ids, the unified error type and
//! the logging bootstrap.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
