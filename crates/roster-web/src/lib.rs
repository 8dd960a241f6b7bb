//! # Roster Web
//!
//! HTTP layer using Axum. Serves the user directory pages, the add and
//! delete form endpoints, and the health checks.

pub mod controllers;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
