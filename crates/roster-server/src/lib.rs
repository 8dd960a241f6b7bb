//! # Roster Server Library
//!
//! Wires configuration, the database pool, services and the router into a
//! runnable application.

pub mod app;
pub mod startup;
