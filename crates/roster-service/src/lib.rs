//! # Roster Service
//!
//! The user directory use cases: list, add and delete users.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::*;
