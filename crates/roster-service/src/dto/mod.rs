//! Data Transfer Objects for the service layer.

mod user_dto;

pub use user_dto::*;
