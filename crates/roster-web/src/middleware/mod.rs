//! HTTP middleware.

mod error_page;
mod logging;

pub use error_page::*;
pub use logging::*;
