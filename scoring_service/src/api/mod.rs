//! HTTP API: error types, handlers, and server assembly.

pub mod errors;
pub mod handlers;
pub mod server;

pub use errors::{ApiError, ApiResult};
