//! Demonstration HTTP scoring service.
//!
//! Exposes a single `POST /score` endpoint that forwards a numeric feature
//! list to a prediction model and returns the result as a JSON score. The
//! default model is an identity function; the service exists to validate
//! container and cluster deployment pipelines, not to perform real
//! inference.

pub mod api;
pub mod config;
pub mod model;

pub use api::errors::{ApiError, ApiResult};
pub use api::server::{create_router, start_api_server, AppState};
pub use config::Config;
pub use model::{IdentityModel, Model, ModelError};
