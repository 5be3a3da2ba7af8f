//! Request handlers.

pub mod score;
pub mod status;

pub use score::{score, ScoreRequest, ScoreResponse};
pub use status::{health_check, HealthResponse};
