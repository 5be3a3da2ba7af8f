//! Prediction models.
//!
//! The scoring endpoint calls through the [`Model`] trait so a real
//! inference engine can be dropped in without touching the HTTP layer. The
//! shipped implementation is [`IdentityModel`], which returns its input
//! unchanged.

use thiserror::Error;

/// Errors a model can raise during prediction.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model inference failed: {0}")]
    Inference(String),
}

/// A prediction function mapping a feature list to a score list.
///
/// Object-safe so the server state can hold `Arc<dyn Model>`.
pub trait Model: Send + Sync {
    /// Short name reported by the health endpoint.
    fn name(&self) -> &str;

    /// Score a feature list.
    fn predict(&self, features: &[f64]) -> Result<Vec<f64>, ModelError>;
}

/// Placeholder model: the score is the feature list itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityModel;

impl Model for IdentityModel {
    fn name(&self) -> &str {
        "identity"
    }

    fn predict(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        Ok(features.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identity_returns_input() {
        let model = IdentityModel;
        let score = model.predict(&[1.0, 2.0]).unwrap();
        assert_eq!(score, vec![1.0, 2.0]);
    }

    #[test]
    fn identity_handles_empty_input() {
        let model = IdentityModel;
        let score = model.predict(&[]).unwrap();
        assert!(score.is_empty());
    }

    proptest! {
        #[test]
        fn identity_holds_for_any_feature_list(features in proptest::collection::vec(-1e9f64..1e9, 0..256)) {
            let model = IdentityModel;
            let score = model.predict(&features).unwrap();
            prop_assert_eq!(score, features);
        }
    }
}
