//! Model artifacts and inference
//!
//! Fitted scaler and classifier, loaded once from JSON artifacts and applied
//! to encoded rows.

pub mod artifacts;
pub mod classifier;
pub mod predictor;
pub mod scaler;

pub use artifacts::Artifacts;
pub use classifier::{BinaryClassifier, Classifier, DecisionTree};
pub use predictor::Predictor;
pub use scaler::Scaler;
