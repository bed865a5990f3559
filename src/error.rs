//! Error types for the scoring pipeline

use std::fmt;

/// Errors that can occur while loading artifacts or scoring an applicant
#[derive(Debug, Clone, PartialEq)]
pub enum CreditError {
    /// A model artifact is missing or cannot be deserialized (fatal at startup)
    Artifact(String),

    /// The assembled row does not have the width a scaler or classifier expects
    SchemaMismatch {
        /// Which stage rejected the row ("scaler", "classifier", ...)
        stage: &'static str,
        /// Width the stage was fitted on
        expected: usize,
        /// Width that was actually supplied
        actual: usize,
    },

    /// An applicant field is outside its accepted range
    InvalidInput(String),

    /// Invalid runtime configuration
    Config(String),

    /// A chart could not be drawn
    Render(String),
}

impl fmt::Display for CreditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreditError::Artifact(msg) => write!(f, "Artifact error: {}", msg),
            CreditError::SchemaMismatch { stage, expected, actual } => write!(
                f,
                "Schema mismatch: {} expects {} features, got {}",
                stage, expected, actual
            ),
            CreditError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CreditError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CreditError::Render(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for CreditError {}

impl CreditError {
    /// Whether the error is caused by the request rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, CreditError::InvalidInput(_))
    }
}
