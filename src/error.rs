use std::io;

// Add Result type alias
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Errors raised at the configuration boundary.
///
/// The estimation functions themselves never fail; only building,
/// parsing and validating a [`Configuration`](crate::Configuration) can.
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    #[error("Configuration error for {parameter}: {message}")]
    Configuration {
        message: String,
        parameter: String,
    },

    #[error("Unknown {kind} '{value}'")]
    UnknownVariant {
        kind: &'static str,
        value: String,
    },

    #[error("Failed to read configuration: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl EstimatorError {
    pub(crate) fn configuration(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        EstimatorError::Configuration {
            message: message.into(),
            parameter: parameter.into(),
        }
    }

    /// Name of the offending configuration field, when there is one
    pub fn parameter(&self) -> Option<&str> {
        match self {
            EstimatorError::Configuration { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}
