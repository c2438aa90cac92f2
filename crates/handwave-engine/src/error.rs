//! Error types for the gesture engine.

/// Errors raised while building frames or engines.
///
/// Classification itself never fails: every well-formed frame (or its
/// absence) maps to a [`crate::GestureEvent`].
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Malformed landmark frame: expected {expected} points, got {found}")]
    MalformedFrame { expected: usize, found: usize },

    #[error("Landmark {index} has a non-finite coordinate")]
    NonFiniteLandmark { index: usize },

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
