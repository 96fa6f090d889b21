//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CatpointError`]
//! via `#[from]` or a hand-written `From` impl (no `String` variants).

/// Top-level error returned by ports and services.
#[derive(Debug, thiserror::Error)]
pub enum CatpointError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A repository adapter failed to read or write.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The image classifier could not produce an answer.
    #[error("image classifier error")]
    Classifier(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("sensor name must not be empty")]
    EmptySensorName,

    #[error("confidence threshold {0} is outside 0..=100")]
    InvalidConfidence(f32),
}
