/// Convenience result type used across ledscene.
pub type LedResult<T> = Result<T, LedError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum LedError {
    /// Invalid user-provided or installation data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating or sampling keyframe animations.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating a scene at a strip position.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Numeric input that has no defined output (e.g. zero effective alpha).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// IO and other lower-level failures, carrying `anyhow` context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LedError {
    /// Build a [`LedError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LedError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`LedError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`LedError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`LedError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
