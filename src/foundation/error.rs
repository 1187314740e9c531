/// Convenience result type used across scrollscrub.
pub type ScrubResult<T> = Result<T, ScrubError>;

/// Top-level error taxonomy used by the section, pin and phase APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScrubError {
    /// Invalid configuration or key frame data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The animation asset could not be read or parsed.
    #[error("asset error: {0}")]
    Asset(String),

    /// An operation was attempted in the wrong lifecycle state (e.g. after dispose).
    #[error("lifecycle error: {0}")]
    Lifecycle(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrubError {
    /// Build a [`ScrubError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrubError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`ScrubError::Lifecycle`] value.
    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::Lifecycle(msg.into())
    }

    /// Build a [`ScrubError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
