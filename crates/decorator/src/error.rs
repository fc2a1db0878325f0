use thiserror::Error;

/// Raised when a decorator chain cannot be assembled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidCompositionError {
    #[error("composition has no base capability to decorate")]
    MissingBase,

    #[error("invalid parameter for layer `{layer}`: {reason}")]
    InvalidParameter { layer: &'static str, reason: String },
}

impl InvalidCompositionError {
    pub fn invalid_parameter<S: ToString>(layer: &'static str, reason: S) -> Self {
        Self::InvalidParameter { layer, reason: reason.to_string() }
    }
}
