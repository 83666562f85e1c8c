//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Both variants are raised before any state is touched, so a failed
/// operation always leaves the record exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A caller-supplied value is malformed on its own (non-positive amount,
    /// blank identifier, out-of-range limit).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request is well-formed but the current state cannot satisfy it
    /// (capacity exceeded, not enough reserved or on-hand units).
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// The bare message, without the variant prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) | Self::InvalidState(msg) => msg,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_variant() {
        let err = DomainError::invalid_state("cannot ship more than reserved");
        assert_eq!(err.to_string(), "invalid state: cannot ship more than reserved");
        assert_eq!(err.message(), "cannot ship more than reserved");
        assert!(err.is_invalid_state());
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn invalid_argument_keeps_message() {
        let err = DomainError::invalid_argument("amount to add must be positive");
        assert_eq!(err, DomainError::InvalidArgument("amount to add must be positive".into()));
        assert_eq!(err.to_string(), "invalid argument: amount to add must be positive");
    }
}
