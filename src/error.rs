//! Error types shared across the front-ends.

use thiserror::Error;

/// Reasons joke text is rejected before a command is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing left after trimming whitespace. Callers ignore this silently.
    #[error("Joke text is empty")]
    Empty,

    /// Trimmed text is longer than the allowed number of characters.
    #[error("Joke cannot exceed {max} characters.")]
    TooLong { len: usize, max: usize },
}

impl ValidationError {
    /// Whether the rejection should be surfaced to the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, ValidationError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_long_message_names_limit() {
        let err = ValidationError::TooLong { len: 151, max: 150 };
        assert_eq!(err.to_string(), "Joke cannot exceed 150 characters.");
        assert!(!err.is_silent());
    }

    #[test]
    fn empty_is_silent() {
        assert!(ValidationError::Empty.is_silent());
    }
}
