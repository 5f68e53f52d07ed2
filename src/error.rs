//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while configuring or running a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    /// Reporter or prompt I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or snapshot JSON could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input failed validation. Nothing was mutated.
    #[error("invalid input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// A selection policy picked a process that cannot run.
    #[error("policy selected process at index {index}, which cannot run")]
    UnrunnableSelection {
        /// Index into the process collection.
        index: usize,
    },
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_message_joins_errors() {
        let err = SimError::Validation(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: 1"),
            ValidationError::new(ValidationErrorKind::EmptyRange, "priority range 5..=1 is empty"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: Duplicate process ID: 1; priority range 5..=1 is empty"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: SimError = io.into();
        assert!(matches!(err, SimError::Io(_)));
    }
}
