//! Error taxonomy.
//!
//! Precondition violations abort a run before any partial output exists.
//! Cancellation of a replay is not an error; see
//! [`ReplayOutcome`](crate::sequencer::ReplayOutcome).

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised at the scheduling boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// No processes were submitted for the run. User-correctable.
    #[error("no processes to schedule")]
    EmptyInput,

    /// A descriptor failed structural validation at the input boundary.
    #[error("invalid process descriptor: {}", first_message(.0))]
    InvalidDescriptor(Vec<ValidationError>),
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_error_display() {
        assert_eq!(ScheduleError::EmptyInput.to_string(), "no processes to schedule");

        let err = ScheduleError::InvalidDescriptor(vec![ValidationError {
            kind: ValidationErrorKind::ZeroBurst,
            message: "Process 'P1' has a zero burst time".into(),
        }]);
        assert!(err.to_string().contains("P1"));
    }
}
