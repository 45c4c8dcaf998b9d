// ❌ Codec Errors
//
// Every failure of the core is a value. Callers map these onto their own
// responses (HTTP 400, form messages, CLI exit codes).

use thiserror::Error;

pub type ReferenceResult<T> = Result<T, ReferenceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// Malformed input shape (wrong concept length, empty student id, ...)
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Date could not be parsed or falls before the base year
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Amount is negative, has more than two decimals, or is not a number
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("concept {concept} requires a subject code")]
    MissingSubjectCode { concept: String },

    #[error("concept {concept} requires a period token")]
    MissingPeriodToken { concept: String },
}

impl ReferenceError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        ReferenceError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for shape errors (bad field, date or amount), false for the
    /// advisory/period gating errors.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ReferenceError::InvalidInput { .. }
                | ReferenceError::InvalidDate(_)
                | ReferenceError::InvalidAmount(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReferenceError::MissingSubjectCode {
            concept: "04".to_string(),
        };
        assert_eq!(err.to_string(), "concept 04 requires a subject code");

        let err = ReferenceError::invalid_input("concept_code", "must be 2 digits");
        assert_eq!(err.to_string(), "invalid concept_code: must be 2 digits");
    }

    #[test]
    fn test_invalid_input_grouping() {
        assert!(ReferenceError::InvalidDate("x".into()).is_invalid_input());
        assert!(ReferenceError::InvalidAmount("x".into()).is_invalid_input());
        assert!(!ReferenceError::MissingPeriodToken {
            concept: "01".into()
        }
        .is_invalid_input());
    }
}
