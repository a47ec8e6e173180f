//! Unified error handling for Retrofit Core.
//!
//! Rendering has a single failure mode: a caller handed over an argument
//! that breaks a precondition. The error names the parameter and the
//! condition it had to meet, and carries user-actionable suggestions.

use thiserror::Error;

use crate::domain::Requirement;

/// Root error type for Retrofit Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RetrofitError {
    /// An argument violated its precondition.
    #[error("invalid argument '{parameter}': {requirement}")]
    InvalidArgument {
        parameter: &'static str,
        requirement: Requirement,
    },
}

impl RetrofitError {
    /// Shorthand for [`RetrofitError::InvalidArgument`].
    pub const fn invalid_argument(parameter: &'static str, requirement: Requirement) -> Self {
        Self::InvalidArgument {
            parameter,
            requirement,
        }
    }

    /// Name of the offending parameter.
    pub const fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidArgument { parameter, .. } => parameter,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArgument {
                parameter,
                requirement: Requirement::Present,
            } => vec![
                format!("'{parameter}' was not supplied"),
                "Construct the adapter with a legacy engine before rendering".into(),
            ],
            Self::InvalidArgument {
                parameter,
                requirement,
            } => vec![
                format!("Pass a value for '{parameter}' that {requirement}"),
                "Switch the render policy to 'lenient' to skip blank input instead".into(),
            ],
        }
    }
}

/// Convenient result type alias.
pub type RetrofitResult<T> = Result<T, RetrofitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_parameter_and_condition() {
        let err = RetrofitError::invalid_argument("name", Requirement::NonBlank);
        assert_eq!(err.to_string(), "invalid argument 'name': must be non-blank");
        assert_eq!(err.parameter(), "name");
    }

    #[test]
    fn missing_engine_message() {
        let err = RetrofitError::invalid_argument("engine", Requirement::Present);
        assert_eq!(
            err.to_string(),
            "invalid argument 'engine': must be present (non-null)"
        );
    }

    #[test]
    fn suggestions_differ_for_missing_values() {
        let missing = RetrofitError::invalid_argument("engine", Requirement::Present);
        let blank = RetrofitError::invalid_argument("path", Requirement::NonBlank);
        assert!(missing.suggestions()[0].contains("not supplied"));
        assert!(blank.suggestions()[0].contains("must be non-blank"));
    }
}
