//! Argument preconditions and the policy for handling blank input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RetrofitError, RetrofitResult};

/// The condition an argument failed to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// A collaborator must be supplied at all.
    Present,
    /// A string must contain at least one character.
    NonEmpty,
    /// A string must contain at least one non-whitespace character.
    NonBlank,
}

impl Requirement {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "must be present (non-null)",
            Self::NonEmpty => "must be non-empty",
            Self::NonBlank => "must be non-blank",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a renderer treats a blank string argument.
///
/// One policy is fixed per renderer instance and applies to every method
/// of that instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Blank input is an `InvalidArgument` error.
    #[default]
    Strict,
    /// Blank input emits one diagnostic trace line and the call is a no-op.
    Lenient,
}

impl ValidationPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reject strings that are empty. Whitespace passes.
pub fn require_non_empty<'a>(parameter: &'static str, value: &'a str) -> RetrofitResult<&'a str> {
    if value.is_empty() {
        return Err(RetrofitError::invalid_argument(
            parameter,
            Requirement::NonEmpty,
        ));
    }
    Ok(value)
}

/// Reject strings that are empty or whitespace-only.
pub fn require_non_blank<'a>(parameter: &'static str, value: &'a str) -> RetrofitResult<&'a str> {
    if value.trim().is_empty() {
        return Err(RetrofitError::invalid_argument(
            parameter,
            Requirement::NonBlank,
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_rejects_whitespace() {
        for blank in ["", " ", "\t\n", "   "] {
            let err = require_non_blank("name", blank).unwrap_err();
            assert_eq!(
                err,
                RetrofitError::invalid_argument("name", Requirement::NonBlank)
            );
        }
    }

    #[test]
    fn non_blank_keeps_original_value() {
        assert_eq!(require_non_blank("name", " hero ").unwrap(), " hero ");
    }

    #[test]
    fn non_empty_lets_whitespace_through() {
        assert!(require_non_empty("name", "  ").is_ok());
        assert!(require_non_empty("name", "").is_err());
    }

    #[test]
    fn policy_defaults_to_strict() {
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::Strict);
    }

    #[test]
    fn policy_displays_its_config_name() {
        assert_eq!(ValidationPolicy::Strict.to_string(), "strict");
        assert_eq!(ValidationPolicy::Lenient.to_string(), "lenient");
    }
}
