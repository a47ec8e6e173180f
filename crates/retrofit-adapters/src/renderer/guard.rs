//! Blank-input handling shared by the legacy adapters.

use std::sync::Arc;

use retrofit_core::{
    application::ports::TraceSink,
    domain::{Requirement, TraceLine, ValidationPolicy, require_non_blank},
    error::RetrofitResult,
};
use tracing::warn;

const ORIGIN: &str = "adapter";

/// Applies one [`ValidationPolicy`] to every argument an adapter receives.
#[derive(Clone)]
pub(crate) struct InputGuard {
    policy: ValidationPolicy,
    diagnostics: Arc<dyn TraceSink>,
}

impl InputGuard {
    pub(crate) fn new(policy: ValidationPolicy, diagnostics: Arc<dyn TraceSink>) -> Self {
        Self {
            policy,
            diagnostics,
        }
    }

    pub(crate) fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// `Ok(Some(value))` when the call may proceed, `Ok(None)` when a lenient
    /// guard swallowed blank input, `Err` when a strict guard rejected it.
    pub(crate) fn admit<'a>(
        &self,
        operation: &'static str,
        parameter: &'static str,
        value: &'a str,
    ) -> RetrofitResult<Option<&'a str>> {
        match self.policy {
            ValidationPolicy::Strict => require_non_blank(parameter, value).map(Some),
            ValidationPolicy::Lenient => {
                if require_non_blank(parameter, value).is_ok() {
                    return Ok(Some(value));
                }
                warn!(operation, parameter, "blank argument skipped");
                self.diagnostics.emit(TraceLine::diagnostic(
                    ORIGIN,
                    operation,
                    format!("skipped, '{parameter}' {}", Requirement::NonBlank),
                ));
                Ok(None)
            }
        }
    }
}

impl std::fmt::Debug for InputGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputGuard")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
