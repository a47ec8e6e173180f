//! Builder shared by the legacy adapters.

use std::marker::PhantomData;
use std::sync::Arc;

use retrofit_core::{
    application::ports::TraceSink,
    domain::{Requirement, ValidationPolicy},
    error::{RetrofitError, RetrofitResult},
};

use crate::legacy::LegacyEngine;
use crate::renderer::guard::InputGuard;

/// What every legacy adapter is assembled from. Only this crate can make one.
pub struct AdapterParts {
    pub(crate) engine: LegacyEngine,
    pub(crate) guard: InputGuard,
}

impl AdapterParts {
    pub(crate) fn strict(engine: LegacyEngine) -> Self {
        let guard = InputGuard::new(ValidationPolicy::Strict, engine.trace_sink());
        Self { engine, guard }
    }
}

/// Builder for [`LegacySpriteAdapter`](super::LegacySpriteAdapter) and
/// [`LegacyMediaAdapter`](super::LegacyMediaAdapter).
///
/// The engine is mandatory; `build` refuses to produce an adapter without
/// one. Policy defaults to strict and diagnostics default to the engine's
/// own trace sink.
pub struct AdapterBuilder<A> {
    engine: Option<LegacyEngine>,
    policy: ValidationPolicy,
    diagnostics: Option<Arc<dyn TraceSink>>,
    _adapter: PhantomData<fn() -> A>,
}

impl<A> AdapterBuilder<A> {
    pub(crate) fn new() -> Self {
        Self {
            engine: None,
            policy: ValidationPolicy::default(),
            diagnostics: None,
            _adapter: PhantomData,
        }
    }

    /// The legacy engine to wrap. The adapter takes ownership of it.
    pub fn engine(mut self, engine: LegacyEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Accepts an engine that may be missing, e.g. from optional wiring.
    pub fn maybe_engine(mut self, engine: Option<LegacyEngine>) -> Self {
        self.engine = engine;
        self
    }

    /// How blank arguments are handled.
    pub fn policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Where lenient diagnostics go.
    pub fn diagnostics(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }
}

impl<A: From<AdapterParts>> AdapterBuilder<A> {
    /// Assemble the adapter.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for `engine` if no engine was supplied.
    pub fn build(self) -> RetrofitResult<A> {
        let engine = self
            .engine
            .ok_or(RetrofitError::invalid_argument("engine", Requirement::Present))?;
        let diagnostics = self.diagnostics.unwrap_or_else(|| engine.trace_sink());
        Ok(A::from(AdapterParts {
            guard: InputGuard::new(self.policy, diagnostics),
            engine,
        }))
    }
}
