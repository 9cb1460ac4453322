//! Tracing integration for either-context.
//!
//! With the `tracing` feature enabled, the `safely*` boundaries of
//! [`EitherContext`](crate::EitherContext) emit a `debug` event for every
//! captured fault, and [`EitherTraceExt`] lets callers log failures while
//! they flow through a chain.
//!
//! # Feature Flag
//!
//! ```toml
//! [dependencies]
//! either-context = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! Events use the `either_context` target.

use tracing::Span;

use crate::either::Either;
use crate::strategy::ErrorStrategy;

/// Logs failures without changing them.
pub trait EitherTraceExt: Sized {
    /// Emits a `warn` event with the error's text if `self` is a failure.
    ///
    /// # Example
    ///
    /// ```
    /// use either_context::tracing_ext::EitherTraceExt;
    /// use either_context::{EitherContext, TEXT};
    ///
    /// let ctx = EitherContext::new(TEXT);
    /// let loaded = ctx.failure_with::<u32>("no such user").trace_failure("load_user");
    /// assert!(loaded.is_failure());
    /// ```
    fn trace_failure(self, label: &str) -> Self;

    /// Like [`trace_failure`](Self::trace_failure), emitting the event inside
    /// `span` and labelling it with the span's name.
    fn trace_failure_in(self, span: &Span) -> Self;
}

impl<S, A> EitherTraceExt for Either<S, A>
where
    S: ErrorStrategy,
{
    fn trace_failure(self, label: &str) -> Self {
        if let Some(error) = self.error() {
            tracing::warn!(target: "either_context", label, error = %error, "either resolved to a failure");
        }
        self
    }

    fn trace_failure_in(self, span: &Span) -> Self {
        let _entered = span.enter();
        let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
        self.trace_failure(name)
    }
}
