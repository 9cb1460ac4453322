//! The factory that binds a strategy and produces [`Either`] values.
//!
//! Key features:
//! - [`EitherContext::unsafe_value`] and [`EitherContext::failure`] /
//!   [`EitherContext::failure_with`] build values directly.
//! - [`EitherContext::safely`] runs a fallible computation once and captures
//!   its error as a failure; [`EitherContext::safely_unwind`] does the same
//!   for panics (requires `std`).
//! - [`EitherContext::ensure`] turns a precondition into an `Either<S, ()>`.
//!
//! Every operation that takes an alternative has an eager form (`*_or`) and
//! a lazy form (`*_or_else`); the eager form only wraps the lazy one.
//!
//! # Examples
//!
//! ```
//! use either_context::{EitherContext, TEXT};
//!
//! let ctx = EitherContext::new(TEXT);
//!
//! let port = ctx.safely(|| "8080".parse::<u16>());
//! assert_eq!(port.get(), Some(8080));
//!
//! let port = ctx.safely_or(|| "http".parse::<u16>(), "port must be numeric");
//! assert_eq!(port.get_error(), Some("port must be numeric".to_string()));
//! ```

use crate::either::Either;
use crate::strategy::ErrorStrategy;
use crate::types::{Alternative, BoxError, Fault};

/// Binds one [`ErrorStrategy`] and acts as the only factory for [`Either`]
/// values under it.
///
/// The strategy is fixed at construction. `new` is a `const fn`, so contexts
/// over the built-in strategies can be `static`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EitherContext<S> {
    strategy: S,
}

impl<S> EitherContext<S> {
    /// Creates a context bound to `strategy`.
    #[inline]
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// The bound strategy.
    #[inline]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    #[inline]
    pub fn into_strategy(self) -> S {
        self.strategy
    }
}

impl<S> EitherContext<S>
where
    S: ErrorStrategy + Clone,
{
    /// Lifts a value into a success unconditionally.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{EitherContext, TEXT};
    ///
    /// let ctx = EitherContext::new(TEXT);
    /// assert_eq!(ctx.unsafe_value(42).get(), Some(42));
    /// ```
    #[inline]
    pub fn unsafe_value<A>(&self, value: A) -> Either<S, A> {
        Either::from_parts(self.clone(), Ok(value))
    }

    /// Lifts an existing `Result` whose error already has the strategy's type.
    #[inline]
    pub fn from_result<A>(&self, result: Result<A, S::Error>) -> Either<S, A> {
        Either::from_parts(self.clone(), result)
    }

    /// A failure carrying the strategy's default error.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{EitherContext, ErrorStrategy, TEXT};
    ///
    /// let ctx = EitherContext::new(TEXT);
    /// assert_eq!(ctx.failure::<i32>().get_error(), Some(TEXT.default_error()));
    /// ```
    #[inline]
    pub fn failure<A>(&self) -> Either<S, A> {
        self.fail(self.strategy.default_error())
    }

    /// A failure built from `alt`: messages go through `from_message`,
    /// faults through `from_fault`.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{EitherContext, Fault, CLASS_NAME_AND_MESSAGE};
    ///
    /// let ctx = EitherContext::new(CLASS_NAME_AND_MESSAGE);
    ///
    /// assert_eq!(ctx.failure_with::<()>("bar").get_error(), Some("bar".to_string()));
    /// assert_eq!(
    ///     ctx.failure_with::<()>(Fault::with_kind("Timeout", "too slow")).get_error(),
    ///     Some("Timeout: too slow".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn failure_with<A>(&self, alt: impl Into<Alternative>) -> Either<S, A> {
        self.fail(alt.into().into_error(&self.strategy))
    }

    /// Runs `compute` once. `Ok` becomes a success; `Err` is wrapped in a
    /// [`Fault`] and handed to the strategy's `from_fault`.
    ///
    /// Any error convertible into a [`BoxError`] is accepted: concrete error
    /// types (the fault's kind is their type name), boxed errors and plain
    /// strings (kind [`GENERIC_KIND`](crate::types::fault::GENERIC_KIND)).
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{EitherContext, ErrorStrategy, Fault, TEXT};
    ///
    /// let ctx = EitherContext::new(TEXT);
    /// let parsed = ctx.safely(|| "x".parse::<i32>());
    ///
    /// let expected = TEXT.from_fault(Fault::from_error("x".parse::<i32>().unwrap_err()));
    /// assert_eq!(parsed.get_error(), Some(expected));
    /// ```
    #[inline]
    pub fn safely<A, X, F>(&self, compute: F) -> Either<S, A>
    where
        F: FnOnce() -> Result<A, X>,
        X: Into<BoxError> + 'static,
    {
        self.capture(compute(), None::<fn() -> Alternative>)
    }

    /// Like [`safely`](Self::safely), but a failed computation is described
    /// by `alt` instead of its own error.
    #[inline]
    pub fn safely_or<A, X, F, Alt>(&self, compute: F, alt: Alt) -> Either<S, A>
    where
        F: FnOnce() -> Result<A, X>,
        X: Into<BoxError> + 'static,
        Alt: Into<Alternative>,
    {
        self.safely_or_else(compute, move || alt)
    }

    /// Like [`safely_or`](Self::safely_or), evaluating `alt` only if the
    /// computation fails.
    #[inline]
    pub fn safely_or_else<A, X, F, Alt, G>(&self, compute: F, alt: G) -> Either<S, A>
    where
        F: FnOnce() -> Result<A, X>,
        X: Into<BoxError> + 'static,
        Alt: Into<Alternative>,
        G: FnOnce() -> Alt,
    {
        self.capture(compute(), Some(alt))
    }

    /// Runs `compute` once, turning a panic into a failure.
    ///
    /// The panic payload becomes a [`Fault`] of kind
    /// [`PANIC_KIND`](crate::types::fault::PANIC_KIND) handed to
    /// `from_fault`. The process panic hook still runs, so the panic message
    /// is printed as usual.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{EitherContext, TEXT};
    ///
    /// let ctx = EitherContext::new(TEXT);
    /// let values: Vec<i32> = Vec::new();
    ///
    /// let first = ctx.safely_unwind(|| values[0]);
    /// assert!(first.is_failure());
    /// ```
    #[cfg(feature = "std")]
    #[inline]
    pub fn safely_unwind<A, F>(&self, compute: F) -> Either<S, A>
    where
        F: FnOnce() -> A,
    {
        self.unwind(compute, None::<fn() -> Alternative>)
    }

    /// Like [`safely_unwind`](Self::safely_unwind), describing a panic with
    /// `alt`.
    #[cfg(feature = "std")]
    #[inline]
    pub fn safely_unwind_or<A, F, Alt>(&self, compute: F, alt: Alt) -> Either<S, A>
    where
        F: FnOnce() -> A,
        Alt: Into<Alternative>,
    {
        self.safely_unwind_or_else(compute, move || alt)
    }

    /// Like [`safely_unwind_or`](Self::safely_unwind_or), evaluating `alt`
    /// only if the computation panics.
    #[cfg(feature = "std")]
    #[inline]
    pub fn safely_unwind_or_else<A, F, Alt, G>(&self, compute: F, alt: G) -> Either<S, A>
    where
        F: FnOnce() -> A,
        Alt: Into<Alternative>,
        G: FnOnce() -> Alt,
    {
        self.unwind(compute, Some(alt))
    }

    /// `Success(())` when `predicate` holds, otherwise a failure with the
    /// strategy's default error.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{EitherContext, TEXT};
    ///
    /// let ctx = EitherContext::new(TEXT);
    /// assert_eq!(ctx.ensure(true).get(), Some(()));
    /// assert_eq!(ctx.ensure(false).get_error(), Some(String::new()));
    /// ```
    #[inline]
    pub fn ensure(&self, predicate: bool) -> Either<S, ()> {
        if predicate {
            self.unsafe_value(())
        } else {
            self.failure()
        }
    }

    /// Like [`ensure`](Self::ensure), describing a false predicate with `alt`.
    #[inline]
    pub fn ensure_or<Alt>(&self, predicate: bool, alt: Alt) -> Either<S, ()>
    where
        Alt: Into<Alternative>,
    {
        self.ensure_or_else(predicate, move || alt)
    }

    /// Like [`ensure_or`](Self::ensure_or), evaluating `alt` only when the
    /// predicate is false.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{EitherContext, TEXT};
    ///
    /// let ctx = EitherContext::new(TEXT);
    /// let age = 17;
    ///
    /// let adult = ctx.ensure_or_else(age >= 18, || format!("{age} is under 18"));
    /// assert_eq!(adult.get_error(), Some("17 is under 18".to_string()));
    /// ```
    #[inline]
    pub fn ensure_or_else<Alt, G>(&self, predicate: bool, alt: G) -> Either<S, ()>
    where
        Alt: Into<Alternative>,
        G: FnOnce() -> Alt,
    {
        if predicate {
            self.unsafe_value(())
        } else {
            self.failure_with(alt())
        }
    }

    #[inline]
    fn fail<A>(&self, error: S::Error) -> Either<S, A> {
        Either::from_parts(self.clone(), Err(error))
    }

    fn capture<A, X, Alt, G>(&self, outcome: Result<A, X>, alt: Option<G>) -> Either<S, A>
    where
        X: Into<BoxError> + 'static,
        Alt: Into<Alternative>,
        G: FnOnce() -> Alt,
    {
        match outcome {
            Ok(value) => self.unsafe_value(value),
            Err(error) => self.fail_with_fault(Fault::captured(error), alt),
        }
    }

    #[cfg(feature = "std")]
    fn unwind<A, F, Alt, G>(&self, compute: F, alt: Option<G>) -> Either<S, A>
    where
        F: FnOnce() -> A,
        Alt: Into<Alternative>,
        G: FnOnce() -> Alt,
    {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(compute)) {
            Ok(value) => self.unsafe_value(value),
            Err(payload) => self.fail_with_fault(Fault::from_panic(payload), alt),
        }
    }

    fn fail_with_fault<A, Alt, G>(&self, fault: Fault, alt: Option<G>) -> Either<S, A>
    where
        Alt: Into<Alternative>,
        G: FnOnce() -> Alt,
    {
        trace_captured(&fault);
        match alt {
            Some(alt) => self.failure_with(alt()),
            None => self.fail(self.strategy.from_fault(fault)),
        }
    }
}

#[inline]
fn trace_captured(fault: &Fault) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "either_context",
        kind = fault.kind(),
        fault = %fault,
        "computation fault captured as failure"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = fault;
}
