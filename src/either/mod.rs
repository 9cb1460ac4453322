//! The value produced by an [`EitherContext`].
//!
//! An [`Either<S, A>`] holds exactly one of a success payload `A` or a
//! failure `S::Error`. Values are only created through a context, and each
//! value keeps its context so that combinators needing a fresh error
//! ([`filter`](Either::filter), [`get_or_throw`](Either::get_or_throw)) use
//! the same strategy that produced the original.
//!
//! Because the strategy type is part of the value's type, combining values
//! from contexts with different strategies does not compile.
//!
//! # Examples
//!
//! ```
//! use either_context::{EitherContext, TEXT};
//!
//! let ctx = EitherContext::new(TEXT);
//!
//! let label = ctx.unsafe_value(42).map(|n| n.to_string());
//! assert_eq!(label.get(), Some("42".to_string()));
//!
//! let recovered = ctx.failure_with::<usize>("bar").recover(|e| ctx.unsafe_value(e.len()));
//! assert_eq!(recovered.get(), Some(3));
//! ```

use crate::context::EitherContext;
use crate::strategy::ErrorStrategy;
use crate::types::Fault;

mod traits;

/// Immutable union of a success value and a strategy-produced failure.
///
/// Equality, hashing and `Debug` only look at the held variant; the context
/// takes no part in them.
#[must_use]
pub struct Either<S, A>
where
    S: ErrorStrategy,
{
    ctx: EitherContext<S>,
    repr: Result<A, S::Error>,
}

impl<S, A> Either<S, A>
where
    S: ErrorStrategy,
{
    #[inline]
    pub(crate) fn from_parts(ctx: EitherContext<S>, repr: Result<A, S::Error>) -> Self {
        Self { ctx, repr }
    }

    /// The context this value was produced by.
    #[inline]
    pub fn context(&self) -> &EitherContext<S> {
        &self.ctx
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.repr.is_ok()
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.repr.is_err()
    }

    /// Collapses the value with one function per variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{EitherContext, TEXT};
    ///
    /// let ctx = EitherContext::new(TEXT);
    /// let n = ctx.unsafe_value(42).fold(|e| e.len(), |n| n);
    /// assert_eq!(n, 42);
    /// ```
    #[inline]
    pub fn fold<X, FE, FA>(self, on_failure: FE, on_success: FA) -> X
    where
        FE: FnOnce(S::Error) -> X,
        FA: FnOnce(A) -> X,
    {
        match self.repr {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    /// The success payload, if any.
    #[must_use]
    #[inline]
    pub fn get(self) -> Option<A> {
        self.fold(|_| None, Some)
    }

    /// The failure payload, if any.
    #[must_use]
    #[inline]
    pub fn get_error(self) -> Option<S::Error> {
        self.fold(Some, |_| None)
    }

    /// Borrows the success payload.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&A> {
        self.repr.as_ref().ok()
    }

    /// Borrows the failure payload.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&S::Error> {
        self.repr.as_ref().err()
    }

    /// The success payload, or `default` on failure.
    #[inline]
    pub fn get_or(self, default: A) -> A {
        self.get_or_else(move || default)
    }

    /// The success payload, or the result of `default` on failure.
    /// `default` is not called on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{EitherContext, TEXT};
    ///
    /// let ctx = EitherContext::new(TEXT);
    /// assert_eq!(ctx.failure_with::<i32>("bar").get_or_else(|| 21), 21);
    /// assert_eq!(ctx.unsafe_value(42).get_or_else(|| unreachable!()), 42);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        self.fold(|_| default(), |value| value)
    }

    /// The success payload, or the strategy's fault for the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{EitherContext, TEXT};
    ///
    /// let ctx = EitherContext::new(TEXT);
    /// assert_eq!(ctx.unsafe_value(42).get_or_throw().unwrap(), 42);
    ///
    /// let fault = ctx.failure_with::<i32>("bar").get_or_throw().unwrap_err();
    /// assert_eq!(fault.message(), "bar");
    /// ```
    #[inline]
    pub fn get_or_throw(self) -> Result<A, Fault> {
        let Self { ctx, repr } = self;
        repr.map_err(|error| ctx.strategy().to_fault(error))
    }

    /// Calls `consume` with the success payload, if any.
    #[inline]
    pub fn for_each<F>(&self, consume: F)
    where
        F: FnOnce(&A),
    {
        if let Ok(value) = &self.repr {
            consume(value);
        }
    }

    /// Transforms the success payload; failures pass through unchanged.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Either<S, B>
    where
        F: FnOnce(A) -> B,
    {
        Either { ctx: self.ctx, repr: self.repr.map(f) }
    }

    /// Chains a computation that may itself fail. `f` runs at most once,
    /// only on success, and its result is returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{EitherContext, TEXT};
    ///
    /// let ctx = EitherContext::new(TEXT);
    /// let halve = |n: i32| ctx.ensure_or(n % 2 == 0, "odd").map(|()| n / 2);
    ///
    /// assert_eq!(ctx.unsafe_value(42).and_then(halve).get(), Some(21));
    /// assert_eq!(ctx.unsafe_value(21).and_then(halve).get_error(), Some("odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Either<S, B>
    where
        F: FnOnce(A) -> Either<S, B>,
    {
        match self.repr {
            Ok(value) => f(value),
            Err(error) => Either { ctx: self.ctx, repr: Err(error) },
        }
    }

    /// Keeps a success only if `predicate` holds; otherwise the result is a
    /// failure with the strategy's default error. Failures are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{EitherContext, TEXT};
    ///
    /// let ctx = EitherContext::new(TEXT);
    /// assert_eq!(ctx.unsafe_value(42).filter(|n| n % 2 == 1).get_error(), Some(String::new()));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        let Self { ctx, repr } = self;
        let repr = match repr {
            Ok(value) => {
                if predicate(&value) {
                    Ok(value)
                } else {
                    Err(ctx.strategy().default_error())
                }
            },
            Err(error) => Err(error),
        };
        Either { ctx, repr }
    }

    /// `other` if this is a success; otherwise this failure.
    #[inline]
    pub fn and<B>(self, other: Either<S, B>) -> Either<S, B> {
        self.and_else(move || other)
    }

    /// Like [`and`](Self::and), building `other` only if this is a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{Either, EitherContext, TextStrategy, TEXT};
    ///
    /// let ctx = EitherContext::new(TEXT);
    /// let skipped: Either<TextStrategy, &str> =
    ///     ctx.failure_with::<i32>("e").and_else(|| unreachable!());
    /// assert_eq!(skipped.get_error(), Some("e".to_string()));
    /// ```
    #[inline]
    pub fn and_else<B, F>(self, other: F) -> Either<S, B>
    where
        F: FnOnce() -> Either<S, B>,
    {
        self.and_then(move |_| other())
    }

    /// This value if it is a success; otherwise `other`.
    #[inline]
    pub fn or(self, other: Either<S, A>) -> Self {
        self.or_else(move || other)
    }

    /// Like [`or`](Self::or), building `other` only if this is a failure.
    #[inline]
    pub fn or_else<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Either<S, A>,
    {
        self.recover(move |_| other())
    }

    /// Replaces a failure with the result of `f`. `f` runs at most once, only
    /// on failure; successes are unchanged.
    #[inline]
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(S::Error) -> Either<S, A>,
    {
        match self.repr {
            Ok(value) => Either { ctx: self.ctx, repr: Ok(value) },
            Err(error) => f(error),
        }
    }

    /// Converts into a plain `Result`.
    #[inline]
    pub fn into_result(self) -> Result<A, S::Error> {
        self.repr
    }
}
