//! The policy deciding how failures are represented.
//!
//! An [`ErrorStrategy`] turns messages and faults into values of its error
//! type, supplies a default error, and turns errors back into faults. Only
//! [`ErrorStrategy::from_message`] is required; the other three operations
//! default to rules expressed through it.
//!
//! Ready-made strategies live in [`builtin`]. [`ErrorStrategy::map_error`]
//! adapts any strategy to a different error type.
//!
//! # Examples
//!
//! ```
//! use either_context::{ErrorStrategy, Fault};
//!
//! struct Length;
//!
//! impl ErrorStrategy for Length {
//!     type Error = usize;
//!
//!     fn from_message(&self, message: &str) -> usize {
//!         message.len()
//!     }
//! }
//!
//! assert_eq!(Length.default_error(), 0);
//! assert_eq!(Length.from_fault(Fault::new("foobar")), 6);
//! assert_eq!(Length.to_fault(42).to_string(), "42");
//! ```

use crate::types::alloc_type::Arc;
use crate::types::Fault;
use alloc::string::ToString;
use core::fmt::Display;

pub mod builtin;

/// Rules for synthesizing and exporting the errors of an
/// [`EitherContext`](crate::EitherContext).
///
/// Every operation must be total and free of side effects. Implementations
/// are expected to be immutable, so one strategy can serve many contexts.
pub trait ErrorStrategy {
    /// The failure payload carried by `Either` values under this strategy.
    type Error: Display;

    /// Builds an error from a human-readable message.
    fn from_message(&self, message: &str) -> Self::Error;

    /// The error used when a failure is requested without an alternative.
    ///
    /// Defaults to `from_message("")`.
    #[inline]
    fn default_error(&self) -> Self::Error {
        self.from_message("")
    }

    /// Builds an error from a caught fault.
    ///
    /// Defaults to `from_message` applied to the fault's message.
    #[inline]
    fn from_fault(&self, fault: Fault) -> Self::Error {
        self.from_message(&fault.to_string())
    }

    /// Converts an error into a fault for callers that work with faults.
    ///
    /// Defaults to a generic fault carrying the error's `Display` text.
    #[inline]
    fn to_fault(&self, error: Self::Error) -> Fault {
        Fault::new(error.to_string())
    }

    /// Adapts this strategy to the error type `J`.
    ///
    /// Every error the strategy synthesizes is passed through `forward`, and
    /// every `J` handed to `to_fault` is passed through `backward` first.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{ErrorStrategy, EitherContext, TEXT};
    ///
    /// let upper = TEXT.map_error(|e: String| e.to_uppercase(), |e: String| e);
    /// let ctx = EitherContext::new(upper);
    ///
    /// assert_eq!(ctx.failure_with::<i32>("nope").get_error(), Some("NOPE".to_string()));
    /// ```
    #[inline]
    fn map_error<J, F, G>(self, forward: F, backward: G) -> MapError<Self, F, G>
    where
        Self: Sized,
        J: Display,
        F: Fn(Self::Error) -> J,
        G: Fn(J) -> Self::Error,
    {
        MapError { inner: self, forward, backward }
    }
}

/// Strategy returned by [`ErrorStrategy::map_error`].
#[derive(Debug, Clone, Copy)]
pub struct MapError<S, F, G> {
    inner: S,
    forward: F,
    backward: G,
}

impl<S, F, G> MapError<S, F, G> {
    /// The adapted strategy.
    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S, F, G, J> ErrorStrategy for MapError<S, F, G>
where
    S: ErrorStrategy,
    J: Display,
    F: Fn(S::Error) -> J,
    G: Fn(J) -> S::Error,
{
    type Error = J;

    #[inline]
    fn from_message(&self, message: &str) -> J {
        (self.forward)(self.inner.from_message(message))
    }

    #[inline]
    fn default_error(&self) -> J {
        (self.forward)(self.inner.default_error())
    }

    #[inline]
    fn from_fault(&self, fault: Fault) -> J {
        (self.forward)(self.inner.from_fault(fault))
    }

    #[inline]
    fn to_fault(&self, error: J) -> Fault {
        self.inner.to_fault((self.backward)(error))
    }
}

macro_rules! forward_strategy {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<S> ErrorStrategy for $ptr
            where
                S: ErrorStrategy + ?Sized,
            {
                type Error = S::Error;

                #[inline]
                fn from_message(&self, message: &str) -> S::Error {
                    (**self).from_message(message)
                }

                #[inline]
                fn default_error(&self) -> S::Error {
                    (**self).default_error()
                }

                #[inline]
                fn from_fault(&self, fault: Fault) -> S::Error {
                    (**self).from_fault(fault)
                }

                #[inline]
                fn to_fault(&self, error: S::Error) -> Fault {
                    (**self).to_fault(error)
                }
            }
        )+
    };
}

// Only pointers that are `Clone` for unsized `S`, since a context clones its
// strategy into every value it creates.
forward_strategy!(&S, Arc<S>);
