//! A type-safe `Either` whose failures are produced by a pluggable
//! [`ErrorStrategy`].
//!
//! An [`EitherContext`] binds one strategy and is the only way to create
//! [`Either`] values. The strategy decides how failures are built from
//! messages and faults, what the default failure is, and how a failure turns
//! back into a [`Fault`] for fault-based callers.
//!
//! # Examples
//!
//! ## Lifting and composing
//!
//! ```
//! use either_context::{EitherContext, TEXT};
//!
//! let ctx = EitherContext::new(TEXT);
//!
//! let total = ctx
//!     .safely(|| "40".parse::<i32>())
//!     .and_then(|n| ctx.ensure_or(n >= 0, "negative").map(|()| n + 2))
//!     .get_or(0);
//!
//! assert_eq!(total, 42);
//! ```
//!
//! ## Choosing a representation
//!
//! ```
//! use either_context::{EitherContext, Fault, MESSAGE_AND_CAUSE};
//!
//! let ctx = EitherContext::new(MESSAGE_AND_CAUSE);
//! let failed = ctx.safely(|| Err::<(), _>(Fault::new("disk full")));
//!
//! let error = failed.get_error().unwrap();
//! assert_eq!(error.message, "disk full");
//! assert_eq!(error.cause, Some(Fault::new("disk full")));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

/// The factory binding a strategy to `Either` values
pub mod context;
/// The `Either` value type and its combinators
pub mod either;
/// Failure-formatting macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The `ErrorStrategy` contract and built-in strategies
pub mod strategy;
/// Faults, alternatives and other shared value types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub mod tracing_ext;

pub use context::EitherContext;
pub use either::Either;
pub use strategy::builtin::{
    ClassNameAndMessage, FaultStrategy, MessageAndCauseStrategy, TextStrategy,
    CLASS_NAME_AND_MESSAGE, FAULT, MESSAGE_AND_CAUSE, TEXT,
};
pub use strategy::{ErrorStrategy, MapError};
pub use types::{Alternative, BoxError, Fault, MessageAndCause};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
