//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use either_context::prelude::*;
//!
//! let ctx = EitherContext::new(TEXT);
//! let checked = ensure!(ctx, 3 > 2).and(ctx.unsafe_value("ok"));
//! assert_eq!(checked.get(), Some("ok"));
//! ```

// Macros
pub use crate::{ensure, failure};

// Core types
pub use crate::context::EitherContext;
pub use crate::either::Either;
pub use crate::types::{Alternative, Fault};

// Strategies
pub use crate::strategy::builtin::{
    ClassNameAndMessage, FaultStrategy, MessageAndCauseStrategy, TextStrategy,
    CLASS_NAME_AND_MESSAGE, FAULT, MESSAGE_AND_CAUSE, TEXT,
};
pub use crate::strategy::ErrorStrategy;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::EitherTraceExt;
