//! Shorthands that format failure messages lazily.
//!
//! - [`macro@crate::failure`] builds a failure from a `format!` message.
//! - [`macro@crate::ensure`] checks a precondition and formats its message
//!   only when the check fails, keeping formatting off the success path.
//!
//! # Examples
//!
//! ```
//! use either_context::{ensure, failure, EitherContext, TEXT};
//!
//! let ctx = EitherContext::new(TEXT);
//! let limit = 10;
//!
//! let checked = ensure!(ctx, 12 <= limit, "{} exceeds the limit of {}", 12, limit);
//! assert_eq!(checked.get_error(), Some("12 exceeds the limit of 10".to_string()));
//!
//! let missing = failure!(ctx, "user {} not found", 7).or(ctx.unsafe_value(0));
//! assert_eq!(missing.get(), Some(0));
//! ```

/// Builds a failure whose message is produced with `format!`.
///
/// `failure!(ctx, "...", args...)` expands to
/// `ctx.failure_with(format!("...", args...))`.
///
/// # Examples
///
/// ```
/// use either_context::{failure, EitherContext, TEXT};
///
/// let ctx = EitherContext::new(TEXT);
/// let id = 42;
/// let missing = failure!(ctx, "order {id} not found").map(|n: u32| n + 1);
///
/// assert_eq!(missing.get_error(), Some("order 42 not found".to_string()));
/// ```
#[macro_export]
macro_rules! failure {
    ($ctx:expr, $($arg:tt)+) => {
        $ctx.failure_with($crate::__private::format!($($arg)+))
    };
}

/// Checks a precondition, producing an `Either<_, ()>`.
///
/// - `ensure!(ctx, cond)` expands to `ctx.ensure(cond)`.
/// - `ensure!(ctx, cond, "...", args...)` expands to
///   `ctx.ensure_or_else(cond, || format!("...", args...))`; the message is
///   only formatted when `cond` is false.
///
/// # Examples
///
/// ```
/// use either_context::{ensure, EitherContext, TEXT};
///
/// let ctx = EitherContext::new(TEXT);
///
/// assert!(ensure!(ctx, 1 + 1 == 2).is_success());
/// assert_eq!(ensure!(ctx, false).get_error(), Some(String::new()));
/// assert_eq!(
///     ensure!(ctx, !"".is_empty(), "expected input").get_error(),
///     Some("expected input".to_string()),
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($ctx:expr, $cond:expr $(,)?) => {
        $ctx.ensure($cond)
    };
    ($ctx:expr, $cond:expr, $($arg:tt)+) => {
        $ctx.ensure_or_else($cond, || $crate::__private::format!($($arg)+))
    };
}
