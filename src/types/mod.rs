//! Value types shared by strategies and contexts.
//!
//! - [`Fault`]: the fault exchanged with fault-based code.
//! - [`Alternative`]: an explicit description of a failure.
//! - [`MessageAndCause`]: the error type of the message-and-cause strategy.
pub(crate) mod alloc_type;
pub mod alternative;
pub mod fault;
pub mod message_and_cause;

pub use alternative::Alternative;
pub use fault::{BoxError, Chain, Fault};
pub use message_and_cause::MessageAndCause;
