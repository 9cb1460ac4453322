//! Ready-made strategies.
//!
//! | Constant | Strategy | Error type | Faults become |
//! |----------|----------|------------|---------------|
//! | [`TEXT`] | [`TextStrategy`] | `String` | their message |
//! | [`FAULT`] | [`FaultStrategy`] | [`Fault`] | themselves |
//! | [`CLASS_NAME_AND_MESSAGE`] | [`ClassNameAndMessage`] | `String` | `"<kind>: <message>"` |
//! | [`MESSAGE_AND_CAUSE`] | [`MessageAndCauseStrategy`] | [`MessageAndCause`] | their message plus the fault |
//!
//! All of them are unit structs, so the constants can back `static` contexts:
//!
//! ```
//! use either_context::{EitherContext, TextStrategy, TEXT};
//!
//! static CTX: EitherContext<TextStrategy> = EitherContext::new(TEXT);
//!
//! assert_eq!(CTX.failure::<i32>().get_error(), Some(String::new()));
//! ```

use crate::strategy::ErrorStrategy;
use crate::types::alloc_type::String;
use crate::types::{Fault, MessageAndCause};
use alloc::format;

/// Errors are plain strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextStrategy;

/// Errors are [`Fault`]s; faults pass through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FaultStrategy;

/// Errors are strings; faults are rendered with their kind in front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassNameAndMessage;

/// Errors are [`MessageAndCause`] pairs that keep the originating fault.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MessageAndCauseStrategy;

pub const TEXT: TextStrategy = TextStrategy;
pub const FAULT: FaultStrategy = FaultStrategy;
pub const CLASS_NAME_AND_MESSAGE: ClassNameAndMessage = ClassNameAndMessage;
pub const MESSAGE_AND_CAUSE: MessageAndCauseStrategy = MessageAndCauseStrategy;

impl ErrorStrategy for TextStrategy {
    type Error = String;

    #[inline]
    fn from_message(&self, message: &str) -> String {
        message.into()
    }
}

impl ErrorStrategy for FaultStrategy {
    type Error = Fault;

    #[inline]
    fn from_message(&self, message: &str) -> Fault {
        Fault::new(message)
    }

    #[inline]
    fn from_fault(&self, fault: Fault) -> Fault {
        fault
    }

    #[inline]
    fn to_fault(&self, error: Fault) -> Fault {
        error
    }
}

impl ErrorStrategy for ClassNameAndMessage {
    type Error = String;

    #[inline]
    fn from_message(&self, message: &str) -> String {
        message.into()
    }

    fn from_fault(&self, fault: Fault) -> String {
        format!("{}: {}", fault.kind(), fault.message())
    }
}

impl ErrorStrategy for MessageAndCauseStrategy {
    type Error = MessageAndCause;

    #[inline]
    fn from_message(&self, message: &str) -> MessageAndCause {
        MessageAndCause::new(message, None)
    }

    fn from_fault(&self, fault: Fault) -> MessageAndCause {
        let message = String::from(fault.message());
        MessageAndCause::new(message, Some(fault))
    }

    fn to_fault(&self, error: MessageAndCause) -> Fault {
        match error.cause {
            Some(cause) => Fault::with_cause(error.message, cause),
            None => Fault::new(error.message),
        }
    }
}
