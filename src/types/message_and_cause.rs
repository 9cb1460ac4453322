use crate::types::alloc_type::String;
use crate::types::Fault;
use core::fmt;

/// Error value of [`MessageAndCauseStrategy`](crate::MessageAndCauseStrategy):
/// a message and, when the failure came from a fault, that fault.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageAndCause {
    pub message: String,
    pub cause: Option<Fault>,
}

impl MessageAndCause {
    #[inline]
    pub fn new(message: impl Into<String>, cause: Option<Fault>) -> Self {
        Self { message: message.into(), cause }
    }
}

impl fmt::Display for MessageAndCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{} (caused by {})", self.message, cause),
            None => f.write_str(&self.message),
        }
    }
}
