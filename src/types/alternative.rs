//! The explicit input accepted wherever a failure may be described.
//!
//! Factory operations such as [`EitherContext::failure_with`](crate::EitherContext::failure_with)
//! accept anything convertible into an [`Alternative`]. Strings select the
//! strategy's `from_message` rule and faults select `from_fault`; leaving the
//! alternative out selects `default_error`.
//!
//! # Examples
//!
//! ```
//! use either_context::{Alternative, Fault};
//!
//! assert_eq!(Alternative::from("missing"), Alternative::Message("missing".into()));
//! assert!(matches!(Alternative::from(Fault::new("boom")), Alternative::Fault(_)));
//! ```

use crate::strategy::ErrorStrategy;
use crate::types::alloc_type::{Cow, String};
use crate::types::Fault;

/// Description of a failure, resolved into an error by a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alternative {
    /// Resolved through [`ErrorStrategy::from_message`].
    Message(String),
    /// Resolved through [`ErrorStrategy::from_fault`].
    Fault(Fault),
}

impl Alternative {
    /// Resolves the alternative with `strategy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::{Alternative, ErrorStrategy, TEXT};
    ///
    /// let error = Alternative::from("bar").into_error(&TEXT);
    /// assert_eq!(error, TEXT.from_message("bar"));
    /// ```
    #[inline]
    pub fn into_error<S>(self, strategy: &S) -> S::Error
    where
        S: ErrorStrategy + ?Sized,
    {
        match self {
            Self::Message(message) => strategy.from_message(&message),
            Self::Fault(fault) => strategy.from_fault(fault),
        }
    }
}

impl From<&str> for Alternative {
    #[inline]
    fn from(message: &str) -> Self {
        Self::Message(message.into())
    }
}

impl From<String> for Alternative {
    #[inline]
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<Cow<'_, str>> for Alternative {
    #[inline]
    fn from(message: Cow<'_, str>) -> Self {
        Self::Message(message.into_owned())
    }
}

impl From<Fault> for Alternative {
    #[inline]
    fn from(fault: Fault) -> Self {
        Self::Fault(fault)
    }
}
