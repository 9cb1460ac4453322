//! The fault type exchanged with fault-based code.
//!
//! A [`Fault`] is what an [`Either`](crate::Either) turns into when a caller
//! asks for the raw value with [`get_or_throw`](crate::Either::get_or_throw),
//! and what [`EitherContext::safely`](crate::EitherContext::safely) hands to the
//! strategy when a computation fails.
//!
//! # Examples
//!
//! ```
//! use either_context::Fault;
//!
//! let root = Fault::new("connection refused");
//! let fault = Fault::with_cause("loading profile", root);
//!
//! assert_eq!(fault.to_string(), "loading profile");
//! assert_eq!(format!("{fault:#}"), "loading profile -> connection refused");
//! ```

use crate::types::alloc_type::{Arc, Box, Cow, String};
use alloc::string::ToString;
use core::any::{Any, TypeId};
use core::error::Error;
use core::fmt;
use core::hash::{Hash, Hasher};
use smallvec::SmallVec;

type SharedSource = Arc<dyn Error + Send + Sync + 'static>;

/// The usual ad-hoc error type, accepted wherever a computation's error is
/// captured.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Kind reported by faults built from a bare message.
pub const GENERIC_KIND: &str = "Fault";

/// Kind reported by faults built from a caught panic.
pub const PANIC_KIND: &str = "panic";

/// A message plus the name of what raised it, optionally backed by the
/// original error.
///
/// Cloning is cheap: the source error is shared.
///
/// Two faults are equal when their kinds and messages are equal; sources are
/// not compared.
#[must_use]
#[derive(Debug, Clone)]
pub struct Fault {
    kind: Cow<'static, str>,
    message: String,
    source: Option<SharedSource>,
    // Set when `source` is the error this fault was built from, so the
    // source repeats this fault's message.
    wraps_source: bool,
}

impl Fault {
    /// Creates a fault of kind [`GENERIC_KIND`] with no source.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::Fault;
    ///
    /// let fault = Fault::new("boom");
    /// assert_eq!(fault.kind(), "Fault");
    /// assert_eq!(fault.message(), "boom");
    /// ```
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(GENERIC_KIND, message)
    }

    /// Creates a fault with an explicit kind name.
    #[inline]
    pub fn with_kind(kind: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self { kind: kind.into(), message: message.into(), source: None, wraps_source: false }
    }

    /// Creates a fault whose source is `cause`.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::Fault;
    /// use std::error::Error;
    ///
    /// let fault = Fault::with_cause("outer", Fault::new("inner"));
    /// assert_eq!(fault.source().unwrap().to_string(), "inner");
    /// ```
    #[inline]
    pub fn with_cause(message: impl Into<String>, cause: Fault) -> Self {
        Self {
            kind: Cow::Borrowed(GENERIC_KIND),
            message: message.into(),
            source: Some(Arc::new(cause)),
            wraps_source: false,
        }
    }

    /// Wraps an arbitrary error.
    ///
    /// The kind is the error's type name, the message its `Display` text, and
    /// the error itself becomes the source. A `Fault` passed in is returned
    /// as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::Fault;
    ///
    /// let parse = "x".parse::<i32>().unwrap_err();
    /// let fault = Fault::from_error(parse);
    ///
    /// assert!(fault.kind().ends_with("ParseIntError"));
    /// assert_eq!(fault.message(), "invalid digit found in string");
    /// assert!(fault.downcast_ref::<std::num::ParseIntError>().is_some());
    ///
    /// let same = Fault::from_error(Fault::new("kept"));
    /// assert_eq!(same, Fault::new("kept"));
    /// ```
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        if let Some(fault) = (&error as &dyn Any).downcast_ref::<Fault>() {
            return fault.clone();
        }

        Self {
            kind: Cow::Borrowed(core::any::type_name::<E>()),
            message: error.to_string(),
            source: Some(Arc::new(error)),
            wraps_source: true,
        }
    }

    /// Wraps a boxed error whose concrete type is unknown.
    ///
    /// The kind is [`GENERIC_KIND`] and the box becomes the shared source. A
    /// boxed `Fault` is unboxed as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_context::types::fault::{BoxError, GENERIC_KIND};
    /// use either_context::Fault;
    ///
    /// let boxed: BoxError = "disk full".into();
    /// let fault = Fault::from_boxed(boxed);
    ///
    /// assert_eq!(fault.kind(), GENERIC_KIND);
    /// assert_eq!(fault.message(), "disk full");
    /// assert!(fault.cause().is_some());
    /// ```
    #[inline]
    pub fn from_boxed(error: BoxError) -> Self {
        Self::from_boxed_with_kind(GENERIC_KIND, error)
    }

    /// Wraps the error of a failed computation. Concrete error types keep
    /// their type name as the kind; boxed errors and plain strings get
    /// [`GENERIC_KIND`].
    pub(crate) fn captured<X>(error: X) -> Self
    where
        X: Into<BoxError> + 'static,
    {
        let id = TypeId::of::<X>();
        let untyped = id == TypeId::of::<BoxError>()
            || id == TypeId::of::<String>()
            || id == TypeId::of::<&'static str>();
        let kind = if untyped { GENERIC_KIND } else { core::any::type_name::<X>() };
        Self::from_boxed_with_kind(kind, error.into())
    }

    fn from_boxed_with_kind(kind: &'static str, error: BoxError) -> Self {
        match error.downcast::<Fault>() {
            Ok(fault) => *fault,
            Err(error) => Self {
                kind: Cow::Borrowed(kind),
                message: error.to_string(),
                source: Some(Arc::from(error)),
                wraps_source: true,
            },
        }
    }

    #[cfg(feature = "std")]
    pub(crate) fn from_panic(payload: std::boxed::Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => payload
                .downcast_ref::<&'static str>()
                .map(|message| String::from(*message))
                .unwrap_or_else(|| String::from("panic with a non-string payload")),
        };
        Self::with_kind(PANIC_KIND, message)
    }

    /// Name of what produced this fault.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying error, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Attempts to view the source error as a concrete type.
    #[inline]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        self.cause()?.downcast_ref::<T>()
    }

    /// Iterates over this fault followed by its chain of sources.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Renders the chain as `outer -> ... -> root`.
    ///
    /// The error wrapped by [`Fault::from_error`] or [`Fault::from_boxed`]
    /// is not listed again after its fault. Other links are kept even when
    /// their text repeats.
    pub fn error_chain(&self) -> String {
        let mut links: SmallVec<[String; 4]> = SmallVec::new();
        let mut skip = false;
        for link in self.chain() {
            if !skip {
                links.push(link.to_string());
            }
            skip = link.downcast_ref::<Fault>().is_some_and(|fault| fault.wraps_source);
        }
        links.join(" -> ")
    }
}

impl From<BoxError> for Fault {
    #[inline]
    fn from(error: BoxError) -> Self {
        Self::from_boxed(error)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(&self.error_chain());
        }
        f.write_str(&self.message)
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn Error + 'static))
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for Fault {}

impl Hash for Fault {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.message.hash(state);
    }
}

/// Iterator returned by [`Fault::chain`].
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain").field("next", &self.next.map(|e| e.to_string())).finish()
    }
}
