//! Discriminated error values.
//!
//! A tagged error is a plain record whose `_tag` field names its kind:
//!
//! ```
//! use serde::Serialize;
//! use unthrown_core::tagged::create_error;
//!
//! #[derive(Debug, Serialize)]
//! struct NotFound {
//!     id: u32,
//! }
//!
//! let not_found = create_error("NotFound");
//! let e = not_found.make(NotFound { id: 7 });
//! assert_eq!(e.tag, "NotFound");
//! assert_eq!(e.id, 7);
//! assert_eq!(
//!     serde_json::to_value(&e).unwrap(),
//!     serde_json::json!({ "_tag": "NotFound", "id": 7 })
//! );
//! ```
//!
//! Groups add a namespace so that errors from one subsystem can be
//! recognised structurally, including after a trip through JSON.

use std::convert::Infallible;
use std::fmt;
use std::ops::Deref;

use serde::Serialize;
use serde_json::Value;

/// Anything that may carry a `_tag` discriminant.
pub trait Tagged {
    /// The discriminant, if the value has one.
    fn tag(&self) -> Option<&str>;

    fn namespace(&self) -> Option<&str> {
        None
    }
}

impl<T: Tagged + ?Sized> Tagged for &T {
    fn tag(&self) -> Option<&str> {
        (**self).tag()
    }

    fn namespace(&self) -> Option<&str> {
        (**self).namespace()
    }
}

/// JSON values are tagged when they are objects with a string `_tag`.
/// `null`, scalars and arrays never are.
impl Tagged for Value {
    fn tag(&self) -> Option<&str> {
        self.get("_tag").and_then(Value::as_str)
    }

    fn namespace(&self) -> Option<&str> {
        self.get("_namespace").and_then(Value::as_str)
    }
}

/// An error record: a tag, an optional namespace and caller-defined fields.
///
/// Dereferences to the fields, so `error.id` reads a field of `F` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedError<F> {
    #[serde(rename = "_tag")]
    pub tag: &'static str,
    #[serde(rename = "_namespace", skip_serializing_if = "Option::is_none")]
    pub namespace: Option<&'static str>,
    #[serde(flatten)]
    pub fields: F,
}

impl<F> TaggedError<F> {
    pub fn into_fields(self) -> F {
        self.fields
    }
}

impl<F> Deref for TaggedError<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.fields
    }
}

impl<F> Tagged for TaggedError<F> {
    fn tag(&self) -> Option<&str> {
        Some(self.tag)
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace
    }
}

impl<F> fmt::Display for TaggedError<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace {
            Some(ns) => write!(f, "{}/{}", ns, self.tag),
            None => f.write_str(self.tag),
        }
    }
}

impl<F: fmt::Debug> std::error::Error for TaggedError<F> {}

/// Produces [`TaggedError`]s with a fixed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorFactory {
    tag: &'static str,
    namespace: Option<&'static str>,
}

impl ErrorFactory {
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn make<F>(&self, fields: F) -> TaggedError<F> {
        TaggedError {
            tag: self.tag,
            namespace: self.namespace,
            fields,
        }
    }

    /// An error with no fields.
    pub fn bare(&self) -> TaggedError<()> {
        self.make(())
    }
}

pub fn create_error(tag: &'static str) -> ErrorFactory {
    ErrorFactory {
        tag,
        namespace: None,
    }
}

/// A namespace of related error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorGroup {
    namespace: &'static str,
}

pub fn create_error_group(namespace: &'static str) -> ErrorGroup {
    ErrorGroup { namespace }
}

impl ErrorGroup {
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    pub fn create(&self, tag: &'static str) -> ErrorFactory {
        ErrorFactory {
            tag,
            namespace: Some(self.namespace),
        }
    }

    /// True for any tagged value belonging to this group.
    pub fn is<X: Tagged + ?Sized>(&self, value: &X) -> bool {
        value.tag().is_some() && value.namespace() == Some(self.namespace)
    }

    /// Predicate for one kind within this group.
    pub fn is_tag(&self, tag: &'static str) -> TagMatcher {
        TagMatcher {
            namespace: self.namespace,
            tag,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatcher {
    namespace: &'static str,
    tag: &'static str,
}

impl TagMatcher {
    pub fn matches<X: Tagged + ?Sized>(&self, value: &X) -> bool {
        value.tag() == Some(self.tag) && value.namespace() == Some(self.namespace)
    }
}

/// Exhaustiveness check for tagged matches.
///
/// Only an uninhabited value can be passed, so forgetting a case in the
/// surrounding `match` is a type error. Reaching the call anyway panics.
pub fn assert_never(value: Infallible, message: Option<&str>) -> ! {
    let message = message.unwrap_or("unexpected value");
    tracing::error!(value = ?value, "{}", message);
    panic!("{message}: {value:?}")
}
