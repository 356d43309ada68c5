//! The `Option` container: a branded, immutable `Some(value)` / `None`.
//!
//! Structurally parallel to [`Result`](crate::Result) and bridged to it in
//! both directions. Every `none()` yields the same payload-free variant,
//! [`Option::NONE`].

use std::fmt;

use crate::brand::{Brand, Branded};
use crate::result::{err, ok, Result};

/// Discriminant of an [`Option`], as written into the `_tag` wire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionTag {
    Some,
    None,
}

impl OptionTag {
    pub fn as_str(self) -> &'static str {
        match self {
            OptionTag::Some => "Some",
            OptionTag::None => "None",
        }
    }
}

impl fmt::Display for OptionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence (`Some`) or absence (`None`) as a value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Option<T> {
    brand: Brand,
    repr: std::option::Option<T>,
}

pub const fn some<T>(value: T) -> Option<T> {
    Option {
        brand: Brand::OPTION,
        repr: Some(value),
    }
}

pub const fn none<T>() -> Option<T> {
    Option::NONE
}

impl<T> Branded for Option<T> {
    fn brand(&self) -> Brand {
        self.brand
    }
}

impl<T> Option<T> {
    /// The one absent value.
    pub const NONE: Option<T> = Option {
        brand: Brand::OPTION,
        repr: None,
    };

    /// `None` for an absent value, `Some` for anything present, including
    /// `0`, `""` and `false`.
    pub fn from_nullable(value: std::option::Option<T>) -> Self {
        match value {
            Some(value) => some(value),
            None => Option::NONE,
        }
    }

    pub fn is_some(&self) -> bool {
        self.repr.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.repr.is_none()
    }

    pub fn is_some_and(&self, f: impl FnOnce(&T) -> bool) -> bool {
        match &self.repr {
            Some(value) => f(value),
            None => false,
        }
    }

    pub fn tag(&self) -> OptionTag {
        if self.repr.is_some() {
            OptionTag::Some
        } else {
            OptionTag::None
        }
    }

    pub fn as_ref(&self) -> Option<&T> {
        match &self.repr {
            Some(value) => some(value),
            None => none(),
        }
    }

    pub fn into_std(self) -> std::option::Option<T> {
        self.repr
    }

    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Some(value) => some(f(value)),
            None => none(),
        }
    }

    pub fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self.repr {
            Some(value) => f(value),
            None => none(),
        }
    }

    /// Keep the value only if `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self.repr {
            Some(value) => {
                if predicate(&value) {
                    some(value)
                } else {
                    none()
                }
            }
            None => none(),
        }
    }

    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        match self.repr {
            Some(value) => some(value),
            None => f(),
        }
    }

    pub fn or(self, other: Option<T>) -> Self {
        match self.repr {
            Some(value) => some(value),
            None => other,
        }
    }

    pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
        match (self.repr, other.repr) {
            (Some(a), Some(b)) => some((a, b)),
            _ => none(),
        }
    }

    pub fn zip_with<U, R, F>(self, other: Option<U>, f: F) -> Option<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Some(value) => f(value),
            None => default,
        }
    }

    pub fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self.repr {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.repr.unwrap_or(default)
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.repr.unwrap_or_else(f)
    }

    /// `Some(v)` → `Ok(v)`; `None` → `Err(on_none())`.
    pub fn to_result<E, F>(self, on_none: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self.repr {
            Some(value) => ok(value),
            None => err(on_none()),
        }
    }

    pub fn to_nullable(self) -> std::option::Option<T> {
        self.repr
    }

    pub fn to_undefined(self) -> std::option::Option<T> {
        self.repr
    }
}

impl<T> Option<Option<T>> {
    pub fn flatten(self) -> Option<T> {
        match self.repr {
            Some(inner) => inner,
            None => none(),
        }
    }
}

impl<T, E> Option<Result<T, E>> {
    /// `None` → `Ok(None)`, `Some(Ok(v))` → `Ok(Some(v))`, `Some(Err(e))` → `Err(e)`.
    pub fn transpose(self) -> Result<Option<T>, E> {
        match self.repr {
            None => ok(none()),
            Some(inner) => inner.map(some),
        }
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Option::NONE
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    fn from(value: std::option::Option<T>) -> Self {
        Option::from_nullable(value)
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        value.repr
    }
}

impl<T: fmt::Debug> fmt::Debug for Option<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}
