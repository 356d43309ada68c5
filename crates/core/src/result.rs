//! The `Result` container: a branded, immutable `Ok(value)` / `Err(error)`.
//!
//! Every method consumes the receiver and returns a new instance; nothing
//! is ever mutated in place. Transforms only touch the matching side and
//! pass the other one through untouched, without calling the supplied
//! function.
//!
//! Fields are private, so an instance can neither be forged nor edited
//! after construction:
//!
//! ```compile_fail
//! let mut r = unthrown_core::ok::<i32, String>(1);
//! r.repr = unthrown_core::err::<i32, String>("nope".into()).repr;
//! ```

use std::fmt;

use crate::brand::{Brand, Branded};
use crate::safe_try::Delegate;
use crate::thrown::{self, Thrown};

/// Discriminant of a [`Result`], as written into the `_tag` wire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultTag {
    Ok,
    Err,
}

impl ResultTag {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultTag::Ok => "Ok",
            ResultTag::Err => "Err",
        }
    }
}

impl fmt::Display for ResultTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Success (`Ok`) or failure (`Err`) as a value.
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Result<T, E> {
    brand: Brand,
    repr: Repr<T, E>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Repr<T, E> {
    Ok(T),
    Err(E),
}

/// Construct an `Ok`.
pub const fn ok<T, E>(value: T) -> Result<T, E> {
    Result {
        brand: Brand::RESULT,
        repr: Repr::Ok(value),
    }
}

/// Construct an `Err`.
pub const fn err<T, E>(error: E) -> Result<T, E> {
    Result {
        brand: Brand::RESULT,
        repr: Repr::Err(error),
    }
}

impl<T, E> Branded for Result<T, E> {
    fn brand(&self) -> Brand {
        self.brand
    }
}

impl<T, E> Result<T, E> {
    // ── Guards ───────────────────────────────────────────────────────

    pub fn is_ok(&self) -> bool {
        matches!(self.repr, Repr::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self.repr, Repr::Err(_))
    }

    pub fn is_ok_and(&self, f: impl FnOnce(&T) -> bool) -> bool {
        match &self.repr {
            Repr::Ok(value) => f(value),
            Repr::Err(_) => false,
        }
    }

    pub fn is_err_and(&self, f: impl FnOnce(&E) -> bool) -> bool {
        match &self.repr {
            Repr::Ok(_) => false,
            Repr::Err(error) => f(error),
        }
    }

    pub fn tag(&self) -> ResultTag {
        match self.repr {
            Repr::Ok(_) => ResultTag::Ok,
            Repr::Err(_) => ResultTag::Err,
        }
    }

    /// Borrow the payload of whichever side is populated.
    pub fn as_ref(&self) -> Result<&T, &E> {
        match &self.repr {
            Repr::Ok(value) => ok(value),
            Repr::Err(error) => err(error),
        }
    }

    /// Convert into the standard library's `Result` for `match` and `?`.
    pub fn into_std(self) -> std::result::Result<T, E> {
        match self.repr {
            Repr::Ok(value) => Ok(value),
            Repr::Err(error) => Err(error),
        }
    }

    // ── Transform ────────────────────────────────────────────────────

    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Ok(value) => ok(f(value)),
            Repr::Err(error) => err(error),
        }
    }

    pub fn map_err<F2, F>(self, f: F) -> Result<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self.repr {
            Repr::Ok(value) => ok(value),
            Repr::Err(error) => err(f(error)),
        }
    }

    pub fn map_both<U, F2, M, N>(self, on_ok: M, on_err: N) -> Result<U, F2>
    where
        M: FnOnce(T) -> U,
        N: FnOnce(E) -> F2,
    {
        match self.repr {
            Repr::Ok(value) => ok(on_ok(value)),
            Repr::Err(error) => err(on_err(error)),
        }
    }

    /// Monadic bind: `f` runs only on `Ok`, an `Err` short-circuits.
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self.repr {
            Repr::Ok(value) => f(value),
            Repr::Err(error) => err(error),
        }
    }

    /// Recovery: `f` runs only on `Err`.
    pub fn or_else<F2, F>(self, f: F) -> Result<T, F2>
    where
        F: FnOnce(E) -> Result<T, F2>,
    {
        match self.repr {
            Repr::Ok(value) => ok(value),
            Repr::Err(error) => f(error),
        }
    }

    // ── Side effects ─────────────────────────────────────────────────

    /// Run `f` on the `Ok` value and return `self` unchanged.
    ///
    /// A panic raised by `f` is caught and discarded. Use
    /// [`inspect`](Self::inspect), [`and_through`](Self::and_through) or
    /// [`and_tee_checked`](Self::and_tee_checked) when the side effect's
    /// failure must stay observable.
    pub fn and_tee<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Repr::Ok(value) = &self.repr {
            thrown::swallow("and_tee", || f(value));
        }
        self
    }

    /// Run `f` on the `Err` value and return `self` unchanged. Panics from
    /// `f` are caught and discarded.
    pub fn or_tee<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Repr::Err(error) = &self.repr {
            thrown::swallow("or_tee", || f(error));
        }
        self
    }

    /// Like [`and_tee`](Self::and_tee), but a panic in `f` turns the result
    /// into `Err(on_panic(thrown))`.
    pub fn and_tee_checked<F, P>(self, f: F, on_panic: P) -> Self
    where
        F: FnOnce(&T),
        P: FnOnce(Thrown) -> E,
    {
        let outcome = match &self.repr {
            Repr::Ok(value) => thrown::catch(|| f(value)),
            Repr::Err(_) => Ok(()),
        };
        match outcome {
            Ok(()) => self,
            Err(thrown) => err(on_panic(thrown)),
        }
    }

    /// Like [`or_tee`](Self::or_tee), but a panic in `f` replaces the error
    /// with `on_panic(thrown)`.
    pub fn or_tee_checked<F, P>(self, f: F, on_panic: P) -> Self
    where
        F: FnOnce(&E),
        P: FnOnce(Thrown) -> E,
    {
        let outcome = match &self.repr {
            Repr::Ok(_) => Ok(()),
            Repr::Err(error) => thrown::catch(|| f(error)),
        };
        match outcome {
            Ok(()) => self,
            Err(thrown) => err(on_panic(thrown)),
        }
    }

    /// Run `f` on the `Ok` value; panics propagate.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Repr::Ok(value) = &self.repr {
            f(value);
        }
        self
    }

    /// Run `f` on the `Err` value; panics propagate.
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Repr::Err(error) = &self.repr {
            f(error);
        }
        self
    }

    /// Run a fallible side effect on the `Ok` value. Its success value is
    /// discarded and `self` is returned; its `Err` replaces `self`.
    pub fn and_through<U, F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Result<U, E>,
    {
        let outcome = match &self.repr {
            Repr::Ok(value) => f(value),
            Repr::Err(_) => return self,
        };
        match outcome.repr {
            Repr::Ok(_) => self,
            Repr::Err(error) => err(error),
        }
    }

    // ── Combine ──────────────────────────────────────────────────────

    /// Swap the two sides.
    pub fn flip(self) -> Result<E, T> {
        match self.repr {
            Repr::Ok(value) => err(value),
            Repr::Err(error) => ok(error),
        }
    }

    /// `other` if `self` is `Ok`, otherwise `self`'s error.
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self.repr {
            Repr::Ok(_) => other,
            Repr::Err(error) => err(error),
        }
    }

    /// `self` if it is `Ok`, otherwise `other`.
    pub fn or<F2>(self, other: Result<T, F2>) -> Result<T, F2> {
        match self.repr {
            Repr::Ok(value) => ok(value),
            Repr::Err(_) => other,
        }
    }

    // ── Fold / extract ───────────────────────────────────────────────

    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Ok(value) => f(value),
            Repr::Err(_) => default,
        }
    }

    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Ok(value) => f(value),
            Repr::Err(error) => default(error),
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(&self.repr, Repr::Ok(v) if v == value)
    }

    pub fn contains_err(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        matches!(&self.repr, Repr::Err(e) if e == error)
    }

    /// Exhaustive fold over both sides.
    pub fn match_with<R, M, N>(self, on_ok: M, on_err: N) -> R
    where
        M: FnOnce(T) -> R,
        N: FnOnce(E) -> R,
    {
        match self.repr {
            Repr::Ok(value) => on_ok(value),
            Repr::Err(error) => on_err(error),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self.repr {
            Repr::Ok(value) => value,
            Repr::Err(_) => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self.repr {
            Repr::Ok(value) => value,
            Repr::Err(error) => f(error),
        }
    }

    /// The `Ok` value, or `None`.
    pub fn to_nullable(self) -> std::option::Option<T> {
        match self.repr {
            Repr::Ok(value) => Some(value),
            Repr::Err(_) => None,
        }
    }

    /// Same projection as [`to_nullable`](Self::to_nullable); Rust has a
    /// single absence value.
    pub fn to_undefined(self) -> std::option::Option<T> {
        self.to_nullable()
    }

    /// `(error, value)` with exactly one side present.
    pub fn into_tuple(self) -> (std::option::Option<E>, std::option::Option<T>) {
        match self.repr {
            Repr::Ok(value) => (None, Some(value)),
            Repr::Err(error) => (Some(error), None),
        }
    }

    /// Collapse both sides into a common type.
    pub fn merge<U>(self) -> U
    where
        T: Into<U>,
        E: Into<U>,
    {
        match self.repr {
            Repr::Ok(value) => value.into(),
            Repr::Err(error) => error.into(),
        }
    }

    // ── Option bridge ────────────────────────────────────────────────

    pub fn to_option(self) -> crate::Option<T> {
        match self.repr {
            Repr::Ok(value) => crate::some(value),
            Repr::Err(_) => crate::none(),
        }
    }

    pub fn to_option_err(self) -> crate::Option<E> {
        match self.repr {
            Repr::Ok(_) => crate::none(),
            Repr::Err(error) => crate::some(error),
        }
    }

    // ── Generator protocol ───────────────────────────────────────────

    /// Hand this result to the early-return protocol used by
    /// [`safe_try`](crate::safe_try::safe_try).
    pub fn delegate(self) -> Delegate<T, E> {
        Delegate::new(self)
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> Result<T, E> {
        match self.repr {
            Repr::Ok(inner) => inner,
            Repr::Err(error) => err(error),
        }
    }
}

impl<T, E> Result<crate::Option<T>, E> {
    /// `Ok(None)` → `None`, `Ok(Some(v))` → `Some(Ok(v))`, `Err(e)` → `Some(Err(e))`.
    pub fn transpose(self) -> crate::Option<Result<T, E>> {
        match self.repr {
            Repr::Ok(inner) => inner.map(ok),
            Repr::Err(error) => crate::some(err(error)),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(value: std::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => ok(value),
            Err(error) => err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        value.into_std()
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            Repr::Err(error) => f.debug_tuple("Err").field(error).finish(),
        }
    }
}
