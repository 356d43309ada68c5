//! Adapters from other fallible-computation styles into [`Result`].
//!
//! Each adapter pairs one style (panicking code, absent values, predicates,
//! refinements) with a caller-supplied error mapper. The async styles live
//! in `unthrown-async`.

use crate::result::{err, ok, Result};
use crate::thrown::{self, Thrown};

/// Invoke `f` immediately, turning a panic into `Err(map_err(thrown))`.
pub fn from_throwable<T, E, F, M>(f: F, map_err: M) -> Result<T, E>
where
    F: FnOnce() -> T,
    M: FnOnce(Thrown) -> E,
{
    match thrown::catch(f) {
        Ok(value) => ok(value),
        Err(thrown) => err(map_err(thrown)),
    }
}

/// Wrap a panicking function into an equivalent one returning [`Result`].
///
/// Multi-argument functions take their arguments as a tuple.
pub fn wrap_throwable<A, T, E, F, M>(f: F, map_err: M) -> impl Fn(A) -> Result<T, E>
where
    F: Fn(A) -> T,
    M: Fn(Thrown) -> E,
{
    move |args| match thrown::catch(|| f(args)) {
        Ok(value) => ok(value),
        Err(thrown) => err(map_err(thrown)),
    }
}

/// Run a computation that reports failure through `std::result::Result`
/// and may also panic; both channels end up in the returned `Err`.
pub fn try_catch<T, E, F, P>(f: F, on_panic: P) -> Result<T, E>
where
    F: FnOnce() -> std::result::Result<T, E>,
    P: FnOnce(Thrown) -> E,
{
    match thrown::catch(f) {
        Ok(outcome) => outcome.into(),
        Err(thrown) => err(on_panic(thrown)),
    }
}

/// `Some(v)` → `Ok(v)`, `None` → `Err(error)`.
pub fn from_nullable<T, E>(value: Option<T>, error: E) -> Result<T, E> {
    match value {
        Some(value) => ok(value),
        None => err(error),
    }
}

/// `Ok(value)` when `predicate` holds, otherwise `Err(on_fail(value))`.
pub fn from_predicate<T, E, P, F>(value: T, predicate: P, on_fail: F) -> Result<T, E>
where
    P: FnOnce(&T) -> bool,
    F: FnOnce(T) -> E,
{
    if predicate(&value) {
        ok(value)
    } else {
        err(on_fail(value))
    }
}

/// Narrowing variant of [`from_predicate`]: `refine` either produces the
/// narrower value or hands the original back for the error mapper.
pub fn from_refinement<T, U, E, R, F>(value: T, refine: R, on_fail: F) -> Result<U, E>
where
    R: FnOnce(T) -> std::result::Result<U, T>,
    F: FnOnce(T) -> E,
{
    match refine(value) {
        Ok(narrowed) => ok(narrowed),
        Err(original) => err(on_fail(original)),
    }
}
