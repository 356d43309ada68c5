//! Curried [`Result`] operations.

use unthrown_core::{Option, Result, ResultTag, Thrown};

// ── Guards ───────────────────────────────────────────────────────────

pub fn tag<T, E>(result: &Result<T, E>) -> ResultTag {
    result.tag()
}

pub fn as_ref<T, E>(result: &Result<T, E>) -> Result<&T, &E> {
    result.as_ref()
}

pub fn is_ok<T, E>(result: &Result<T, E>) -> bool {
    result.is_ok()
}

pub fn is_err<T, E>(result: &Result<T, E>) -> bool {
    result.is_err()
}

pub fn is_ok_and<T, E, P>(predicate: P) -> impl FnOnce(&Result<T, E>) -> bool
where
    P: FnOnce(&T) -> bool,
{
    move |result: &Result<T, E>| result.is_ok_and(predicate)
}

pub fn is_err_and<T, E, P>(predicate: P) -> impl FnOnce(&Result<T, E>) -> bool
where
    P: FnOnce(&E) -> bool,
{
    move |result: &Result<T, E>| result.is_err_and(predicate)
}

// ── Transform ────────────────────────────────────────────────────────

pub fn map<T, U, E, F>(f: F) -> impl FnOnce(Result<T, E>) -> Result<U, E>
where
    F: FnOnce(T) -> U,
{
    move |result| result.map(f)
}

pub fn map_err<T, E, F2, F>(f: F) -> impl FnOnce(Result<T, E>) -> Result<T, F2>
where
    F: FnOnce(E) -> F2,
{
    move |result| result.map_err(f)
}

pub fn map_both<T, U, E, F2, M, N>(on_ok: M, on_err: N) -> impl FnOnce(Result<T, E>) -> Result<U, F2>
where
    M: FnOnce(T) -> U,
    N: FnOnce(E) -> F2,
{
    move |result| result.map_both(on_ok, on_err)
}

pub fn and_then<T, U, E, F>(f: F) -> impl FnOnce(Result<T, E>) -> Result<U, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    move |result| result.and_then(f)
}

pub fn or_else<T, E, F2, F>(f: F) -> impl FnOnce(Result<T, E>) -> Result<T, F2>
where
    F: FnOnce(E) -> Result<T, F2>,
{
    move |result| result.or_else(f)
}

pub fn flip<T, E>(result: Result<T, E>) -> Result<E, T> {
    result.flip()
}

pub fn flatten<T, E>(result: Result<Result<T, E>, E>) -> Result<T, E> {
    result.flatten()
}

pub fn transpose<T, E>(result: Result<Option<T>, E>) -> Option<Result<T, E>> {
    result.transpose()
}

// ── Side effects ─────────────────────────────────────────────────────

/// See [`Result::and_tee`]: panics in `f` are discarded.
pub fn and_tee<T, E, F>(f: F) -> impl FnOnce(Result<T, E>) -> Result<T, E>
where
    F: FnOnce(&T),
{
    move |result| result.and_tee(f)
}

/// See [`Result::or_tee`]: panics in `f` are discarded.
pub fn or_tee<T, E, F>(f: F) -> impl FnOnce(Result<T, E>) -> Result<T, E>
where
    F: FnOnce(&E),
{
    move |result| result.or_tee(f)
}

pub fn and_tee_checked<T, E, F, P>(f: F, on_panic: P) -> impl FnOnce(Result<T, E>) -> Result<T, E>
where
    F: FnOnce(&T),
    P: FnOnce(Thrown) -> E,
{
    move |result| result.and_tee_checked(f, on_panic)
}

pub fn or_tee_checked<T, E, F, P>(f: F, on_panic: P) -> impl FnOnce(Result<T, E>) -> Result<T, E>
where
    F: FnOnce(&E),
    P: FnOnce(Thrown) -> E,
{
    move |result| result.or_tee_checked(f, on_panic)
}

pub fn inspect<T, E, F>(f: F) -> impl FnOnce(Result<T, E>) -> Result<T, E>
where
    F: FnOnce(&T),
{
    move |result| result.inspect(f)
}

pub fn inspect_err<T, E, F>(f: F) -> impl FnOnce(Result<T, E>) -> Result<T, E>
where
    F: FnOnce(&E),
{
    move |result| result.inspect_err(f)
}

pub fn and_through<T, U, E, F>(f: F) -> impl FnOnce(Result<T, E>) -> Result<T, E>
where
    F: FnOnce(&T) -> Result<U, E>,
{
    move |result| result.and_through(f)
}

// ── Combine ──────────────────────────────────────────────────────────

/// `and(other)(r)` is `r.and(other)`.
pub fn and<T, U, E>(other: Result<U, E>) -> impl FnOnce(Result<T, E>) -> Result<U, E> {
    move |result| result.and(other)
}

pub fn or<T, E, F2>(other: Result<T, F2>) -> impl FnOnce(Result<T, E>) -> Result<T, F2> {
    move |result| result.or(other)
}

// ── Fold / extract ───────────────────────────────────────────────────

pub fn map_or<T, U, E, F>(default: U, f: F) -> impl FnOnce(Result<T, E>) -> U
where
    F: FnOnce(T) -> U,
{
    move |result| result.map_or(default, f)
}

pub fn map_or_else<T, U, E, D, F>(default: D, f: F) -> impl FnOnce(Result<T, E>) -> U
where
    D: FnOnce(E) -> U,
    F: FnOnce(T) -> U,
{
    move |result| result.map_or_else(default, f)
}

pub fn contains<T: PartialEq, E>(value: T) -> impl Fn(&Result<T, E>) -> bool {
    move |result: &Result<T, E>| result.contains(&value)
}

pub fn contains_err<T, E: PartialEq>(error: E) -> impl Fn(&Result<T, E>) -> bool {
    move |result: &Result<T, E>| result.contains_err(&error)
}

pub fn match_with<T, E, R, M, N>(on_ok: M, on_err: N) -> impl FnOnce(Result<T, E>) -> R
where
    M: FnOnce(T) -> R,
    N: FnOnce(E) -> R,
{
    move |result| result.match_with(on_ok, on_err)
}

pub fn unwrap_or<T, E>(default: T) -> impl FnOnce(Result<T, E>) -> T {
    move |result| result.unwrap_or(default)
}

pub fn unwrap_or_else<T, E, F>(f: F) -> impl FnOnce(Result<T, E>) -> T
where
    F: FnOnce(E) -> T,
{
    move |result| result.unwrap_or_else(f)
}

pub fn to_nullable<T, E>(result: Result<T, E>) -> std::option::Option<T> {
    result.to_nullable()
}

pub fn to_undefined<T, E>(result: Result<T, E>) -> std::option::Option<T> {
    result.to_undefined()
}

pub fn into_tuple<T, E>(result: Result<T, E>) -> (std::option::Option<E>, std::option::Option<T>) {
    result.into_tuple()
}

pub fn merge<T, E, U>(result: Result<T, E>) -> U
where
    T: Into<U>,
    E: Into<U>,
{
    result.merge()
}

pub fn to_option<T, E>(result: Result<T, E>) -> Option<T> {
    result.to_option()
}

pub fn to_option_err<T, E>(result: Result<T, E>) -> Option<E> {
    result.to_option_err()
}

/// Encode in the wire format; see `unthrown_interchange::ToJson`.
#[cfg(feature = "interchange")]
pub fn to_json<T, E>(result: &Result<T, E>) -> Result<serde_json::Value, unthrown_interchange::InterchangeError>
where
    T: serde::Serialize,
    E: serde::Serialize,
{
    unthrown_interchange::ToJson::to_json(result)
}
