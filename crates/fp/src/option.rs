//! Curried [`Option`] operations.

use unthrown_core::{Option, OptionTag, Result};

pub fn from_nullable<T>(value: std::option::Option<T>) -> Option<T> {
    Option::from_nullable(value)
}

pub fn tag<T>(option: &Option<T>) -> OptionTag {
    option.tag()
}

pub fn as_ref<T>(option: &Option<T>) -> Option<&T> {
    option.as_ref()
}

pub fn is_some<T>(option: &Option<T>) -> bool {
    option.is_some()
}

pub fn is_none<T>(option: &Option<T>) -> bool {
    option.is_none()
}

pub fn is_some_and<T, P>(predicate: P) -> impl FnOnce(&Option<T>) -> bool
where
    P: FnOnce(&T) -> bool,
{
    move |option: &Option<T>| option.is_some_and(predicate)
}

pub fn map<T, U, F>(f: F) -> impl FnOnce(Option<T>) -> Option<U>
where
    F: FnOnce(T) -> U,
{
    move |option| option.map(f)
}

pub fn and_then<T, U, F>(f: F) -> impl FnOnce(Option<T>) -> Option<U>
where
    F: FnOnce(T) -> Option<U>,
{
    move |option| option.and_then(f)
}

pub fn filter<T, P>(predicate: P) -> impl FnOnce(Option<T>) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    move |option| option.filter(predicate)
}

pub fn or_else<T, F>(f: F) -> impl FnOnce(Option<T>) -> Option<T>
where
    F: FnOnce() -> Option<T>,
{
    move |option| option.or_else(f)
}

pub fn or<T>(other: Option<T>) -> impl FnOnce(Option<T>) -> Option<T> {
    move |option| option.or(other)
}

pub fn zip<T, U>(other: Option<U>) -> impl FnOnce(Option<T>) -> Option<(T, U)> {
    move |option| option.zip(other)
}

pub fn zip_with<T, U, R, F>(other: Option<U>, f: F) -> impl FnOnce(Option<T>) -> Option<R>
where
    F: FnOnce(T, U) -> R,
{
    move |option| option.zip_with(other, f)
}

pub fn map_or<T, U, F>(default: U, f: F) -> impl FnOnce(Option<T>) -> U
where
    F: FnOnce(T) -> U,
{
    move |option| option.map_or(default, f)
}

pub fn match_with<T, R, S, N>(on_some: S, on_none: N) -> impl FnOnce(Option<T>) -> R
where
    S: FnOnce(T) -> R,
    N: FnOnce() -> R,
{
    move |option| option.match_with(on_some, on_none)
}

pub fn unwrap_or<T>(default: T) -> impl FnOnce(Option<T>) -> T {
    move |option| option.unwrap_or(default)
}

pub fn unwrap_or_else<T, F>(f: F) -> impl FnOnce(Option<T>) -> T
where
    F: FnOnce() -> T,
{
    move |option| option.unwrap_or_else(f)
}

pub fn to_result<T, E, F>(on_none: F) -> impl FnOnce(Option<T>) -> Result<T, E>
where
    F: FnOnce() -> E,
{
    move |option| option.to_result(on_none)
}

pub fn to_nullable<T>(option: Option<T>) -> std::option::Option<T> {
    option.to_nullable()
}

pub fn to_undefined<T>(option: Option<T>) -> std::option::Option<T> {
    option.to_undefined()
}

pub fn flatten<T>(option: Option<Option<T>>) -> Option<T> {
    option.flatten()
}

pub fn transpose<T, E>(option: Option<Result<T, E>>) -> Result<Option<T>, E> {
    option.transpose()
}

/// Encode in the wire format; see `unthrown_interchange::ToJson`.
#[cfg(feature = "interchange")]
pub fn to_json<T>(option: &Option<T>) -> Result<serde_json::Value, unthrown_interchange::InterchangeError>
where
    T: serde::Serialize,
{
    unthrown_interchange::ToJson::to_json(option)
}
