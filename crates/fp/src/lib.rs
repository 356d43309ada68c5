//! unthrown-fp: the standalone function surface.
//!
//! Every container method has a free-function twin here. Functions that
//! take arguments besides the container are curried: they take the
//! arguments first and return a closure awaiting the container, so
//! `result::map(f)(r)` is `r.map(f)`. Functions that take only the
//! container are plain functions and can be passed directly.
//!
//! [`Pipe`] applies them left to right:
//!
//! ```
//! use unthrown_core::ok;
//! use unthrown_fp::{result, Pipe};
//!
//! let doubled = ok::<i32, String>(21)
//!     .pipe(result::map(|n: i32| n * 2))
//!     .pipe(result::unwrap_or(0));
//! assert_eq!(doubled, 42);
//! ```
//!
//! # Public API
//!
//! - [`result`] -- curried [`Result`](unthrown_core::Result) operations
//! - [`option`] -- curried [`Option`](unthrown_core::Option) operations
//! - [`result_async`] -- curried [`ResultAsync`](unthrown_async::ResultAsync) operations
//! - [`Pipe`] -- left-to-right application

pub mod option;
pub mod result;
pub mod result_async;

/// Left-to-right function application, available on every value.
pub trait Pipe: Sized {
    /// `x.pipe(f)` is `f(x)`.
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}
