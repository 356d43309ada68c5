//! Free-function constructors, mirroring the associated ones on
//! [`ResultAsync`].

use std::future::Future;

use crate::error::Rejection;
use crate::result_async::ResultAsync;

pub fn ok_async<T: 'static, E: 'static>(value: T) -> ResultAsync<T, E> {
    ResultAsync::ok(value)
}

pub fn err_async<T: 'static, E: 'static>(error: E) -> ResultAsync<T, E> {
    ResultAsync::err(error)
}

/// See [`ResultAsync::from_promise`].
pub fn from_promise<T, E, X, F, M>(future: F, map_err: M) -> ResultAsync<T, E>
where
    T: 'static,
    E: 'static,
    F: Future<Output = std::result::Result<T, X>> + 'static,
    M: FnOnce(X) -> E + 'static,
{
    ResultAsync::from_promise(future, map_err)
}

/// See [`ResultAsync::from_safe_promise`].
pub fn from_safe_promise<T, E, F>(future: F) -> ResultAsync<T, E>
where
    T: 'static,
    E: 'static,
    F: Future<Output = T> + 'static,
{
    ResultAsync::from_safe_promise(future)
}

/// See [`ResultAsync::from_throwable`].
pub fn from_async_throwable<A, T, E, X, F, Fut, M>(
    f: F,
    map_err: M,
) -> impl Fn(A) -> ResultAsync<T, E>
where
    T: 'static,
    E: 'static,
    X: 'static,
    F: Fn(A) -> Fut,
    Fut: Future<Output = std::result::Result<T, X>> + 'static,
    M: Fn(Rejection<X>) -> E + 'static,
{
    ResultAsync::from_throwable(f, map_err)
}
