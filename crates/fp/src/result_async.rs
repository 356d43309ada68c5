//! Curried [`ResultAsync`] operations.
//!
//! Chaining functions return a closure producing a new [`ResultAsync`].
//! Extracting functions return a closure producing a boxed [`Settled`]
//! future of the plain value.

use std::future::Future;
use std::pin::Pin;

use unthrown_async::{IntoResultAsync, ResultAsync, ResultAsyncExt};
use unthrown_core::{Result, Thrown};

/// A boxed future that settles to a plain value.
pub type Settled<R> = Pin<Box<dyn Future<Output = R>>>;

// ── Sync → async bridge ──────────────────────────────────────────────

pub fn to_async<T: 'static, E: 'static>(result: Result<T, E>) -> ResultAsync<T, E> {
    result.to_async()
}

pub fn async_map<T, U, E, F, Fut>(f: F) -> impl FnOnce(Result<T, E>) -> ResultAsync<U, E>
where
    T: 'static,
    U: 'static,
    E: 'static,
    F: FnOnce(T) -> Fut + 'static,
    Fut: Future<Output = U> + 'static,
{
    move |result| result.async_map(f)
}

pub fn async_and_then<T, U, E, F>(f: F) -> impl FnOnce(Result<T, E>) -> ResultAsync<U, E>
where
    T: 'static,
    U: 'static,
    E: 'static,
    F: FnOnce(T) -> ResultAsync<U, E> + 'static,
{
    move |result| result.async_and_then(f)
}

// ── Chaining ─────────────────────────────────────────────────────────

pub fn map<T, U, E, F>(f: F) -> impl FnOnce(ResultAsync<T, E>) -> ResultAsync<U, E>
where
    T: 'static,
    U: 'static,
    E: 'static,
    F: FnOnce(T) -> U + 'static,
{
    move |pending| pending.map(f)
}

pub fn map_async<T, U, E, F, Fut>(f: F) -> impl FnOnce(ResultAsync<T, E>) -> ResultAsync<U, E>
where
    T: 'static,
    U: 'static,
    E: 'static,
    F: FnOnce(T) -> Fut + 'static,
    Fut: Future<Output = U> + 'static,
{
    move |pending| pending.map_async(f)
}

pub fn map_err<T, E, F2, F>(f: F) -> impl FnOnce(ResultAsync<T, E>) -> ResultAsync<T, F2>
where
    T: 'static,
    E: 'static,
    F2: 'static,
    F: FnOnce(E) -> F2 + 'static,
{
    move |pending| pending.map_err(f)
}

pub fn and_then<T, U, E, R, F>(f: F) -> impl FnOnce(ResultAsync<T, E>) -> ResultAsync<U, E>
where
    T: 'static,
    U: 'static,
    E: 'static,
    R: IntoResultAsync<U, E> + 'static,
    F: FnOnce(T) -> R + 'static,
{
    move |pending| pending.and_then(f)
}

pub fn or_else<T, E, F2, R, F>(f: F) -> impl FnOnce(ResultAsync<T, E>) -> ResultAsync<T, F2>
where
    T: 'static,
    E: 'static,
    F2: 'static,
    R: IntoResultAsync<T, F2> + 'static,
    F: FnOnce(E) -> R + 'static,
{
    move |pending| pending.or_else(f)
}

pub fn and_tee<T, E, F>(f: F) -> impl FnOnce(ResultAsync<T, E>) -> ResultAsync<T, E>
where
    T: 'static,
    E: 'static,
    F: FnOnce(&T) + 'static,
{
    move |pending| pending.and_tee(f)
}

pub fn or_tee<T, E, F>(f: F) -> impl FnOnce(ResultAsync<T, E>) -> ResultAsync<T, E>
where
    T: 'static,
    E: 'static,
    F: FnOnce(&E) + 'static,
{
    move |pending| pending.or_tee(f)
}

pub fn inspect<T, E, F>(f: F) -> impl FnOnce(ResultAsync<T, E>) -> ResultAsync<T, E>
where
    T: 'static,
    E: 'static,
    F: FnOnce(&T) + 'static,
{
    move |pending| pending.inspect(f)
}

pub fn inspect_err<T, E, F>(f: F) -> impl FnOnce(ResultAsync<T, E>) -> ResultAsync<T, E>
where
    T: 'static,
    E: 'static,
    F: FnOnce(&E) + 'static,
{
    move |pending| pending.inspect_err(f)
}

pub fn and_through<T, U, E, R, F>(f: F) -> impl FnOnce(ResultAsync<T, E>) -> ResultAsync<T, E>
where
    T: 'static,
    U: 'static,
    E: 'static,
    R: IntoResultAsync<U, E> + 'static,
    F: FnOnce(&T) -> R + 'static,
{
    move |pending| pending.and_through(f)
}

/// See [`ResultAsync::catch_panics`].
pub fn catch_panics<T, E, P>(on_panic: P) -> impl FnOnce(ResultAsync<T, E>) -> ResultAsync<T, E>
where
    T: 'static,
    E: 'static,
    P: FnOnce(Thrown) -> E + 'static,
{
    move |pending| pending.catch_panics(on_panic)
}

// ── Fold / extract ───────────────────────────────────────────────────

pub fn match_with<T, E, R, M, N>(on_ok: M, on_err: N) -> impl FnOnce(ResultAsync<T, E>) -> Settled<R>
where
    T: 'static,
    E: 'static,
    R: 'static,
    M: FnOnce(T) -> R + 'static,
    N: FnOnce(E) -> R + 'static,
{
    move |pending| Box::pin(pending.match_with(on_ok, on_err))
}

pub fn unwrap_or<T, E>(default: T) -> impl FnOnce(ResultAsync<T, E>) -> Settled<T>
where
    T: 'static,
    E: 'static,
{
    move |pending| Box::pin(pending.unwrap_or(default))
}

pub fn unwrap_or_else<T, E, F>(f: F) -> impl FnOnce(ResultAsync<T, E>) -> Settled<T>
where
    T: 'static,
    E: 'static,
    F: FnOnce(E) -> T + 'static,
{
    move |pending| Box::pin(pending.unwrap_or_else(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pipe;
    use unthrown_core::{err, ok};

    #[tokio::test]
    async fn async_pipeline_matches_method_chain() {
        let piped = ResultAsync::<i32, String>::ok(5)
            .pipe(map(|n: i32| n * 10))
            .pipe(and_then(|n: i32| {
                if n > 20 {
                    ok(n)
                } else {
                    err("too small".to_string())
                }
            }))
            .await;
        let chained = ResultAsync::<i32, String>::ok(5)
            .map(|n| n * 10)
            .and_then(|n| if n > 20 { ok(n) } else { err("too small".to_string()) })
            .await;
        assert_eq!(piped, chained);
        assert_eq!(piped, ok(50));
    }

    #[tokio::test]
    async fn extractors_settle_to_plain_values() {
        let failed = ResultAsync::<i32, &str>::err("down");
        assert_eq!(failed.pipe(unwrap_or(7)).await, 7);
        let label = ResultAsync::<i32, &str>::ok(1)
            .pipe(match_with(|n: i32| format!("ok {n}"), |e: &str| format!("err {e}")))
            .await;
        assert_eq!(label, "ok 1");
    }

    #[tokio::test]
    async fn settled_results_enter_async_pipelines() {
        let lifted = ok::<i32, String>(2).pipe(to_async).await;
        assert_eq!(lifted, ok(2));
        let mapped = ok::<i32, String>(2)
            .pipe(async_map(|n: i32| async move { n * 3 }))
            .await;
        assert_eq!(mapped, ok(6));
        let chained = err::<i32, String>("no".into())
            .pipe(async_and_then(|n: i32| ResultAsync::<i32, String>::ok(n)))
            .await;
        assert_eq!(chained, err("no".to_string()));
    }

    #[tokio::test]
    async fn catch_panics_in_a_pipeline() {
        let settled = ResultAsync::<i32, String>::ok(1)
            .pipe(map(|_: i32| -> i32 { panic!("bad step") }))
            .pipe(catch_panics(|thrown: Thrown| thrown.message().to_string()))
            .await;
        assert_eq!(settled, err("bad step".to_string()));
    }

    #[tokio::test]
    async fn errors_recover_through_async_steps() {
        let recovered = ResultAsync::<i32, &str>::err("cache miss")
            .pipe(or_else(|_: &str| ResultAsync::<i32, ()>::ok(0)))
            .pipe(map_async(|n: i32| async move { n + 1 }))
            .await;
        assert_eq!(recovered, ok(1));
    }
}
