//! The async bridge: a future of a [`Result`] that never fails outside its
//! `Err` channel.
//!
//! Every constructor routes failure into `Err`, and every chaining method
//! passes the opposite side through untouched, so awaiting a
//! [`ResultAsync`] always yields a branded [`Result`].

use std::fmt;
use std::future::{self, Future};
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use unthrown_core::thrown;
use unthrown_core::{combine, err, ok, NonEmpty, Result, Thrown};

use crate::catch_unwind::CatchUnwind;
use crate::error::Rejection;

/// A pending [`Result`].
///
/// Not `Send`; chains run on whichever executor polls them, one step after
/// another in construction order.
#[must_use = "a ResultAsync does nothing unless awaited"]
pub struct ResultAsync<T, E> {
    inner: Pin<Box<dyn Future<Output = Result<T, E>>>>,
}

/// Anything an async continuation may return: a settled [`Result`] or
/// another [`ResultAsync`].
pub trait IntoResultAsync<T, E> {
    fn into_result_async(self) -> ResultAsync<T, E>;
}

impl<T: 'static, E: 'static> IntoResultAsync<T, E> for Result<T, E> {
    fn into_result_async(self) -> ResultAsync<T, E> {
        ResultAsync::from_result(self)
    }
}

impl<T, E> IntoResultAsync<T, E> for ResultAsync<T, E> {
    fn into_result_async(self) -> ResultAsync<T, E> {
        self
    }
}

// ── Construction ─────────────────────────────────────────────────────

impl<T: 'static, E: 'static> ResultAsync<T, E> {
    /// Wrap a future that already resolves to a [`Result`].
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + 'static,
    {
        ResultAsync {
            inner: Box::pin(future),
        }
    }

    pub fn ok(value: T) -> Self {
        Self::from_result(ok(value))
    }

    pub fn err(error: E) -> Self {
        Self::from_result(err(error))
    }

    pub fn from_result(result: Result<T, E>) -> Self {
        Self::new(future::ready(result))
    }

    /// Adapt a future of `std::result::Result`; its error goes through
    /// `map_err`. A panic inside the future is not an `Err` here: append
    /// [`catch_panics`](Self::catch_panics) to route it into the `Err`
    /// channel, or use [`from_throwable`](Self::from_throwable).
    pub fn from_promise<F, X, M>(future: F, map_err: M) -> Self
    where
        F: Future<Output = std::result::Result<T, X>> + 'static,
        M: FnOnce(X) -> E + 'static,
    {
        Self::new(async move {
            match future.await {
                Ok(value) => ok(value),
                Err(error) => err(map_err(error)),
            }
        })
    }

    /// Adapt a future that cannot fail.
    pub fn from_safe_promise<F>(future: F) -> Self
    where
        F: Future<Output = T> + 'static,
    {
        Self::new(async move { ok(future.await) })
    }

    /// Wrap an async function so that every call yields a [`ResultAsync`].
    ///
    /// Both the function's own error and a panic, raised either by the call
    /// or while polling its future, reach `map_err` as a [`Rejection`].
    /// Multi-argument functions take their arguments as a tuple.
    pub fn from_throwable<A, X, F, Fut, M>(f: F, map_err: M) -> impl Fn(A) -> ResultAsync<T, E>
    where
        X: 'static,
        F: Fn(A) -> Fut,
        Fut: Future<Output = std::result::Result<T, X>> + 'static,
        M: Fn(Rejection<X>) -> E + 'static,
    {
        let map_err = Rc::new(map_err);
        move |args| {
            let map_err = Rc::clone(&map_err);
            match thrown::catch(|| f(args)) {
                Err(thrown) => ResultAsync::err(map_err(Rejection::Panicked(thrown))),
                Ok(pending) => ResultAsync::new(async move {
                    match CatchUnwind::new(pending).await {
                        Ok(Ok(value)) => ok(value),
                        Ok(Err(error)) => err(map_err(Rejection::Failed(error))),
                        Err(thrown) => err(map_err(Rejection::Panicked(thrown))),
                    }
                }),
            }
        }
    }

    /// First entrant to settle, `Ok` or `Err`. Entrants are polled in order
    /// and the losers are dropped unfinished.
    pub fn race(entrants: NonEmpty<Self>) -> Self {
        let mut entrants = entrants.into_vec();
        Self::new(future::poll_fn(move |cx| {
            for entrant in entrants.iter_mut() {
                if let Poll::Ready(result) = Pin::new(entrant).poll(cx) {
                    return Poll::Ready(result);
                }
            }
            Poll::Pending
        }))
    }

    /// Drive every entrant to completion, then keep the first `Err` in
    /// argument order, or all values.
    pub fn all(entrants: Vec<Self>) -> ResultAsync<Vec<T>, E> {
        ResultAsync::new(async move { combine::all(settle_all(entrants).await) })
    }

    /// Drive every entrant to completion and report every `Err`.
    pub fn all_settled(entrants: Vec<Self>) -> ResultAsync<Vec<T>, Vec<E>> {
        ResultAsync::new(async move { combine::all_settled(settle_all(entrants).await) })
    }
}

enum Slot<T, E> {
    Pending(ResultAsync<T, E>),
    Settled(Result<T, E>),
}

/// Poll every entrant concurrently; outputs keep argument order.
async fn settle_all<T, E>(entrants: Vec<ResultAsync<T, E>>) -> Vec<Result<T, E>> {
    let mut slots: Vec<Slot<T, E>> = entrants.into_iter().map(Slot::Pending).collect();
    future::poll_fn(move |cx| {
        let mut waiting = false;
        for slot in slots.iter_mut() {
            if let Slot::Pending(entrant) = slot {
                let polled = Pin::new(entrant).poll(cx);
                match polled {
                    Poll::Ready(result) => *slot = Slot::Settled(result),
                    Poll::Pending => waiting = true,
                }
            }
        }
        if waiting {
            return Poll::Pending;
        }
        Poll::Ready(
            slots
                .drain(..)
                .filter_map(|slot| match slot {
                    Slot::Settled(result) => Some(result),
                    Slot::Pending(_) => None,
                })
                .collect(),
        )
    })
    .await
}

// ── Chaining ─────────────────────────────────────────────────────────

impl<T: 'static, E: 'static> ResultAsync<T, E> {
    pub fn map<U, F>(self, f: F) -> ResultAsync<U, E>
    where
        U: 'static,
        F: FnOnce(T) -> U + 'static,
    {
        ResultAsync::new(async move { self.await.map(f) })
    }

    /// `map` with an async transform.
    pub fn map_async<U, F, Fut>(self, f: F) -> ResultAsync<U, E>
    where
        U: 'static,
        F: FnOnce(T) -> Fut + 'static,
        Fut: Future<Output = U> + 'static,
    {
        ResultAsync::new(async move {
            match self.await.into_std() {
                Ok(value) => ok(f(value).await),
                Err(error) => err(error),
            }
        })
    }

    pub fn map_err<F2, F>(self, f: F) -> ResultAsync<T, F2>
    where
        F2: 'static,
        F: FnOnce(E) -> F2 + 'static,
    {
        ResultAsync::new(async move { self.await.map_err(f) })
    }

    /// `f` runs only on `Ok` and may return a [`Result`] or a
    /// [`ResultAsync`].
    pub fn and_then<U, R, F>(self, f: F) -> ResultAsync<U, E>
    where
        U: 'static,
        R: IntoResultAsync<U, E> + 'static,
        F: FnOnce(T) -> R + 'static,
    {
        ResultAsync::new(async move {
            match self.await.into_std() {
                Ok(value) => f(value).into_result_async().await,
                Err(error) => err(error),
            }
        })
    }

    /// `f` runs only on `Err`.
    pub fn or_else<F2, R, F>(self, f: F) -> ResultAsync<T, F2>
    where
        F2: 'static,
        R: IntoResultAsync<T, F2> + 'static,
        F: FnOnce(E) -> R + 'static,
    {
        ResultAsync::new(async move {
            match self.await.into_std() {
                Ok(value) => ok(value),
                Err(error) => f(error).into_result_async().await,
            }
        })
    }

    /// Side effect on the `Ok` value; a panic in `f` is discarded.
    pub fn and_tee<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) + 'static,
    {
        Self::new(async move { self.await.and_tee(f) })
    }

    /// Side effect on the `Err` value; a panic in `f` is discarded.
    pub fn or_tee<F>(self, f: F) -> Self
    where
        F: FnOnce(&E) + 'static,
    {
        Self::new(async move { self.await.or_tee(f) })
    }

    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) + 'static,
    {
        Self::new(async move { self.await.inspect(f) })
    }

    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E) + 'static,
    {
        Self::new(async move { self.await.inspect_err(f) })
    }

    /// Fallible side effect on the `Ok` value: its `Err` replaces the
    /// chain's value, its success is discarded.
    pub fn and_through<U, R, F>(self, f: F) -> Self
    where
        U: 'static,
        R: IntoResultAsync<U, E> + 'static,
        F: FnOnce(&T) -> R + 'static,
    {
        Self::new(async move {
            let value = match self.await.into_std() {
                Ok(value) => value,
                Err(error) => return err(error),
            };
            match f(&value).into_result_async().await.into_std() {
                Ok(_) => ok(value),
                Err(error) => err(error),
            }
        })
    }

    /// Route a panic raised anywhere upstream in this chain into the `Err`
    /// channel as `on_panic(thrown)`.
    ///
    /// Continuations run while the chain is polled, so a panicking
    /// constructor future or a panicking `map`, `and_then` or `inspect`
    /// closure before this point settles as `Err` instead of unwinding out
    /// of `.await`. Steps appended after it are not covered.
    pub fn catch_panics<P>(self, on_panic: P) -> Self
    where
        P: FnOnce(Thrown) -> E + 'static,
    {
        Self::new(async move {
            match CatchUnwind::new(self).await {
                Ok(settled) => settled,
                Err(thrown) => {
                    tracing::debug!(
                        target: "unthrown::async",
                        panic = %thrown,
                        "chain panicked; settling as Err"
                    );
                    err(on_panic(thrown))
                }
            }
        })
    }

    // ── Fold / extract ───────────────────────────────────────────────

    pub async fn match_with<R, M, N>(self, on_ok: M, on_err: N) -> R
    where
        M: FnOnce(T) -> R,
        N: FnOnce(E) -> R,
    {
        self.await.match_with(on_ok, on_err)
    }

    pub async fn unwrap_or(self, default: T) -> T {
        self.await.unwrap_or(default)
    }

    pub async fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.await.unwrap_or_else(f)
    }
}

impl<T, E> Future for ResultAsync<T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

impl<T, E> fmt::Debug for ResultAsync<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultAsync").finish_non_exhaustive()
    }
}

impl<T: 'static, E: 'static> From<Result<T, E>> for ResultAsync<T, E> {
    fn from(result: Result<T, E>) -> Self {
        ResultAsync::from_result(result)
    }
}

// ── Sync → async bridge ──────────────────────────────────────────────

/// Lift a settled [`Result`] into async chains.
pub trait ResultAsyncExt<T, E> {
    fn to_async(self) -> ResultAsync<T, E>;

    fn async_map<U, F, Fut>(self, f: F) -> ResultAsync<U, E>
    where
        U: 'static,
        F: FnOnce(T) -> Fut + 'static,
        Fut: Future<Output = U> + 'static;

    fn async_and_then<U, F>(self, f: F) -> ResultAsync<U, E>
    where
        U: 'static,
        F: FnOnce(T) -> ResultAsync<U, E> + 'static;
}

impl<T: 'static, E: 'static> ResultAsyncExt<T, E> for Result<T, E> {
    fn to_async(self) -> ResultAsync<T, E> {
        ResultAsync::from_result(self)
    }

    fn async_map<U, F, Fut>(self, f: F) -> ResultAsync<U, E>
    where
        U: 'static,
        F: FnOnce(T) -> Fut + 'static,
        Fut: Future<Output = U> + 'static,
    {
        self.to_async().map_async(f)
    }

    fn async_and_then<U, F>(self, f: F) -> ResultAsync<U, E>
    where
        U: 'static,
        F: FnOnce(T) -> ResultAsync<U, E> + 'static,
    {
        match self.into_std() {
            Ok(value) => f(value),
            Err(error) => ResultAsync::err(error),
        }
    }
}
