//! Early return for async bodies.
//!
//! ```
//! use unthrown_async::{safe_try_async, AsyncScope, ResultAsync};
//! use unthrown_core::{err, ok};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let outcome = safe_try_async(|scope| async move {
//!     let a = scope.bind(ok::<i32, &str>(1))?;
//!     let b: i32 = scope.bind_async(ResultAsync::err("stop")).await?;
//!     Ok(a + b)
//! })
//! .await;
//! assert_eq!(outcome, err("stop"));
//! # }
//! ```

use std::future::Future;

use async_trait::async_trait;
use unthrown_core::{err, ok, Halt, Scope};

use crate::result_async::ResultAsync;

/// Async binding on a [`Scope`].
#[async_trait(?Send)]
pub trait AsyncScope<E: 'static> {
    /// Await `result`, then unwrap its `Ok` or halt the body with its `Err`.
    async fn bind_async<T: 'static>(
        &self,
        result: ResultAsync<T, E>,
    ) -> std::result::Result<T, Halt<E>>;

    /// [`bind_async`](Self::bind_async) for an error that converts into `E`.
    async fn bind_async_from<T: 'static, E2: 'static>(
        &self,
        result: ResultAsync<T, E2>,
    ) -> std::result::Result<T, Halt<E>>
    where
        E: From<E2>;
}

#[async_trait(?Send)]
impl<E: 'static> AsyncScope<E> for Scope<E> {
    async fn bind_async<T: 'static>(
        &self,
        result: ResultAsync<T, E>,
    ) -> std::result::Result<T, Halt<E>> {
        self.bind(result.await)
    }

    async fn bind_async_from<T: 'static, E2: 'static>(
        &self,
        result: ResultAsync<T, E2>,
    ) -> std::result::Result<T, Halt<E>>
    where
        E: From<E2>,
    {
        self.bind_from(result.await)
    }
}

/// Run an async body; its first halted `Err` becomes the chain's `Err`.
///
/// Locals of the body are dropped as soon as it halts, so cleanup runs
/// before the returned [`ResultAsync`] settles.
pub fn safe_try_async<T, E, F, Fut>(body: F) -> ResultAsync<T, E>
where
    T: 'static,
    E: 'static,
    F: FnOnce(Scope<E>) -> Fut,
    Fut: Future<Output = std::result::Result<T, Halt<E>>> + 'static,
{
    let pending = body(Scope::new());
    ResultAsync::new(async move {
        match pending.await {
            Ok(value) => ok(value),
            Err(halt) => {
                tracing::trace!("async safe_try body halted early");
                err(halt.into_error())
            }
        }
    })
}
