//! Bridge from callback-style APIs.

use tokio::sync::oneshot;
use unthrown_core::{err, ok, thrown};

use crate::error::CallbackError;
use crate::result_async::ResultAsync;

/// One-shot completion handle handed to a callback-style operation.
///
/// Consuming methods guarantee at most one answer. Dropping the handle
/// unanswered settles the operation with [`CallbackError::Dropped`].
#[derive(Debug)]
pub struct Callback<T, X> {
    tx: oneshot::Sender<std::result::Result<T, X>>,
}

impl<T, X> Callback<T, X> {
    pub fn resolve(self, value: T) {
        self.settle(Ok(value));
    }

    pub fn reject(self, error: X) {
        self.settle(Err(error));
    }

    /// Answer with a `std::result::Result`, node-style.
    pub fn settle(self, outcome: std::result::Result<T, X>) {
        // The receiver is gone only if the ResultAsync was dropped.
        let _ = self.tx.send(outcome);
    }
}

impl<T: 'static, E: 'static> ResultAsync<T, E> {
    /// Start a callback-style operation and await its answer.
    ///
    /// `start` runs immediately. Its reported error, a dropped callback and
    /// a panic inside `start` all reach `map_err`.
    pub fn from_callback<X, S, M>(start: S, map_err: M) -> Self
    where
        X: 'static,
        S: FnOnce(Callback<T, X>),
        M: FnOnce(CallbackError<X>) -> E + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let started = thrown::catch(|| start(Callback { tx }));
        ResultAsync::new(async move {
            if let Err(thrown) = started {
                return err(map_err(CallbackError::Panicked(thrown)));
            }
            match rx.await {
                Ok(Ok(value)) => ok(value),
                Ok(Err(error)) => err(map_err(CallbackError::Failed(error))),
                Err(_) => {
                    tracing::debug!("callback dropped before it was called");
                    err(map_err(CallbackError::Dropped))
                }
            }
        })
    }
}
