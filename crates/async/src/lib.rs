//! unthrown-async: `ResultAsync`, a pending `Result` that never rejects.
//!
//! Futures in this crate are executor-agnostic and not `Send`; nothing is
//! spawned. Failures of every kind reach the `Err` channel at the
//! constructor boundary:
//!
//! - [`ResultAsync::from_promise`] -- a future's own error, via `map_err`
//! - [`ResultAsync::from_throwable`] -- own errors and panics, as [`Rejection`]
//! - [`ResultAsync::from_callback`] -- callback-style APIs, as [`CallbackError`]
//!
//! ```
//! use unthrown_async::ResultAsync;
//! use unthrown_core::err;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let settled = ResultAsync::<u8, &str>::from_promise(async { Err("x") }, |e| e).await;
//! assert_eq!(settled, err("x"));
//! # }
//! ```

mod callback;
mod catch_unwind;
pub mod construct;
pub mod do_notation;
mod error;
mod result_async;
mod safe_try;

pub use callback::Callback;
pub use construct::{err_async, from_async_throwable, from_promise, from_safe_promise, ok_async};
pub use do_notation::{bind_async, start_async};
pub use error::{CallbackError, Rejection};
pub use result_async::{IntoResultAsync, ResultAsync, ResultAsyncExt};
pub use safe_try::{safe_try_async, AsyncScope};
