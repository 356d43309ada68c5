//! Do-notation for async chains.
//!
//! The sync steps from `unthrown_core::do_notation` already work with
//! [`ResultAsync::and_then`]; the helpers here add steps whose computation
//! is itself async.

use unthrown_core::do_notation::{self, Ctx};

use crate::result_async::{IntoResultAsync, ResultAsync};

/// `Ok` of an empty context, as a pending result.
pub fn start_async<E: 'static>() -> ResultAsync<Ctx, E> {
    ResultAsync::from_result(do_notation::start())
}

/// A chain step binding the eventual `Ok` of `f(ctx)` under `key`.
pub fn bind_async<V, E, R, F>(key: &'static str, f: F) -> impl FnOnce(Ctx) -> ResultAsync<Ctx, E>
where
    V: 'static,
    E: 'static,
    R: IntoResultAsync<V, E>,
    F: FnOnce(&Ctx) -> R,
{
    move |ctx| {
        let pending = f(&ctx).into_result_async();
        pending.map(move |value| ctx.with(key, value))
    }
}

impl<E: 'static> ResultAsync<Ctx, E> {
    /// Method form of [`bind_async`]; `f` may return a settled or a pending
    /// result.
    pub fn bind<V, R, F>(self, key: &'static str, f: F) -> ResultAsync<Ctx, E>
    where
        V: 'static,
        R: IntoResultAsync<V, E> + 'static,
        F: FnOnce(&Ctx) -> R + 'static,
    {
        self.and_then(bind_async(key, f))
    }

    pub fn let_<V, F>(self, key: &'static str, f: F) -> ResultAsync<Ctx, E>
    where
        V: 'static,
        F: FnOnce(&Ctx) -> V + 'static,
    {
        self.and_then(do_notation::let_(key, f))
    }
}
