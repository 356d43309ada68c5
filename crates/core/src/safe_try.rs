//! Early return from a block of fallible steps.
//!
//! A `safe_try` body receives a [`Scope`]; `scope.bind(result)?` unwraps an
//! `Ok` or stops the body at the first `Err`, which becomes the body's
//! result. Stopping is an ordinary `?` return, so every live local is
//! dropped on the way out and `Drop`-based cleanup always runs.
//!
//! ```
//! use unthrown_core::{err, ok, safe_try};
//!
//! let outcome = safe_try(|scope| {
//!     let a = scope.bind(ok::<i32, &str>(1))?;
//!     let b: i32 = scope.bind(err("stop"))?;
//!     Ok(a + b + 999)
//! });
//! assert_eq!(outcome, err("stop"));
//! ```
//!
//! Underneath, each bound result is driven through a [`Delegate`]: an `Ok`
//! completes immediately with its value, an `Err` yields a [`Halt`] once.
//! Resuming an `Err` delegate past that yield is a programming error and
//! panics.

use std::marker::PhantomData;

use crate::result::{err, ok, Result};

/// Stop signal carrying the error that ended a `safe_try` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Halt<E> {
    error: E,
}

impl<E> Halt<E> {
    pub fn new(error: E) -> Self {
        Halt { error }
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn into_error(self) -> E {
        self.error
    }
}

/// One resumption of a [`Delegate`].
#[derive(Debug, PartialEq, Eq)]
pub enum Step<T, E> {
    /// The delegate finished with its `Ok` value.
    Complete(T),
    /// The delegate yielded its `Err`; the caller must stop.
    Yield(Halt<E>),
}

/// Generator view of a [`Result`].
#[derive(Debug)]
pub struct Delegate<T, E> {
    state: DelegateState<T, E>,
}

#[derive(Debug)]
enum DelegateState<T, E> {
    Ready(Result<T, E>),
    Yielded,
    Completed,
}

impl<T, E> Delegate<T, E> {
    pub(crate) fn new(result: Result<T, E>) -> Self {
        Delegate {
            state: DelegateState::Ready(result),
        }
    }

    /// Drive the delegate one step.
    ///
    /// # Panics
    ///
    /// When resumed again after it has yielded or completed.
    pub fn resume(&mut self) -> Step<T, E> {
        match std::mem::replace(&mut self.state, DelegateState::Completed) {
            DelegateState::Ready(result) => match result.into_std() {
                Ok(value) => Step::Complete(value),
                Err(error) => {
                    self.state = DelegateState::Yielded;
                    Step::Yield(Halt::new(error))
                }
            },
            DelegateState::Yielded => {
                tracing::error!("Err delegate resumed after yielding");
                panic!(
                    "an Err delegate was resumed after it yielded its error; \
                     the enclosing body must stop at the first Err"
                )
            }
            DelegateState::Completed => {
                tracing::error!("delegate resumed after completing");
                panic!("delegate resumed after it completed")
            }
        }
    }
}

/// Handle passed to a `safe_try` body. `E` is the body's error type.
pub struct Scope<E> {
    _error: PhantomData<fn() -> E>,
}

impl<E> Clone for Scope<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Scope<E> {}

impl<E> Default for Scope<E> {
    fn default() -> Self {
        Scope::new()
    }
}

impl<E> Scope<E> {
    pub fn new() -> Self {
        Scope {
            _error: PhantomData,
        }
    }

    /// Unwrap an `Ok`, or halt the body with the `Err`.
    pub fn bind<T>(&self, result: Result<T, E>) -> std::result::Result<T, Halt<E>> {
        match result.delegate().resume() {
            Step::Complete(value) => Ok(value),
            Step::Yield(halt) => Err(halt),
        }
    }

    /// [`bind`](Self::bind) for a result whose error converts into `E`; the
    /// body's error type is the union of everything bound this way.
    pub fn bind_from<T, E2>(&self, result: Result<T, E2>) -> std::result::Result<T, Halt<E>>
    where
        E: From<E2>,
    {
        self.bind(result.map_err(E::from))
    }

    /// Halt the body with `error`.
    pub fn fail<T>(&self, error: impl Into<E>) -> std::result::Result<T, Halt<E>> {
        Err(Halt::new(error.into()))
    }

    /// Finish the body with an existing result.
    pub fn ret<T>(&self, result: Result<T, E>) -> std::result::Result<T, Halt<E>> {
        self.bind(result)
    }
}

/// Run `body`, turning its first halted `Err` into the returned [`Result`].
pub fn safe_try<T, E, F>(body: F) -> Result<T, E>
where
    F: FnOnce(Scope<E>) -> std::result::Result<T, Halt<E>>,
{
    match body(Scope::new()) {
        Ok(value) => ok(value),
        Err(halt) => {
            tracing::trace!("safe_try body halted early");
            err(halt.into_error())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Cleanup<'a>(&'a Cell<u32>);

    impl Drop for Cleanup<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn ok_delegate_completes_immediately() {
        let mut delegate = ok::<i32, &str>(5).delegate();
        assert_eq!(delegate.resume(), Step::Complete(5));
    }

    #[test]
    fn err_delegate_yields_once() {
        let mut delegate = err::<i32, &str>("e").delegate();
        assert_eq!(delegate.resume(), Step::Yield(Halt::new("e")));
    }

    #[test]
    #[should_panic(expected = "resumed after it yielded")]
    fn err_delegate_resumed_twice_is_a_fault() {
        let mut delegate = err::<i32, &str>("e").delegate();
        let _ = delegate.resume();
        let _ = delegate.resume();
    }

    #[test]
    #[should_panic(expected = "resumed after it completed")]
    fn ok_delegate_resumed_twice_is_a_fault() {
        let mut delegate = ok::<i32, &str>(1).delegate();
        let _ = delegate.resume();
        let _ = delegate.resume();
    }

    #[test]
    fn stops_at_first_err() {
        let reached = Cell::new(false);
        let outcome = safe_try(|scope| {
            let _x = scope.bind(ok(1))?;
            let _y: i32 = scope.bind(err("stop"))?;
            reached.set(true);
            Ok(999)
        });
        assert_eq!(outcome, err("stop"));
        assert!(!reached.get());
    }

    #[test]
    fn returns_value_when_every_step_succeeds() {
        let outcome = safe_try::<_, String, _>(|scope| {
            let a = scope.bind(ok(2))?;
            let b = scope.bind(ok(3))?;
            Ok(a * b)
        });
        assert_eq!(outcome, ok(6));
    }

    #[test]
    fn cleanup_runs_on_early_exit() {
        let drops = Cell::new(0);
        let outcome = safe_try(|scope| {
            let _guard = Cleanup(&drops);
            let v: i32 = scope.bind(err("fail"))?;
            Ok(v)
        });
        assert_eq!(outcome, err("fail"));
        assert_eq!(drops.get(), 1);
    }

    #[derive(Debug, PartialEq)]
    enum AppError {
        Parse(String),
        Range(i64),
    }

    impl From<String> for AppError {
        fn from(msg: String) -> Self {
            AppError::Parse(msg)
        }
    }

    impl From<i64> for AppError {
        fn from(n: i64) -> Self {
            AppError::Range(n)
        }
    }

    #[test]
    fn bind_from_accumulates_error_types() {
        let parse = |raw: &str| -> Result<i64, String> {
            raw.parse::<i64>().map_err(|e| e.to_string()).into()
        };
        let check = |n: i64| -> Result<i64, i64> {
            if n < 100 {
                ok(n)
            } else {
                err(n)
            }
        };
        let run = |raw: &str| {
            safe_try(|scope: Scope<AppError>| {
                let n = scope.bind_from(parse(raw))?;
                let n = scope.bind_from(check(n))?;
                Ok(n + 1)
            })
        };
        assert_eq!(run("41"), ok(42));
        assert_eq!(run("500"), err(AppError::Range(500)));
        assert!(run("x").is_err_and(|e| matches!(e, AppError::Parse(_))));
    }

    #[test]
    fn fail_and_ret_end_the_body() {
        let outcome: Result<i32, String> = safe_try(|scope| scope.fail("nope"));
        assert_eq!(outcome, err("nope".to_string()));
        let outcome: Result<i32, &str> = safe_try(|scope| scope.ret(ok(3)));
        assert_eq!(outcome, ok(3));
    }
}
