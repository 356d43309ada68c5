//! Captured panics.
//!
//! Rust has no exceptions; the "throwing" style of computation is a panic.
//! The adapters in [`construct`](crate::construct) and the tee helpers catch
//! the unwind and hand the payload over as a [`Thrown`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::unsafe_extract::UnwrapError;

/// The payload of a caught panic, rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Thrown {
    message: String,
}

impl Thrown {
    pub fn new(message: impl Into<String>) -> Self {
        Thrown {
            message: message.into(),
        }
    }

    /// Render a panic payload. `&str`, `String` and [`UnwrapError`]
    /// payloads keep their text; anything else becomes a placeholder.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else if let Some(e) = payload.downcast_ref::<UnwrapError>() {
            e.to_string()
        } else {
            "panic with a non-string payload".to_string()
        };
        Thrown { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Run `f`, converting an unwind into `Err(Thrown)`.
#[doc(hidden)]
pub fn catch<R>(f: impl FnOnce() -> R) -> std::result::Result<R, Thrown> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(Thrown::from_payload)
}

/// Run `f` and discard any panic it raises. `site` names the caller in the
/// debug event emitted for a discarded panic.
#[doc(hidden)]
pub fn swallow(site: &'static str, f: impl FnOnce()) {
    if let Err(thrown) = catch(f) {
        tracing::debug!(
            target: "unthrown::tee",
            site,
            panic = %thrown,
            "side effect panicked; panic discarded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catch_keeps_string_payloads() {
        let caught = catch(|| -> i32 { panic!("static text") });
        assert_eq!(caught, Err(Thrown::new("static text")));
        let caught = catch(|| -> i32 { panic!("formatted {}", 42) });
        assert_eq!(caught.unwrap_err().message(), "formatted 42");
    }

    #[test]
    fn catch_passes_values_through() {
        assert_eq!(catch(|| 7), Ok(7));
    }

    #[test]
    fn opaque_payloads_get_a_placeholder() {
        let caught = catch(|| std::panic::panic_any(17u32));
        assert_eq!(
            caught.unwrap_err().message(),
            "panic with a non-string payload"
        );
    }
}
