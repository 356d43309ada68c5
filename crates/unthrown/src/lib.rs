//! unthrown: error handling with values instead of panics.
//!
//! This crate is the public face of the workspace. Everything reachable
//! from here is safe: no item panics on an `Err` or a `None`. The panicking
//! extractors are only available through [`unsafe_extract`], which callers
//! must name explicitly.
//!
//! ```
//! use unthrown::prelude::*;
//!
//! fn parse_port(raw: &str) -> Result<u16, String> {
//!     raw.parse::<u16>().map_err(|e| e.to_string()).into()
//! }
//!
//! let checked = safe_try(|s: Scope<String>| {
//!     let port = s.bind(parse_port("8443"))?;
//!     if port < 1024 {
//!         return s.fail(format!("{port} is privileged"));
//!     }
//!     s.ret(ok(port))
//! });
//! assert_eq!(checked, ok(8443));
//! ```
//!
//! Panicking extraction is not in the prelude; without importing
//! [`unsafe_extract::UnsafeExtract`] this does not compile:
//!
//! ```compile_fail
//! use unthrown::prelude::*;
//!
//! let n: u8 = ok::<u8, ()>(1).unsafe_unwrap();
//! ```
//!
//! Nor are the panic-capture helpers that the member crates share:
//!
//! ```compile_fail
//! use unthrown::thrown::catch;
//! ```
//!
//! # Features
//!
//! - `async` (default) -- [`ResultAsync`] and its constructors
//! - `interchange` (default) -- JSON wire format and the schema adapter
//! - `fp` (default, implies `async`) -- the curried surface under [`fp`]

// ── Containers ───────────────────────────────────────────────────────

pub use unthrown_core::{err, is_option, is_result, none, ok, some, NonEmpty, Option, OptionTag, Result, ResultTag};

// ── Composition ──────────────────────────────────────────────────────

pub use unthrown_core::{combine, construct, tagged};
pub use unthrown_core::{
    assert_never, create_error, create_error_group, safe_try, Ctx, Halt, Scope, TaggedError, Thrown,
};

/// Context-accumulating chains, sync and async.
pub mod do_notation {
    pub use unthrown_core::do_notation::{bind, let_, start, Ctx};

    #[cfg(feature = "async")]
    pub use unthrown_async::do_notation::{bind_async, start_async};
}

/// Panicking extraction. Reaching for these trades a typed failure for a
/// crash carrying an [`UnwrapError`] payload.
pub mod unsafe_extract {
    pub use unthrown_core::unsafe_extract::{UnsafeExtract, UnsafeExtractErr, UnwrapError};
}

// ── Async ────────────────────────────────────────────────────────────

#[cfg(feature = "async")]
pub use unthrown_async::{
    err_async, from_async_throwable, from_promise, from_safe_promise, ok_async, safe_try_async, AsyncScope,
    Callback, CallbackError, IntoResultAsync, Rejection, ResultAsync, ResultAsyncExt,
};

// ── Interop ──────────────────────────────────────────────────────────

#[cfg(feature = "interchange")]
pub use unthrown_interchange::{
    from_json, from_json_str, option_from_json, to_schema, wire, InterchangeError, Issue, Schema, ToJson,
    Validation, SCHEMA_ADAPTER_VERSION, SCHEMA_VENDOR, SCHEMA_VERSION,
};

/// Curried functions mirroring every container method.
#[cfg(feature = "fp")]
pub mod fp {
    pub use unthrown_fp::{option, result, result_async, Pipe};
}

/// The everyday imports.
pub mod prelude {
    pub use unthrown_core::{err, none, ok, safe_try, some, Option, Result, Scope};

    #[cfg(feature = "async")]
    pub use unthrown_async::{AsyncScope, ResultAsync, ResultAsyncExt};

    #[cfg(feature = "interchange")]
    pub use unthrown_interchange::ToJson;

    #[cfg(feature = "fp")]
    pub use unthrown_fp::Pipe;
}
