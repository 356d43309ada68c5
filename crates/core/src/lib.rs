//! unthrown-core: branded `Result` and `Option` containers.
//!
//! Success and failure are values, absence and presence are values, and
//! every transformation on them is total. Nothing in this crate panics on
//! the safe surface; the panicking extractors live in [`unsafe_extract`].
//!
//! # Public API
//!
//! Key items are re-exported at the crate root:
//!
//! - [`ok`], [`err`], [`Result`] -- the success/failure container
//! - [`some`], [`none`], [`Option`] -- the presence/absence container
//! - [`is_result`], [`is_option`] -- membership predicates for erased values
//! - [`safe_try`], [`Scope`] -- early return from a block of fallible steps
//! - [`combine`] -- batch combinators (`all`, `all_settled`, `any`, ...)
//! - [`construct`] -- adapters from panicking, nullable and predicate styles
//! - [`do_notation`] -- context-accumulating chains
//! - [`tagged`] -- tagged error records and groups
//!
//! ```
//! use unthrown_core::{err, ok, Result};
//!
//! fn half(n: i32) -> Result<i32, String> {
//!     if n % 2 == 0 { ok(n / 2) } else { err(format!("{n} is odd")) }
//! }
//!
//! assert_eq!(ok(8).and_then(half).and_then(half), ok(2));
//! assert_eq!(ok(6).and_then(half).and_then(half), err("3 is odd".to_string()));
//! ```

pub mod brand;
pub mod combine;
pub mod construct;
pub mod do_notation;
pub mod non_empty;
pub mod option;
pub mod result;
pub mod safe_try;
pub mod tagged;
pub mod thrown;
pub mod unsafe_extract;

// ── Convenience re-exports: containers ───────────────────────────────

pub use brand::{is_option, is_result, Brand, BrandKind, Branded};
pub use non_empty::NonEmpty;
pub use option::{none, some, Option, OptionTag};
pub use result::{err, ok, Result, ResultTag};

// ── Convenience re-exports: composition ──────────────────────────────

pub use combine::{AnyTuple, ResultTuple};
pub use do_notation::Ctx;
pub use safe_try::{safe_try, Delegate, Halt, Scope, Step};
pub use tagged::{assert_never, create_error, create_error_group, TaggedError};
pub use thrown::Thrown;
