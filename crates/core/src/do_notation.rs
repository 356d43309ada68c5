//! Context-accumulating composition.
//!
//! A chain starts from [`start`] with an empty [`Ctx`]. Each [`bind`] runs
//! a fallible step against the context built so far and, on success,
//! yields a new context with one more named value. [`let_`] does the same
//! for an infallible step. Both plug into ordinary `and_then` chains.
//!
//! ```
//! use unthrown_core::do_notation::{bind, let_, start};
//! use unthrown_core::{ok, Result};
//!
//! fn parse(raw: &str) -> Result<i64, String> {
//!     raw.parse::<i64>().map_err(|e| e.to_string()).into()
//! }
//!
//! let total = start::<String>()
//!     .and_then(bind("a", |_| parse("40")))
//!     .and_then(bind("b", |_| parse("2")))
//!     .and_then(let_("sum", |ctx| {
//!         let a = *ctx.get::<i64>("a").unwrap();
//!         let b = *ctx.get::<i64>("b").unwrap();
//!         a + b
//!     }))
//!     .map(|ctx| ctx.get::<i64>("sum").copied());
//! assert_eq!(total, ok(Some(42)));
//! ```

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::result::{ok, Result};

/// Append-only bag of named values.
///
/// Extending a context returns a new one; the original is left as it was.
/// Values are shared, so cloning a context is cheap.
#[derive(Clone, Default)]
pub struct Ctx {
    values: BTreeMap<&'static str, Rc<dyn Any>>,
}

impl Ctx {
    pub fn new() -> Self {
        Ctx::default()
    }

    /// The value bound under `key`, if it exists and has type `V`.
    pub fn get<V: 'static>(&self, key: &str) -> Option<&V> {
        self.values.get(key).and_then(|value| value.downcast_ref::<V>())
    }

    /// A new context with `key` bound to `value`. An existing binding of
    /// the same key is shadowed in the new context only.
    pub fn with<V: 'static>(&self, key: &'static str, value: V) -> Ctx {
        let mut values = self.values.clone();
        values.insert(key, Rc::new(value));
        Ctx { values }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }
}

impl fmt::Debug for Ctx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values.keys()).finish()
    }
}

/// `Ok` of an empty context.
pub fn start<E>() -> Result<Ctx, E> {
    ok(Ctx::new())
}

/// A chain step binding the `Ok` of `f(ctx)` under `key`; an `Err`
/// short-circuits the chain.
pub fn bind<V, E, F>(key: &'static str, f: F) -> impl FnOnce(Ctx) -> Result<Ctx, E>
where
    V: 'static,
    F: FnOnce(&Ctx) -> Result<V, E>,
{
    move |ctx| f(&ctx).map(|value| ctx.with(key, value))
}

/// A chain step binding the plain value `f(ctx)` under `key`.
pub fn let_<V, E, F>(key: &'static str, f: F) -> impl FnOnce(Ctx) -> Result<Ctx, E>
where
    V: 'static,
    F: FnOnce(&Ctx) -> V,
{
    move |ctx| {
        let value = f(&ctx);
        ok(ctx.with(key, value))
    }
}

impl<E> Result<Ctx, E> {
    /// Method form of [`bind`].
    pub fn bind<V, F>(self, key: &'static str, f: F) -> Result<Ctx, E>
    where
        V: 'static,
        F: FnOnce(&Ctx) -> Result<V, E>,
    {
        self.and_then(bind(key, f))
    }

    /// Method form of [`let_`].
    pub fn let_<V, F>(self, key: &'static str, f: F) -> Result<Ctx, E>
    where
        V: 'static,
        F: FnOnce(&Ctx) -> V,
    {
        self.and_then(let_(key, f))
    }
}
