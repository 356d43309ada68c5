//! Validation-schema adapter.
//!
//! [`to_schema`] turns any `input -> Result<T, E>` validator into the shape
//! that validation libraries consume: a fixed `version`, a `vendor` name and
//! a `validate` that returns either the parsed value or a list of issues.
//!
//! ```
//! use unthrown_core::{err, ok, Result};
//! use unthrown_interchange::schema::{to_schema, Validation};
//!
//! let port = to_schema(|raw: &str| -> Result<u16, String> {
//!     raw.parse::<u16>().map_err(|e| e.to_string()).into()
//! });
//! assert_eq!(port.vendor(), "unthrown");
//! assert_eq!(port.validate("443"), Validation::Success { value: 443 });
//! assert!(!port.validate("https").is_success());
//! ```

use std::fmt;

use serde::Serialize;
use unthrown_core::Result;

use crate::{SCHEMA_ADAPTER_VERSION, SCHEMA_VENDOR};

/// A validator wrapped for schema consumers.
#[derive(Clone, Copy)]
pub struct Schema<F> {
    validate: F,
}

/// Static description of a [`Schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaProps {
    pub version: u64,
    pub vendor: &'static str,
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub message: String,
}

/// Outcome of [`Schema::validate`]; serializes as `{"value": ..}` or
/// `{"issues": [{"message": ..}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Validation<T> {
    Success { value: T },
    Failure { issues: Vec<Issue> },
}

impl<T> Validation<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success { .. })
    }

    pub fn issues(&self) -> &[Issue] {
        match self {
            Validation::Success { .. } => &[],
            Validation::Failure { issues } => issues,
        }
    }
}

pub fn to_schema<F>(validate: F) -> Schema<F> {
    Schema { validate }
}

impl<F> Schema<F> {
    pub fn version(&self) -> u64 {
        SCHEMA_ADAPTER_VERSION
    }

    pub fn vendor(&self) -> &'static str {
        SCHEMA_VENDOR
    }

    pub fn props(&self) -> SchemaProps {
        SchemaProps {
            version: self.version(),
            vendor: self.vendor(),
        }
    }

    /// Run the wrapped validator. The error's `Display` text becomes the
    /// single issue message.
    pub fn validate<I, T, E>(&self, input: I) -> Validation<T>
    where
        F: Fn(I) -> Result<T, E>,
        E: fmt::Display,
    {
        (self.validate)(input).match_with(
            |value| Validation::Success { value },
            |error| Validation::Failure {
                issues: vec![Issue {
                    message: error.to_string(),
                }],
            },
        )
    }
}

impl<F> fmt::Debug for Schema<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("version", &self.version())
            .field("vendor", &self.vendor())
            .finish_non_exhaustive()
    }
}
