//! unthrown-interchange: wire format and schema adapter.
//!
//! Encodes `Result` and `Option` as tagged JSON objects:
//!
//! ```text
//! {"_tag": "Ok" | "Err", "_schemaVersion": 1, "value" | "error": <payload>}
//! {"_tag": "Some" | "None", "_schemaVersion": 1, "value"?: <payload>}
//! ```
//!
//! Documents written before the format was versioned carry no
//! `_schemaVersion`; they still decode. Documents from a newer revision
//! are rejected. The JSON Schema for the current revision ships as
//! `schema/wire-schema.json` at the repository root.

/// Current revision of the wire format, written as `_schemaVersion`.
pub const SCHEMA_VERSION: u64 = 1;
/// Vendor name reported by schema adapters.
pub const SCHEMA_VENDOR: &str = "unthrown";
/// Version of the validation-schema adapter shape.
pub const SCHEMA_ADAPTER_VERSION: u64 = 1;

pub mod error;
pub mod json;
pub mod schema;
pub mod wire;

pub use error::InterchangeError;
pub use json::{from_json, from_json_str, option_from_json, ToJson};
pub use schema::{to_schema, Issue, Schema, Validation};
pub use wire::{WireOption, WireResult};
