//! JSON encoding and decoding entry points.
//!
//! Decoding walks the `serde_json::Value` by hand so that each failure maps
//! onto a precise [`InterchangeError`]. Payloads are then handed to serde
//! for the caller's types.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use unthrown_core::{err, none, ok, some, Option, OptionTag, Result, ResultTag};

use crate::error::InterchangeError;
use crate::wire::{self, WireOption, WireResult};
use crate::SCHEMA_VERSION;

/// Encode a container in the current wire format.
pub trait ToJson {
    fn to_json(&self) -> Result<Value, InterchangeError>;
}

impl<T: Serialize, E: Serialize> ToJson for Result<T, E> {
    fn to_json(&self) -> Result<Value, InterchangeError> {
        serde_json::to_value(WireResult(self))
            .map_err(InterchangeError::payload)
            .into()
    }
}

impl<T: Serialize> ToJson for Option<T> {
    fn to_json(&self) -> Result<Value, InterchangeError> {
        serde_json::to_value(WireOption(self))
            .map_err(InterchangeError::payload)
            .into()
    }
}

/// Decode a [`Result`] document, current or legacy.
pub fn from_json<T, E>(doc: &Value) -> Result<Result<T, E>, InterchangeError>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    decode_result(doc).into()
}

/// Decode an [`Option`] document, current or legacy.
pub fn option_from_json<T>(doc: &Value) -> Result<Option<T>, InterchangeError>
where
    T: DeserializeOwned,
{
    decode_option(doc).into()
}

/// [`from_json`] over JSON text.
pub fn from_json_str<T, E>(text: &str) -> Result<Result<T, E>, InterchangeError>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    match serde_json::from_str::<Value>(text) {
        Ok(doc) => from_json(&doc),
        Err(e) => err(InterchangeError::Syntax {
            message: e.to_string(),
        }),
    }
}

// ── Decoding helpers ────────────────────────────────────────────────

fn decode_result<T, E>(doc: &Value) -> std::result::Result<Result<T, E>, InterchangeError>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    let version = schema_version(doc)?;
    let tag = required_tag(doc)?;
    match wire::result_tag(tag) {
        Some(ResultTag::Ok) => Ok(ok(payload(doc, wire::VALUE)?)),
        Some(ResultTag::Err) => {
            // Schema 0 writers put the error under "value" as well.
            let field = if version == 0 && doc.get(wire::ERROR).is_none() {
                wire::VALUE
            } else {
                wire::ERROR
            };
            Ok(err(payload(doc, field)?))
        }
        None => Err(InterchangeError::UnknownTag {
            tag: tag.to_string(),
            container: "Result",
        }),
    }
}

fn decode_option<T>(doc: &Value) -> std::result::Result<Option<T>, InterchangeError>
where
    T: DeserializeOwned,
{
    schema_version(doc)?;
    let tag = required_tag(doc)?;
    match wire::option_tag(tag) {
        Some(OptionTag::Some) => Ok(some(payload(doc, wire::VALUE)?)),
        Some(OptionTag::None) => Ok(none()),
        None => Err(InterchangeError::UnknownTag {
            tag: tag.to_string(),
            container: "Option",
        }),
    }
}

/// The document's format revision. Documents without `_schemaVersion`
/// predate versioning and count as revision 0.
fn schema_version(doc: &Value) -> std::result::Result<u64, InterchangeError> {
    let obj = doc.as_object().ok_or(InterchangeError::NotAnObject)?;
    let version = match obj.get(wire::VERSION) {
        None => {
            tracing::debug!("decoding legacy wire document without _schemaVersion");
            0
        }
        Some(v) => v.as_u64().ok_or(InterchangeError::InvalidVersion)?,
    };
    if version > SCHEMA_VERSION {
        return Err(InterchangeError::UnsupportedVersion {
            found: version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(version)
}

fn required_tag(doc: &Value) -> std::result::Result<&str, InterchangeError> {
    doc.get(wire::TAG)
        .and_then(|v| v.as_str())
        .ok_or(InterchangeError::MissingField { field: wire::TAG })
}

/// An absent payload decodes as `null`, so unit-like payloads may omit it.
fn payload<P: DeserializeOwned>(doc: &Value, field: &str) -> std::result::Result<P, InterchangeError> {
    let raw = doc.get(field).cloned().unwrap_or(Value::Null);
    serde_json::from_value(raw).map_err(InterchangeError::payload)
}
