//! Serde encoding of the containers.
//!
//! The containers live in `unthrown-core`, which does not know about the
//! wire format, so the encoding is exposed two ways: borrowed wrappers
//! ([`WireResult`], [`WireOption`]) that implement `Serialize`, and
//! `#[serde(with = "...")]` modules for fields of caller-defined structs:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use unthrown_core::{ok, Result};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Job {
//!     id: u32,
//!     #[serde(with = "unthrown_interchange::wire::result")]
//!     outcome: Result<u32, String>,
//! }
//!
//! let job = Job { id: 1, outcome: ok(7) };
//! let text = serde_json::to_string(&job).unwrap();
//! assert_eq!(text, r#"{"id":1,"outcome":{"_tag":"Ok","_schemaVersion":1,"value":7}}"#);
//! let back: Job = serde_json::from_str(&text).unwrap();
//! assert_eq!(back.outcome, ok(7));
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use unthrown_core::{Option, OptionTag, Result, ResultTag};

use crate::SCHEMA_VERSION;

pub(crate) const TAG: &str = "_tag";
pub(crate) const VERSION: &str = "_schemaVersion";
pub(crate) const VALUE: &str = "value";
pub(crate) const ERROR: &str = "error";

/// Serializes a borrowed [`Result`] in the current wire format.
#[derive(Debug)]
pub struct WireResult<'a, T, E>(pub &'a Result<T, E>);

/// Serializes a borrowed [`Option`] in the current wire format.
#[derive(Debug)]
pub struct WireOption<'a, T>(pub &'a Option<T>);

impl<T: Serialize, E: Serialize> Serialize for WireResult<'_, T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(TAG, self.0.tag().as_str())?;
        map.serialize_entry(VERSION, &SCHEMA_VERSION)?;
        match self.0.as_ref().into_std() {
            Ok(value) => map.serialize_entry(VALUE, value)?,
            Err(error) => map.serialize_entry(ERROR, error)?,
        }
        map.end()
    }
}

impl<T: Serialize> Serialize for WireOption<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let value = self.0.as_ref().into_std();
        let len = if value.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(TAG, self.0.tag().as_str())?;
        map.serialize_entry(VERSION, &SCHEMA_VERSION)?;
        if let Some(value) = value {
            map.serialize_entry(VALUE, value)?;
        }
        map.end()
    }
}

pub(crate) fn result_tag(tag: &str) -> std::option::Option<ResultTag> {
    match tag {
        "Ok" => Some(ResultTag::Ok),
        "Err" => Some(ResultTag::Err),
        _ => None,
    }
}

pub(crate) fn option_tag(tag: &str) -> std::option::Option<OptionTag> {
    match tag {
        "Some" => Some(OptionTag::Some),
        "None" => Some(OptionTag::None),
        _ => None,
    }
}

/// `#[serde(with = "unthrown_interchange::wire::result")]`
pub mod result {
    use serde::de::{DeserializeOwned, Error as _};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;
    use unthrown_core::Result;

    use super::WireResult;

    pub fn serialize<T, E, S>(value: &Result<T, E>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        T: Serialize,
        E: Serialize,
        S: Serializer,
    {
        WireResult(value).serialize(serializer)
    }

    pub fn deserialize<'de, T, E, D>(deserializer: D) -> std::result::Result<Result<T, E>, D::Error>
    where
        T: DeserializeOwned,
        E: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let doc = Value::deserialize(deserializer)?;
        crate::json::from_json(&doc).into_std().map_err(D::Error::custom)
    }
}

/// `#[serde(with = "unthrown_interchange::wire::option")]`
pub mod option {
    use serde::de::{DeserializeOwned, Error as _};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;
    use unthrown_core::Option;

    use super::WireOption;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        WireOption(value).serialize(serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let doc = Value::deserialize(deserializer)?;
        crate::json::option_from_json(&doc)
            .into_std()
            .map_err(D::Error::custom)
    }
}
