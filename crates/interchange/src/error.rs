/// Errors while decoding a wire document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterchangeError {
    /// The input text is not JSON.
    #[error("invalid JSON: {message}")]
    Syntax { message: String },
    /// The document is not a JSON object.
    #[error("wire document must be a JSON object")]
    NotAnObject,
    /// A required field is absent.
    #[error("wire document missing required field: '{field}'")]
    MissingField { field: &'static str },
    /// `_tag` names no variant of the expected container.
    #[error("unknown tag '{tag}' for {container}")]
    UnknownTag {
        tag: String,
        container: &'static str,
    },
    /// `_schemaVersion` is present but not a non-negative integer.
    #[error("'_schemaVersion' must be a non-negative integer")]
    InvalidVersion,
    /// The document was written by a newer format revision.
    #[error("schema version {found} is newer than the supported version {supported}")]
    UnsupportedVersion { found: u64, supported: u64 },
    /// The payload does not fit the requested type, or cannot be encoded.
    #[error("payload error: {message}")]
    Payload { message: String },
}

impl InterchangeError {
    pub(crate) fn payload(error: serde_json::Error) -> Self {
        InterchangeError::Payload {
            message: error.to_string(),
        }
    }
}
