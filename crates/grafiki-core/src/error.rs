//! Error types shared by the builder, codec and link assembly.

use thiserror::Error;

/// Errors surfaced by the encode side of the bridge.
///
/// Every operation is deterministic, so none of these are worth retrying
/// without changing the input.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A cell value could not be made JSON-representable.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The tabular input is structurally unusable (ragged rows, duplicate columns, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// `base_url` (or another config value) is empty or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> Self {
        BridgeError::Serialization(e.to_string())
    }
}

/// Failure kinds of the token decode path. Any reimplementation of the
/// receiving side reports the same four kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("bad base64: {0}")]
    BadBase64(String),

    #[error("bad gzip stream: {0}")]
    BadCompression(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// Required envelope field absent or of the wrong type.
    #[error("missing or malformed field `{0}`")]
    MissingField(&'static str),
}

impl DecodeError {
    /// Short stable name of the failure kind, for logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::BadBase64(_) => "bad_base64",
            DecodeError::BadCompression(_) => "bad_compression",
            DecodeError::InvalidJson(_) => "invalid_json",
            DecodeError::MissingField(_) => "missing_field",
        }
    }
}
