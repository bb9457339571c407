//! Transport codec: dataset → `base64(gzip(json))` token, and back.
//!
//! The wire format is fixed so the web app can invert it:
//!
//! 1. `{"dataset": {"data": [...], "name": ..., "tags": [...]}}` as UTF-8 JSON
//!    (see [`json`] for the exact text form),
//! 2. a standard gzip container,
//! 3. standard base64 with padding.

pub mod json;

use crate::dataset::{Dataset, Record};
use crate::error::{BridgeError, DecodeError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::io::{Read, Write};

/// URL-safe text token carrying one encoded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedToken(String);

impl EncodedToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length of the token text in bytes (base64 is ASCII, so also chars).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EncodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    dataset: &'a Dataset,
}

/// Encoder with a fixed gzip level. `Default` uses the compressor's default level.
#[derive(Debug, Clone, Copy)]
pub struct TransportCodec {
    level: Compression,
}

impl Default for TransportCodec {
    fn default() -> Self {
        Self {
            level: Compression::default(),
        }
    }
}

impl TransportCodec {
    pub fn with_level(level: Compression) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Compression {
        self.level
    }

    /// Encode `dataset` into a token. All-or-nothing.
    pub fn encode(&self, dataset: &Dataset) -> Result<EncodedToken, BridgeError> {
        let json = json::to_wire_json(&Envelope { dataset })?;
        let compressed = gzip(&json, self.level)
            .map_err(|e| BridgeError::Serialization(format!("gzip: {e}")))?;
        let token = STANDARD.encode(&compressed);
        tracing::debug!(
            json_bytes = json.len(),
            gzip_bytes = compressed.len(),
            token_chars = token.len(),
            "encoded dataset"
        );
        Ok(EncodedToken(token))
    }
}

/// Encode with the default compression level.
pub fn encode(dataset: &Dataset) -> Result<EncodedToken, BridgeError> {
    TransportCodec::default().encode(dataset)
}

fn gzip(data: &[u8], level: Compression) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2 + 32), level);
    encoder.write_all(data)?;
    encoder.finish()
}

/// Invert [`encode`]: base64 → gunzip → JSON → envelope shape check.
///
/// Accepts a bare token; use [`token_from_url`] to pull one out of a link.
pub fn decode(token: &str) -> Result<Dataset, DecodeError> {
    let compressed = STANDARD
        .decode(token.trim())
        .map_err(|e| DecodeError::BadBase64(e.to_string()))?;

    let mut json = Vec::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_end(&mut json)
        .map_err(|e| DecodeError::BadCompression(e.to_string()))?;

    let root: Value =
        serde_json::from_slice(&json).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;
    dataset_from_envelope(root)
}

fn dataset_from_envelope(root: Value) -> Result<Dataset, DecodeError> {
    let Value::Object(mut root) = root else {
        return Err(DecodeError::MissingField("dataset"));
    };
    let Some(Value::Object(mut inner)) = root.remove("dataset") else {
        return Err(DecodeError::MissingField("dataset"));
    };

    let Some(data @ Value::Array(_)) = inner.remove("data") else {
        return Err(DecodeError::MissingField("dataset.data"));
    };
    let Some(Value::String(name)) = inner.remove("name") else {
        return Err(DecodeError::MissingField("dataset.name"));
    };
    let Some(Value::Array(raw_tags)) = inner.remove("tags") else {
        return Err(DecodeError::MissingField("dataset.tags"));
    };

    let tags = raw_tags
        .into_iter()
        .map(|t| match t {
            Value::String(s) => Ok(s),
            _ => Err(DecodeError::MissingField("dataset.tags")),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let data: Vec<Record> = serde_json::from_value(data)
        .map_err(|e| DecodeError::InvalidJson(format!("dataset.data: {e}")))?;

    Ok(Dataset::from_wire(data, name, tags))
}

/// Marker between the base URL and the token in an assembled link.
pub const TOKEN_SEPARATOR: &str = "/d#";

/// The token part of an assembled link, or the input itself when it has no `/d#`.
pub fn token_from_url(url_or_token: &str) -> &str {
    match url_or_token.rfind(TOKEN_SEPARATOR) {
        Some(i) => &url_or_token[i + TOKEN_SEPARATOR.len()..],
        None => url_or_token,
    }
}
