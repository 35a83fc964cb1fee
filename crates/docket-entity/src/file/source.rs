//! Classification of a file's content reference.
//!
//! Clients send either the document bytes inline (a `data:` URL or raw
//! base64) or a pointer into external storage (`ipfs://`, `s3://`,
//! `https://`, ...). Both arrive in the same `dataSource` field; this module
//! decides which one it is and, for inline payloads, checks that the payload
//! decodes and records its size.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a file's content lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The content bytes were sent with the upload.
    Inline,
    /// The content reference points at external storage.
    External,
}

impl SourceKind {
    /// Return the kind as a string for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::External => "external",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a content reference was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Nothing was supplied.
    #[error("content reference is empty")]
    Empty,
    /// A `data:` URL that is not base64-encoded or has no payload separator.
    #[error("data URL must have the form data:<type>;base64,<payload>")]
    UnsupportedDataUrl,
    /// The inline payload is not valid base64.
    #[error("inline content is not valid base64: {0}")]
    InvalidBase64(String),
}

/// A classified content reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSource {
    /// Inline bytes or external pointer.
    pub kind: SourceKind,
    /// Decoded size of inline content; unknown for external pointers.
    pub size_bytes: Option<i64>,
}

impl ContentSource {
    /// Classify a raw `dataSource` value.
    pub fn classify(data_source: &str) -> Result<Self, SourceError> {
        let value = data_source.trim();
        if value.is_empty() {
            return Err(SourceError::Empty);
        }

        if let Some(rest) = value.strip_prefix("data:") {
            let (media, payload) = rest
                .split_once(',')
                .ok_or(SourceError::UnsupportedDataUrl)?;
            if !media.ends_with(";base64") {
                return Err(SourceError::UnsupportedDataUrl);
            }
            return Self::inline(payload);
        }

        if is_external_pointer(value) {
            return Ok(Self {
                kind: SourceKind::External,
                size_bytes: None,
            });
        }

        Self::inline(value)
    }

    fn inline(payload: &str) -> Result<Self, SourceError> {
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| SourceError::InvalidBase64(e.to_string()))?;
        Ok(Self {
            kind: SourceKind::Inline,
            size_bytes: Some(bytes.len() as i64),
        })
    }
}

/// `scheme://rest` with an RFC 3986 scheme. The base64 alphabet has no `:`,
/// so inline payloads can never match.
fn is_external_pointer(value: &str) -> bool {
    let Some((scheme, rest)) = value.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_alpha
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !rest.is_empty()
}
