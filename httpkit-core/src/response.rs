use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use serde::de::DeserializeOwned;

/// Minimal response DTO: status code plus the fully drained body bytes.
///
/// Immutable once constructed. No content-type inference is performed; the
/// caller decides how to interpret the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResponse {
    status: u16,
    body: Vec<u8>,
}

impl SimpleResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Body decoded as UTF-8, invalid sequences replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Body decoded with the charset named by `label` (e.g. `"iso-8859-1"`).
    /// Unknown labels fall back to UTF-8.
    pub fn text_with_charset(&self, label: &str) -> Cow<'_, str> {
        let encoding = Encoding::for_label(label.as_bytes()).unwrap_or(UTF_8);
        let (text, _, _) = encoding.decode(&self.body);
        text
    }

    /// Body decoded as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> crate::Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
