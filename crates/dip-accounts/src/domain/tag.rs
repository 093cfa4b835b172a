//! # Tags
//!
//! Short UTF-8 labels naming trees and nodes. A tag is used raw as a
//! derivation seed and stored in account records as a zero-padded
//! 32-byte field.

use super::constants::MAX_TAG_LENGTH;
use super::errors::{AccountError, FormatError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated tag: at most `MAX_TAG_LENGTH` bytes, no NUL characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(tag: impl Into<String>) -> Result<Self, AccountError> {
        let tag = tag.into();
        if tag.len() > MAX_TAG_LENGTH {
            return Err(AccountError::InvalidTag(format!(
                "{} bytes, max is {}",
                tag.len(),
                MAX_TAG_LENGTH
            )));
        }
        if tag.contains('\0') {
            return Err(AccountError::InvalidTag("contains NUL".to_string()));
        }
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw seed bytes, unpadded.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Zero-padded on-account representation.
    pub fn to_field(&self) -> [u8; MAX_TAG_LENGTH] {
        let mut field = [0u8; MAX_TAG_LENGTH];
        field[..self.0.len()].copy_from_slice(self.0.as_bytes());
        field
    }

    /// Parse the on-account representation. Everything after the first
    /// zero byte must also be zero.
    pub fn from_field(field: &[u8; MAX_TAG_LENGTH]) -> Result<Self, FormatError> {
        let len = field.iter().position(|b| *b == 0).unwrap_or(MAX_TAG_LENGTH);
        if field[len..].iter().any(|b| *b != 0) {
            return Err(FormatError::MalformedTag(
                "non-zero bytes after terminator".to_string(),
            ));
        }
        let text = std::str::from_utf8(&field[..len])
            .map_err(|e| FormatError::MalformedTag(e.to_string()))?;
        Ok(Self(text.to_string()))
    }
}

impl TryFrom<String> for Tag {
    type Error = AccountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
