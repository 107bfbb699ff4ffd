//! Value objects
//!
//! Immutable domain primitives compared by value.
//! Validation runs at construction, so an invalid instance cannot exist.

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

/// Display name: 1-16 characters after trimming surrounding whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayName(String);

impl DisplayName {
    /// Maximum display name length in characters
    pub const MAX_LEN: usize = 16;

    /// Validate and create a display name.
    ///
    /// Surrounding whitespace is trimmed; the length is counted in characters,
    /// not bytes. Names are case-sensitive.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValueObjectError> {
        let trimmed = value.as_ref().trim();
        let len = trimmed.chars().count();
        if len == 0 {
            return Err(ValueObjectError::EmptyDisplayName);
        }
        if len > Self::MAX_LEN {
            return Err(ValueObjectError::DisplayNameTooLong {
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Message text: 1-1024 characters after trimming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    /// Maximum message text length in characters
    pub const MAX_LEN: usize = 1024;

    /// Validate and create message text. The stored text is the trimmed text.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValueObjectError> {
        let trimmed = value.as_ref().trim();
        let len = trimmed.chars().count();
        if len == 0 {
            return Err(ValueObjectError::EmptyMessageText);
        }
        if len > Self::MAX_LEN {
            return Err(ValueObjectError::MessageTextTooLong {
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Opaque message identifier
///
/// Server-generated ids have the form `<created_at_millis>-<sequence>`.
/// Ids received from clients are kept verbatim and only used for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build the id for the `sequence`-th message created at `created_at`.
    pub fn generate(created_at: Timestamp, sequence: u64) -> Self {
        Self(format!("{}-{}", created_at.value(), sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle of one transport connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Generate a fresh random connection id (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unix timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
