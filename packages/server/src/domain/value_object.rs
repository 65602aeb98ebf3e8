//! Value Objects for domain models.
//!
//! Value Objects are immutable and compared by value, not by identity.

use std::fmt;

use hiroba_shared::time::now_millis;

/// Client identifier value object.
///
/// Identifiers come from a process-wide counter and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(u64);

impl ClientId {
    /// Wrap a raw identifier.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of a client, derived from its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientName(String);

impl ClientName {
    /// Build the name for an identifier: `user<id>`.
    pub fn for_id(id: ClientId) -> Self {
        Self(format!("user{}", id.value()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ClientId> for ClientName {
    fn from(id: ClientId) -> Self {
        Self::for_id(id)
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text delivered to recipients of a broadcast: `<name> said: <body>`.
///
/// The body is taken verbatim; it is not trimmed or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine(String);

impl ChatLine {
    pub fn new(sender: &ClientName, body: &str) -> Self {
        Self(format!("{sender} said: {body}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ChatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn new(millis: i64) -> Self {
        Self(millis)
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        Self(now_millis())
    }

    pub const fn value(&self) -> i64 {
        self.0
    }
}
