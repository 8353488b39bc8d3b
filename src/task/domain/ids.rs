//! Identifier types for the task domain.

use super::ParseTaskIdError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential identifier of a task, starting at 1 in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Identifier allocated to the first task in a store.
    pub const FIRST: Self = Self(1);

    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskIdError`] when the value is zero.
    pub fn new(value: u64) -> Result<Self, ParseTaskIdError> {
        if value == 0 {
            return Err(ParseTaskIdError(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parses a task identifier from command argument text.
    ///
    /// Surrounding whitespace is ignored; the remainder must be ASCII
    /// decimal digits only (no sign, no radix prefix) forming an integer of
    /// at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskIdError`] when the text is empty, signed, not
    /// numeric, out of range, or zero.
    pub fn parse(text: &str) -> Result<Self, ParseTaskIdError> {
        let trimmed = text.trim();
        let invalid = || ParseTaskIdError(trimmed.to_owned());
        if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }
        let value = trimmed.parse::<u64>().map_err(|_| invalid())?;
        Self::new(value)
    }

    /// Returns the identifier allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transport-supplied identifier of a chat user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wraps a transport user identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transport address that replies to a user are delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(i64);

impl ChatId {
    /// Wraps a transport chat identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
