//! String-backed value objects identifying activities and participants.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Unique, human-readable key of an activity (e.g. "Chess Club").
///
/// Matched exactly: no trimming or case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActivityName(String);

impl ActivityName {
    /// Creates a new ActivityName, returning error if blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("activity"));
        }
        Ok(Self(name))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ActivityName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActivityName> for String {
    fn from(name: ActivityName) -> Self {
        name.0
    }
}

/// Email address identifying a participant within one roster.
///
/// Only presence is checked: any non-empty string is accepted, whitespace
/// included. The address is taken as given and compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParticipantEmail(String);

impl ParticipantEmail {
    /// Creates a new ParticipantEmail, returning error if empty.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        Ok(Self(email))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ParticipantEmail {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ParticipantEmail> for String {
    fn from(email: ParticipantEmail) -> Self {
        email.0
    }
}
