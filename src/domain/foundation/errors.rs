//! Error types shared across the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } => field.as_str(),
            ValidationError::InvalidFormat { field, .. } => field.as_str(),
        }
    }
}

/// Machine-readable error codes, rendered in SCREAMING_SNAKE_CASE on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    ActivityNotFound,

    // Roster conflicts
    AlreadyRegistered,
    NotRegistered,
    ActivityFull,

    // Infrastructure errors
    InternalError,
}

impl ErrorCode {
    /// Returns the wire representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::ActivityNotFound => "ACTIVITY_NOT_FOUND",
            ErrorCode::AlreadyRegistered => "ALREADY_REGISTERED",
            ErrorCode::NotRegistered => "NOT_REGISTERED",
            ErrorCode::ActivityFull => "ACTIVITY_FULL",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("email");
        assert_eq!(format!("{}", err), "Field 'email' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("email", "contains whitespace only");
        assert_eq!(
            format!("{}", err),
            "Field 'email' has invalid format: contains whitespace only"
        );
    }

    #[test]
    fn validation_error_exposes_field() {
        assert_eq!(ValidationError::empty_field("activity").field(), "activity");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ActivityNotFound), "ACTIVITY_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::AlreadyRegistered), "ALREADY_REGISTERED");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
