//! Roster-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ActivityName, ErrorCode, ParticipantEmail, ValidationError};

/// Errors produced by roster queries and mutations.
///
/// Everything except `Infrastructure` is a client-correctable condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No activity with this name exists.
    #[error("Activity not found: {0}")]
    ActivityNotFound(ActivityName),

    /// The participant is already on the roster.
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered {
        activity: ActivityName,
        email: ParticipantEmail,
    },

    /// The participant is not on the roster.
    #[error("{email} is not signed up for {activity}")]
    NotRegistered {
        activity: ActivityName,
        email: ParticipantEmail,
    },

    /// Capacity enforcement is on and the roster has no spots left.
    #[error("{activity} is full ({capacity} participants)")]
    ActivityFull { activity: ActivityName, capacity: u32 },

    /// Input failed presence checks.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Unexpected internal failure.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl RosterError {
    pub fn not_found(activity: ActivityName) -> Self {
        RosterError::ActivityNotFound(activity)
    }

    pub fn already_registered(activity: ActivityName, email: ParticipantEmail) -> Self {
        RosterError::AlreadyRegistered { activity, email }
    }

    pub fn not_registered(activity: ActivityName, email: ParticipantEmail) -> Self {
        RosterError::NotRegistered { activity, email }
    }

    pub fn full(activity: ActivityName, capacity: u32) -> Self {
        RosterError::ActivityFull { activity, capacity }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RosterError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        RosterError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RosterError::ActivityNotFound(_) => ErrorCode::ActivityNotFound,
            RosterError::AlreadyRegistered { .. } => ErrorCode::AlreadyRegistered,
            RosterError::NotRegistered { .. } => ErrorCode::NotRegistered,
            RosterError::ActivityFull { .. } => ErrorCode::ActivityFull,
            RosterError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            RosterError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// True for errors the caller can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, RosterError::Infrastructure(_))
    }
}

impl From<ValidationError> for RosterError {
    fn from(err: ValidationError) -> Self {
        RosterError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
