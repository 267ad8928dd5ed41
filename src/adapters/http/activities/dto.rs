//! HTTP DTOs for activity endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::activity::Activity;
use crate::domain::foundation::ErrorCode;
use crate::ports::RosterSnapshot;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query string of the signup and unregister endpoints.
///
/// `email` is optional here so a missing parameter reaches the handler
/// and gets the same 400 body as a blank one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailQuery {
    #[serde(default)]
    pub email: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One activity as shown in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub spots_left: u32,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            description: activity.description().to_string(),
            schedule: activity.schedule().to_string(),
            max_participants: activity.max_participants(),
            participants: activity
                .participants()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            spots_left: activity.spots_left(),
        }
    }
}

/// Catalog keyed by activity name.
pub type ActivitiesResponse = BTreeMap<String, ActivityResponse>;

/// Convert a store snapshot into the catalog response.
pub fn activities_response(snapshot: RosterSnapshot) -> ActivitiesResponse {
    snapshot
        .into_iter()
        .map(|(name, activity)| (name.into(), activity.into()))
        .collect()
}

/// Confirmation body for roster mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity),
        }
    }

    pub fn unregistered(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Unregistered {} from {}", email, activity),
        }
    }
}

/// Standard error response.
///
/// `detail` carries the human-readable text shown to the student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, detail)
    }

    pub fn not_found(activity: &str) -> Self {
        Self::new(
            ErrorCode::ActivityNotFound,
            format!("Activity not found: {}", activity),
        )
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, detail)
    }
}
