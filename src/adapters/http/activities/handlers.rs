//! HTTP handlers for activity endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::roster::{
    ListActivitiesHandler, ListActivitiesQuery, SignUpCommand, SignUpHandler, UnregisterCommand,
    UnregisterHandler,
};
use crate::domain::activity::RosterError;
use crate::domain::foundation::ActivityName;
use crate::ports::RosterStore;

use super::dto::{activities_response, EmailQuery, ErrorResponse, MessageResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for the activity endpoints.
#[derive(Clone)]
pub struct ActivitiesAppState {
    list_handler: Arc<ListActivitiesHandler>,
    signup_handler: Arc<SignUpHandler>,
    unregister_handler: Arc<UnregisterHandler>,
}

impl ActivitiesAppState {
    /// Wire all handlers to one store.
    pub fn new(store: Arc<dyn RosterStore>) -> Self {
        Self {
            list_handler: Arc::new(ListActivitiesHandler::new(store.clone())),
            signup_handler: Arc::new(SignUpHandler::new(store.clone())),
            unregister_handler: Arc::new(UnregisterHandler::new(store)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /activities - List every activity with its roster
pub async fn list_activities(State(state): State<ActivitiesAppState>) -> Response {
    match state.list_handler.handle(ListActivitiesQuery).await {
        Ok(snapshot) => (StatusCode::OK, Json(activities_response(snapshot))).into_response(),
        Err(e) => handle_roster_error(e),
    }
}

/// POST /activities/:activity/signup?email= - Add a participant
pub async fn signup(
    State(state): State<ActivitiesAppState>,
    Path(activity): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Response {
    let activity = match parse_activity(activity) {
        Ok(name) => name,
        Err(response) => return response,
    };

    let cmd = SignUpCommand {
        activity,
        email: query.email.unwrap_or_default(),
    };

    match state.signup_handler.handle(cmd).await {
        Ok(result) => {
            let response =
                MessageResponse::signed_up(result.email.as_str(), result.activity.name().as_str());
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_roster_error(e),
    }
}

/// POST /activities/:activity/unregister?email= - Remove a participant
pub async fn unregister(
    State(state): State<ActivitiesAppState>,
    Path(activity): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Response {
    let activity = match parse_activity(activity) {
        Ok(name) => name,
        Err(response) => return response,
    };

    let cmd = UnregisterCommand {
        activity,
        email: query.email.unwrap_or_default(),
    };

    match state.unregister_handler.handle(cmd).await {
        Ok(result) => {
            let response = MessageResponse::unregistered(
                result.email.as_str(),
                result.activity.name().as_str(),
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_roster_error(e),
    }
}

/// Validate the activity path segment of a roster mutation.
///
/// A blank activity name can never match a stored activity, so it is
/// reported as not found rather than as a validation failure. The email is
/// left to the command handlers, which check the activity first.
fn parse_activity(activity: String) -> Result<ActivityName, Response> {
    ActivityName::new(activity.clone()).map_err(|_| {
        (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found(&activity))).into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_roster_error(error: RosterError) -> Response {
    let code = error.code();
    let status = match &error {
        RosterError::ActivityNotFound(_) => StatusCode::NOT_FOUND,
        RosterError::AlreadyRegistered { .. }
        | RosterError::NotRegistered { .. }
        | RosterError::ActivityFull { .. }
        | RosterError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        RosterError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = match error {
        RosterError::ActivityNotFound(name) => ErrorResponse::not_found(name.as_str()),
        RosterError::Infrastructure(_) => ErrorResponse::internal("Internal server error"),
        other => ErrorResponse::new(code, other.to_string()),
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ParticipantEmail;

    fn chess() -> ActivityName {
        ActivityName::new("Chess Club").unwrap()
    }

    fn email() -> ParticipantEmail {
        ParticipantEmail::new("a@b.com").unwrap()
    }

    #[test]
    fn activity_not_found_maps_to_404() {
        let response = handle_roster_error(RosterError::not_found(chess()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn already_registered_maps_to_400() {
        let response = handle_roster_error(RosterError::already_registered(chess(), email()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_registered_maps_to_400() {
        let response = handle_roster_error(RosterError::not_registered(chess(), email()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn activity_full_maps_to_400() {
        let response = handle_roster_error(RosterError::full(chess(), 12));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_roster_error(RosterError::infrastructure("lock poisoned"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_failure_maps_to_400() {
        let response = handle_roster_error(RosterError::validation("email", "missing"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn blank_activity_is_not_found() {
        let response = parse_activity("  ".to_string()).unwrap_err();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn activity_name_is_kept_as_given() {
        let name = parse_activity("Chess Club".to_string()).unwrap();
        assert_eq!(name, chess());
    }
}
