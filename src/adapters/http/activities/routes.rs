//! HTTP routes for activity endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_activities, signup, unregister, ActivitiesAppState};

/// Creates the activity router with all endpoints.
///
/// # Routes
/// - `GET /activities` - Catalog with rosters
/// - `POST /activities/:activity/signup?email=` - Add a participant
/// - `POST /activities/:activity/unregister?email=` - Remove a participant
pub fn activities_routes() -> Router<ActivitiesAppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:activity/signup", post(signup))
        .route("/activities/:activity/unregister", post(unregister))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::http::activities::dto::{ActivitiesResponse, ErrorResponse};
    use crate::adapters::roster::InMemoryRosterStore;
    use crate::domain::activity::{mergington_catalog, RosterPolicy};

    fn app() -> Router {
        let store =
            InMemoryRosterStore::new(mergington_catalog().unwrap(), RosterPolicy::default())
                .unwrap();
        activities_routes().with_state(ActivitiesAppState::new(Arc::new(store)))
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn get_activities_returns_catalog() {
        let response = app()
            .oneshot(Request::builder().uri("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let catalog: ActivitiesResponse = body_json(response).await;
        assert!(catalog.contains_key("Chess Club"));
    }

    #[tokio::test]
    async fn percent_encoded_activity_name_is_decoded() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/activities/Chess%20Club/signup?email=new.student%40mergington.edu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_email_returns_400_with_detail() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/activities/Chess%20Club/signup")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_FAILED");
        assert!(error.detail.contains("email"));
    }

    #[tokio::test]
    async fn get_on_signup_is_not_allowed() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/activities/Chess%20Club/signup?email=a%40b.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
