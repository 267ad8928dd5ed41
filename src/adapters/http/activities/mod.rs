//! HTTP adapter for activity endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    activities_response, ActivitiesResponse, ActivityResponse, EmailQuery, ErrorResponse,
    MessageResponse,
};
pub use handlers::ActivitiesAppState;
pub use routes::activities_routes;
