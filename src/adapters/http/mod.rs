//! HTTP adapters - REST API implementations.
//!
//! - `activities` - Catalog, signup, and unregister endpoints
//! - `router` - Application router with static files and tower-http layers

pub mod activities;
pub mod router;

pub use activities::{activities_routes, ActivitiesAppState};
pub use router::app_router;
