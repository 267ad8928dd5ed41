//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod roster;

pub use roster::{
    ListActivitiesHandler, ListActivitiesQuery, SignUpCommand, SignUpHandler, SignUpResult,
    UnregisterCommand, UnregisterHandler, UnregisterResult,
};
