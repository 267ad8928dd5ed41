//! Roster command and query handlers.

mod list_activities;
mod participant;
mod sign_up;
mod unregister;

pub use list_activities::{ListActivitiesHandler, ListActivitiesQuery};
pub use sign_up::{SignUpCommand, SignUpHandler, SignUpResult};
pub use unregister::{UnregisterCommand, UnregisterHandler, UnregisterResult};
