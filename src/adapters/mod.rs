//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST endpoints
//! - `roster` - Roster store implementations

pub mod http;
pub mod roster;

pub use roster::InMemoryRosterStore;
