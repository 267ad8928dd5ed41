//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RosterStore` - Canonical activity → roster mapping

mod roster_store;

pub use roster_store::{RosterSnapshot, RosterStore};
