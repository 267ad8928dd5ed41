//! Roster store adapters.
//!
//! - `InMemoryRosterStore` - Process-lifetime store guarded by one lock

mod in_memory;

pub use in_memory::InMemoryRosterStore;
