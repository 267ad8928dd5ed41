//! Roster store port.
//!
//! Defines the contract for the canonical activity → roster mapping.
//! Implementations own all activity records and are the only place the
//! roster invariants are enforced.
//!
//! # Design
//!
//! - **Snapshots out**: `list` returns owned copies, never live references
//! - **Atomic mutations**: the membership check and the append/remove of
//!   `signup`/`unregister` must not interleave with another mutation of the
//!   same activity

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::activity::{Activity, RosterError};
use crate::domain::foundation::{ActivityName, ParticipantEmail};

/// Point-in-time copy of every activity, keyed by name.
pub type RosterSnapshot = BTreeMap<ActivityName, Activity>;

/// Port for reading and mutating activity rosters.
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Consistent snapshot of all activities.
    async fn list(&self) -> Result<RosterSnapshot, RosterError>;

    /// Whether an activity with this name is in the store.
    async fn exists(&self, activity: &ActivityName) -> Result<bool, RosterError>;

    /// Add `email` to the end of the activity's roster.
    ///
    /// # Errors
    ///
    /// - `ActivityNotFound` if the activity doesn't exist
    /// - `AlreadyRegistered` if the email is already on the roster
    /// - `ActivityFull` if the store enforces capacity and the roster is full
    async fn signup(
        &self,
        activity: &ActivityName,
        email: ParticipantEmail,
    ) -> Result<Activity, RosterError>;

    /// Remove `email` from the activity's roster.
    ///
    /// # Errors
    ///
    /// - `ActivityNotFound` if the activity doesn't exist
    /// - `NotRegistered` if the email is not on the roster
    async fn unregister(
        &self,
        activity: &ActivityName,
        email: &ParticipantEmail,
    ) -> Result<Activity, RosterError>;
}
