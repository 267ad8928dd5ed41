//! In-memory roster store.
//!
//! Holds every activity in a single map behind one process-wide lock.
//! Mutations take the write lock for the whole check-then-modify step;
//! `list` takes the read lock only long enough to clone the map.
//! State lives for the lifetime of the process.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::activity::{Activity, RosterError, RosterPolicy};
use crate::domain::foundation::{ActivityName, ParticipantEmail};
use crate::ports::{RosterSnapshot, RosterStore};

/// Roster store backed by a lock-guarded map.
///
/// Cloning shares the underlying state.
#[derive(Debug, Clone)]
pub struct InMemoryRosterStore {
    /// Activities keyed by name.
    activities: Arc<RwLock<BTreeMap<ActivityName, Activity>>>,
    /// Rules applied on signup.
    policy: RosterPolicy,
}

impl InMemoryRosterStore {
    /// Create a store seeded with `activities`.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if two activities share a name
    pub fn new(
        activities: impl IntoIterator<Item = Activity>,
        policy: RosterPolicy,
    ) -> Result<Self, RosterError> {
        let mut map = BTreeMap::new();
        for activity in activities {
            let name = activity.name().clone();
            if map.insert(name.clone(), activity).is_some() {
                return Err(RosterError::validation(
                    "activity",
                    format!("duplicate activity name: {}", name),
                ));
            }
        }

        Ok(Self {
            activities: Arc::new(RwLock::new(map)),
            policy,
        })
    }

    /// Create a store with no activities.
    pub fn empty(policy: RosterPolicy) -> Self {
        Self {
            activities: Arc::new(RwLock::new(BTreeMap::new())),
            policy,
        }
    }

    pub fn policy(&self) -> RosterPolicy {
        self.policy
    }
}

#[async_trait]
impl RosterStore for InMemoryRosterStore {
    async fn list(&self) -> Result<RosterSnapshot, RosterError> {
        Ok(self.activities.read().await.clone())
    }

    async fn exists(&self, activity: &ActivityName) -> Result<bool, RosterError> {
        Ok(self.activities.read().await.contains_key(activity))
    }

    async fn signup(
        &self,
        activity: &ActivityName,
        email: ParticipantEmail,
    ) -> Result<Activity, RosterError> {
        let mut activities = self.activities.write().await;
        let record = activities
            .get_mut(activity)
            .ok_or_else(|| RosterError::not_found(activity.clone()))?;

        record.sign_up(email, &self.policy)?;
        Ok(record.clone())
    }

    async fn unregister(
        &self,
        activity: &ActivityName,
        email: &ParticipantEmail,
    ) -> Result<Activity, RosterError> {
        let mut activities = self.activities.write().await;
        let record = activities
            .get_mut(activity)
            .ok_or_else(|| RosterError::not_found(activity.clone()))?;

        record.unregister(email)?;
        Ok(record.clone())
    }
}
