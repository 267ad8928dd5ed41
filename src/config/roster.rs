//! Roster rules configuration

use serde::Deserialize;

use crate::domain::activity::RosterPolicy;

/// Switches for opt-in roster rules
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RosterConfig {
    /// Reject signups once an activity reaches `max_participants`
    #[serde(default)]
    pub enforce_capacity: bool,
}

impl RosterConfig {
    /// Domain policy built from these settings
    pub fn policy(&self) -> RosterPolicy {
        RosterPolicy {
            enforce_capacity: self.enforce_capacity,
        }
    }
}
