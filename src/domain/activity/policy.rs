//! Rules applied to roster mutations beyond the core invariants.

/// Opt-in signup rules.
///
/// `max_participants` is always tracked on an activity, but rejecting
/// signups once a roster is full only happens when `enforce_capacity` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterPolicy {
    pub enforce_capacity: bool,
}

impl RosterPolicy {
    /// Policy that rejects signups on full rosters.
    pub fn enforcing_capacity() -> Self {
        Self {
            enforce_capacity: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_not_enforced_by_default() {
        assert!(!RosterPolicy::default().enforce_capacity);
        assert!(RosterPolicy::enforcing_capacity().enforce_capacity);
    }
}
