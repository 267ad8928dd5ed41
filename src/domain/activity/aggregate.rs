//! Activity aggregate entity.
//!
//! An activity owns its roster. All roster mutations go through
//! [`Activity::sign_up`] and [`Activity::unregister`], which are the only
//! places the participant list is modified.

use crate::domain::foundation::{ActivityName, ParticipantEmail};

use super::{RosterError, RosterPolicy};

/// Activity aggregate - an extracurricular offering and its roster.
///
/// # Invariants
///
/// - `participants` contains no duplicate emails
/// - `participants` keeps insertion order; new signups append at the end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Unique key of this activity.
    name: ActivityName,

    /// Free-text description shown to students.
    description: String,

    /// Human-readable meeting times.
    schedule: String,

    /// Roster capacity.
    max_participants: u32,

    /// Signed-up emails in signup order.
    participants: Vec<ParticipantEmail>,
}

impl Activity {
    /// Create an activity with an empty roster.
    pub fn new(
        name: ActivityName,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name,
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Seed the roster with existing participants, in order.
    ///
    /// Capacity is not checked here: seeded rosters are taken as-is.
    ///
    /// # Errors
    ///
    /// - `AlreadyRegistered` if the same email appears twice
    pub fn with_participants(
        mut self,
        participants: impl IntoIterator<Item = ParticipantEmail>,
    ) -> Result<Self, RosterError> {
        for email in participants {
            self.sign_up(email, &RosterPolicy::default())?;
        }
        Ok(self)
    }

    pub fn name(&self) -> &ActivityName {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn max_participants(&self) -> u32 {
        self.max_participants
    }

    pub fn participants(&self) -> &[ParticipantEmail] {
        &self.participants
    }

    /// Check whether an email is on the roster.
    pub fn is_registered(&self, email: &ParticipantEmail) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining capacity, zero once the roster is at or over capacity.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }

    /// Append a participant to the roster.
    ///
    /// # Errors
    ///
    /// - `AlreadyRegistered` if the email is already on the roster
    /// - `ActivityFull` if `policy` enforces capacity and no spots are left
    pub fn sign_up(
        &mut self,
        email: ParticipantEmail,
        policy: &RosterPolicy,
    ) -> Result<(), RosterError> {
        if self.is_registered(&email) {
            return Err(RosterError::already_registered(self.name.clone(), email));
        }
        if policy.enforce_capacity && self.is_full() {
            return Err(RosterError::full(self.name.clone(), self.max_participants));
        }
        self.participants.push(email);
        Ok(())
    }

    /// Remove a participant from the roster.
    ///
    /// # Errors
    ///
    /// - `NotRegistered` if the email is not on the roster
    pub fn unregister(&mut self, email: &ParticipantEmail) -> Result<(), RosterError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RosterError::not_registered(self.name.clone(), email.clone()))?;
        self.participants.remove(position);
        Ok(())
    }
}
