//! UnregisterHandler - Command handler for removing a participant from a roster.

use std::sync::Arc;

use crate::domain::activity::{Activity, RosterError};
use crate::domain::foundation::{ActivityName, ParticipantEmail};
use crate::ports::RosterStore;

use super::participant::resolve_email;

/// Command to remove a participant from an activity.
#[derive(Debug, Clone)]
pub struct UnregisterCommand {
    pub activity: ActivityName,
    /// Raw email from the request; validated by the handler.
    pub email: String,
}

/// Result of a successful removal.
#[derive(Debug, Clone)]
pub struct UnregisterResult {
    /// The activity after the removal was applied.
    pub activity: Activity,
    pub email: ParticipantEmail,
}

/// Handler for unregistering participants.
pub struct UnregisterHandler {
    store: Arc<dyn RosterStore>,
}

impl UnregisterHandler {
    pub fn new(store: Arc<dyn RosterStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UnregisterCommand) -> Result<UnregisterResult, RosterError> {
        let outcome = match resolve_email(self.store.as_ref(), &cmd.activity, cmd.email).await {
            Ok(email) => self
                .store
                .unregister(&cmd.activity, &email)
                .await
                .map(|activity| (activity, email)),
            Err(e) => Err(e),
        };

        match outcome {
            Ok((activity, email)) => {
                tracing::info!(
                    activity = %cmd.activity,
                    email = %email,
                    spots_left = activity.spots_left(),
                    "Participant unregistered"
                );
                Ok(UnregisterResult { activity, email })
            }
            Err(e) if e.is_client_error() => {
                tracing::debug!(activity = %cmd.activity, "Unregister rejected: {}", e);
                Err(e)
            }
            Err(e) => {
                tracing::error!(activity = %cmd.activity, "Unregister failed: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::roster::InMemoryRosterStore;
    use crate::domain::activity::{mergington_catalog, RosterPolicy};

    fn seeded_store() -> Arc<InMemoryRosterStore> {
        Arc::new(
            InMemoryRosterStore::new(mergington_catalog().unwrap(), RosterPolicy::default())
                .unwrap(),
        )
    }

    fn command(activity: &str, email: &str) -> UnregisterCommand {
        UnregisterCommand {
            activity: ActivityName::new(activity).unwrap(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn removes_existing_participant() {
        let handler = UnregisterHandler::new(seeded_store());

        let result = handler
            .handle(command("Chess Club", "michael@mergington.edu"))
            .await
            .unwrap();

        assert!(!result.activity.is_registered(&result.email));
        assert_eq!(
            result.activity.participants(),
            &[ParticipantEmail::new("daniel@mergington.edu").unwrap()]
        );
    }

    #[tokio::test]
    async fn fails_when_not_registered() {
        let handler = UnregisterHandler::new(seeded_store());
        let result = handler
            .handle(command("Chess Club", "not.registered@mergington.edu"))
            .await;
        assert!(matches!(result, Err(RosterError::NotRegistered { .. })));
    }

    #[tokio::test]
    async fn fails_when_activity_not_found() {
        let handler = UnregisterHandler::new(seeded_store());
        let result = handler.handle(command("NoSuchActivity", "a@b.com")).await;
        assert!(matches!(result, Err(RosterError::ActivityNotFound(_))));
    }

    #[tokio::test]
    async fn second_unregister_fails() {
        let handler = UnregisterHandler::new(seeded_store());
        handler
            .handle(command("Chess Club", "daniel@mergington.edu"))
            .await
            .unwrap();

        let result = handler
            .handle(command("Chess Club", "daniel@mergington.edu"))
            .await;
        assert!(matches!(result, Err(RosterError::NotRegistered { .. })));
    }

    #[tokio::test]
    async fn empty_email_on_unknown_activity_is_not_found() {
        let handler = UnregisterHandler::new(seeded_store());
        let result = handler.handle(command("NoSuchActivity", "")).await;
        assert!(matches!(result, Err(RosterError::ActivityNotFound(_))));
    }

    #[tokio::test]
    async fn empty_email_on_known_activity_is_a_validation_error() {
        let handler = UnregisterHandler::new(seeded_store());
        let result = handler.handle(command("Chess Club", "")).await;
        assert!(matches!(result, Err(RosterError::ValidationFailed { .. })));
    }
}
