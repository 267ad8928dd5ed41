//! Email resolution shared by the roster command handlers.

use crate::domain::activity::RosterError;
use crate::domain::foundation::{ActivityName, ParticipantEmail};
use crate::ports::RosterStore;

/// Turn the raw `email` of a command into a [`ParticipantEmail`].
///
/// An unknown activity wins over an invalid email: the store is asked
/// whether the activity exists before the validation error is returned.
pub(super) async fn resolve_email(
    store: &dyn RosterStore,
    activity: &ActivityName,
    email: String,
) -> Result<ParticipantEmail, RosterError> {
    match ParticipantEmail::new(email) {
        Ok(email) => Ok(email),
        Err(invalid) => {
            if store.exists(activity).await? {
                Err(invalid.into())
            } else {
                Err(RosterError::not_found(activity.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::roster::InMemoryRosterStore;
    use crate::domain::activity::{mergington_catalog, RosterPolicy};

    fn seeded_store() -> InMemoryRosterStore {
        InMemoryRosterStore::new(mergington_catalog().unwrap(), RosterPolicy::default()).unwrap()
    }

    fn name(s: &str) -> ActivityName {
        ActivityName::new(s).unwrap()
    }

    #[tokio::test]
    async fn valid_email_does_not_need_the_store() {
        let store = InMemoryRosterStore::empty(RosterPolicy::default());
        let email = resolve_email(&store, &name("Chess Club"), "a@b.com".to_string())
            .await
            .unwrap();
        assert_eq!(email.as_str(), "a@b.com");
    }

    #[tokio::test]
    async fn empty_email_on_known_activity_is_a_validation_error() {
        let result = resolve_email(&seeded_store(), &name("Chess Club"), String::new()).await;
        assert!(matches!(
            result,
            Err(RosterError::ValidationFailed { ref field, .. }) if field == "email"
        ));
    }

    #[tokio::test]
    async fn empty_email_on_unknown_activity_is_not_found() {
        let result = resolve_email(&seeded_store(), &name("NoSuchActivity"), String::new()).await;
        assert_eq!(result, Err(RosterError::not_found(name("NoSuchActivity"))));
    }
}
