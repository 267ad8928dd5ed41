//! SignUpHandler - Command handler for adding a participant to a roster.

use std::sync::Arc;

use crate::domain::activity::{Activity, RosterError};
use crate::domain::foundation::{ActivityName, ParticipantEmail};
use crate::ports::RosterStore;

use super::participant::resolve_email;

/// Command to sign a participant up for an activity.
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub activity: ActivityName,
    /// Raw email from the request; validated by the handler.
    pub email: String,
}

/// Result of a successful signup.
#[derive(Debug, Clone)]
pub struct SignUpResult {
    /// The activity after the signup was applied.
    pub activity: Activity,
    pub email: ParticipantEmail,
}

/// Handler for signing participants up.
pub struct SignUpHandler {
    store: Arc<dyn RosterStore>,
}

impl SignUpHandler {
    pub fn new(store: Arc<dyn RosterStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SignUpCommand) -> Result<SignUpResult, RosterError> {
        let outcome = match resolve_email(self.store.as_ref(), &cmd.activity, cmd.email).await {
            Ok(email) => self
                .store
                .signup(&cmd.activity, email.clone())
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
                    "Participant signed up"
                );
                Ok(SignUpResult { activity, email })
            }
            Err(e) if e.is_client_error() => {
                tracing::debug!(activity = %cmd.activity, "Signup rejected: {}", e);
                Err(e)
            }
            Err(e) => {
                tracing::error!(activity = %cmd.activity, "Signup failed: {}", e);
                Err(e)
            }
        }
    }
}
