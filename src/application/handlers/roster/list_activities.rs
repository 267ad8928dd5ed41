//! ListActivitiesHandler - Query handler for the full activity catalog.

use std::sync::Arc;

use crate::domain::activity::RosterError;
use crate::ports::{RosterSnapshot, RosterStore};

/// Query for every activity and its roster.
#[derive(Debug, Clone, Default)]
pub struct ListActivitiesQuery;

/// Handler for listing activities.
pub struct ListActivitiesHandler {
    store: Arc<dyn RosterStore>,
}

impl ListActivitiesHandler {
    pub fn new(store: Arc<dyn RosterStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: ListActivitiesQuery) -> Result<RosterSnapshot, RosterError> {
        let snapshot = self.store.list().await?;
        tracing::debug!(activities = snapshot.len(), "Listed activities");
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::roster::InMemoryRosterStore;
    use crate::domain::activity::{mergington_catalog, RosterPolicy};
    use crate::domain::foundation::ActivityName;

    #[tokio::test]
    async fn lists_seeded_catalog() {
        let store =
            InMemoryRosterStore::new(mergington_catalog().unwrap(), RosterPolicy::default())
                .unwrap();
        let handler = ListActivitiesHandler::new(Arc::new(store));

        let snapshot = handler.handle(ListActivitiesQuery).await.unwrap();

        let chess = &snapshot[&ActivityName::new("Chess Club").unwrap()];
        assert!(!chess.participants().is_empty());
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler =
            ListActivitiesHandler::new(Arc::new(InMemoryRosterStore::empty(RosterPolicy::default())));
        let snapshot = handler.handle(ListActivitiesQuery).await.unwrap();
        assert!(snapshot.is_empty());
    }
}
