//! GetListsHandler - Query handler for the list overview screens.

use std::sync::Arc;

use crate::domain::foundation::ListStatus;
use crate::domain::list::{ListError, ListInfo};
use crate::ports::ListStore;

/// Query for every list with a given status.
#[derive(Debug, Clone, Copy)]
pub struct GetListsQuery {
    pub status: ListStatus,
}

impl GetListsQuery {
    pub fn active() -> Self {
        Self {
            status: ListStatus::Active,
        }
    }

    pub fn archived() -> Self {
        Self {
            status: ListStatus::Archived,
        }
    }
}

/// Handler for listing lists, pinned first, then newest first.
pub struct GetListsHandler {
    store: Arc<dyn ListStore>,
}

impl GetListsHandler {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetListsQuery) -> Result<Vec<ListInfo>, ListError> {
        let mut lists = self.store.lists_with_status(query.status).await?;
        lists.sort_by(|a, b| {
            b.pinned
                .cmp(&a.pinned)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(lists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryListStore;
    use crate::domain::foundation::{ListId, Timestamp};
    use crate::domain::list::ShopList;
    use chrono::{TimeZone, Utc};

    fn list_at(title: &str, day: u32, pinned: bool) -> ShopList {
        ShopList::reconstitute(
            ListInfo {
                id: ListId::new(),
                title: title.to_string(),
                created_at: Timestamp::from_datetime(
                    Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
                ),
                status: ListStatus::Active,
                pinned,
            },
            vec![],
        )
    }

    #[tokio::test]
    async fn orders_pinned_first_then_newest() {
        let store = Arc::new(InMemoryListStore::with_lists([
            list_at("Old", 1, false),
            list_at("Pinned old", 2, true),
            list_at("New", 10, false),
            list_at("Pinned new", 8, true),
        ]));
        let handler = GetListsHandler::new(store);

        let lists = handler.handle(GetListsQuery::active()).await.unwrap();

        let titles: Vec<_> = lists.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Pinned new", "Pinned old", "New", "Old"]);
    }

    #[tokio::test]
    async fn filters_by_status() {
        let mut done = list_at("Done", 3, false);
        done.archive().unwrap();
        let store = Arc::new(InMemoryListStore::with_lists([list_at("Open", 4, false), done]));
        let handler = GetListsHandler::new(store);

        let archived = handler.handle(GetListsQuery::archived()).await.unwrap();

        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].title, "Done");
    }
}
