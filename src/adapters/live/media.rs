//! Live adapter for the `EntryCatalog` port.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use super::api::ApiClient;
use crate::ports::{Entry, EntryCatalog, Listing, PageRequest, PortFuture};

/// Entry catalog backed by the platform's `media` service.
pub struct LiveEntryCatalog {
    api: Arc<ApiClient>,
}

impl LiveEntryCatalog {
    /// Creates an entry-catalog adapter over the shared API client.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

/// Media entry object as returned by `media/list`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireEntry {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    user_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireEntryList {
    #[serde(default)]
    objects: Vec<WireEntry>,
    #[serde(default)]
    total_count: i64,
}

impl EntryCatalog for LiveEntryCatalog {
    fn list_entries(&self, owner_id: &str, page: PageRequest) -> PortFuture<'_, Listing<Entry>> {
        let body = json!({
            "filter": {
                "objectType": "KalturaMediaEntryFilter",
                "userIdEqual": owner_id,
            },
            "pager": {
                "objectType": "KalturaFilterPager",
                "pageSize": page.page_size,
                "pageIndex": page.page_index,
            },
        });

        Box::pin(async move {
            let value = self.api.call("media", "list", body).await?;
            let list: WireEntryList = serde_json::from_value(value)
                .map_err(|e| format!("Unexpected media/list response: {e}"))?;
            Ok(Listing {
                objects: list
                    .objects
                    .into_iter()
                    .map(|entry| Entry { id: entry.id, name: entry.name, owner_id: entry.user_id })
                    .collect(),
                total_count: list.total_count,
            })
        })
    }
}
