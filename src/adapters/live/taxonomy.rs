//! Live adapters for the `CategoryLinks` and `CategoryDirectory` ports.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::api::ApiClient;
use crate::ports::{
    Category, CategoryDirectory, CategoryLink, CategoryLinks, Listing, PageRequest, PortFuture,
};

/// Category-link store backed by the platform's `categoryEntry` service.
pub struct LiveCategoryLinks {
    api: Arc<ApiClient>,
}

impl LiveCategoryLinks {
    /// Creates a link-store adapter over the shared API client.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

/// Category-entry relation as returned by `categoryEntry/list`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLink {
    #[serde(default)]
    entry_id: String,
    #[serde(default)]
    category_id: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLinkList {
    #[serde(default)]
    objects: Vec<WireLink>,
    #[serde(default)]
    total_count: i64,
}

impl CategoryLinks for LiveCategoryLinks {
    fn list_links(
        &self,
        entry_id: &str,
        category_id: Option<i64>,
        page: Option<PageRequest>,
    ) -> PortFuture<'_, Listing<CategoryLink>> {
        let mut filter = Map::new();
        filter.insert("objectType".into(), json!("KalturaCategoryEntryFilter"));
        filter.insert("entryIdEqual".into(), json!(entry_id));
        if let Some(id) = category_id {
            filter.insert("categoryIdEqual".into(), json!(id));
        }
        let mut body = Map::new();
        body.insert("filter".into(), Value::Object(filter));
        if let Some(page) = page {
            body.insert(
                "pager".into(),
                json!({
                    "objectType": "KalturaFilterPager",
                    "pageSize": page.page_size,
                    "pageIndex": page.page_index,
                }),
            );
        }

        Box::pin(async move {
            let value = self.api.call("categoryEntry", "list", Value::Object(body)).await?;
            let list: WireLinkList = serde_json::from_value(value)
                .map_err(|e| format!("Unexpected categoryEntry/list response: {e}"))?;
            Ok(Listing {
                objects: list
                    .objects
                    .into_iter()
                    .map(|link| CategoryLink {
                        entry_id: link.entry_id,
                        category_id: link.category_id,
                    })
                    .collect(),
                total_count: list.total_count,
            })
        })
    }

    fn create_link(&self, entry_id: &str, category_id: i64) -> PortFuture<'_, ()> {
        let body = json!({
            "categoryEntry": {
                "objectType": "KalturaCategoryEntry",
                "entryId": entry_id,
                "categoryId": category_id,
            },
        });

        Box::pin(async move {
            self.api.call("categoryEntry", "add", body).await?;
            Ok(())
        })
    }

    fn delete_link(&self, entry_id: &str, category_id: i64) -> PortFuture<'_, ()> {
        let body = json!({
            "entryId": entry_id,
            "categoryId": category_id,
        });

        Box::pin(async move {
            self.api.call("categoryEntry", "delete", body).await?;
            Ok(())
        })
    }
}

/// Category search backed by the platform's `category` service.
pub struct LiveCategoryDirectory {
    api: Arc<ApiClient>,
}

impl LiveCategoryDirectory {
    /// Creates a category-search adapter over the shared API client.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

/// Category object as returned by `category/list`.
#[derive(Deserialize)]
struct WireCategory {
    id: i64,
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct WireCategoryList {
    #[serde(default)]
    objects: Vec<WireCategory>,
}

impl CategoryDirectory for LiveCategoryDirectory {
    fn find_categories(&self, ids: &[i64], name_equal: &str) -> PortFuture<'_, Vec<Category>> {
        let id_in =
            ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        let body = json!({
            "filter": {
                "objectType": "KalturaCategoryFilter",
                "idIn": id_in,
                "nameEqual": name_equal,
            },
        });

        Box::pin(async move {
            let value = self.api.call("category", "list", body).await?;
            let list: WireCategoryList = serde_json::from_value(value)
                .map_err(|e| format!("Unexpected category/list response: {e}"))?;
            Ok(list
                .objects
                .into_iter()
                .map(|category| Category { id: category.id, name: category.name })
                .collect())
        })
    }
}
