//! Live adapter for the `PrincipalDirectory` port.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use super::api::ApiClient;
use crate::ports::{PortFuture, Principal, PrincipalDirectory};

/// Principal directory backed by the platform's `user` service.
pub struct LiveDirectory {
    api: Arc<ApiClient>,
}

impl LiveDirectory {
    /// Creates a directory adapter over the shared API client.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

/// User object as returned by `user/list`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireUser {
    id: String,
    #[serde(default)]
    screen_name: Option<String>,
}

#[derive(Deserialize)]
struct WireUserList {
    #[serde(default)]
    objects: Vec<WireUser>,
}

impl PrincipalDirectory for LiveDirectory {
    fn find_principals(&self, display_name_like: &str) -> PortFuture<'_, Vec<Principal>> {
        let body = json!({
            "filter": {
                "objectType": "KalturaUserFilter",
                "screenNameLike": display_name_like,
            },
        });

        Box::pin(async move {
            let value = self.api.call("user", "list", body).await?;
            let list: WireUserList = serde_json::from_value(value)
                .map_err(|e| format!("Unexpected user/list response: {e}"))?;
            Ok(list
                .objects
                .into_iter()
                .map(|user| Principal {
                    display_name: user.screen_name.unwrap_or_default(),
                    id: user.id,
                })
                .collect())
        })
    }
}
