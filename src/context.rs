//! Platform context bundling all port trait objects.

use std::sync::Arc;

use crate::adapters::live::{
    ApiClient, LiveCategoryDirectory, LiveCategoryLinks, LiveDirectory, LiveEntryCatalog,
};
use crate::config::Config;
use crate::ports::{CategoryDirectory, CategoryLinks, EntryCatalog, PrincipalDirectory};

/// Bundles the remote-platform ports into a single context.
///
/// Each field covers one slice of the platform's API. The live constructor
/// wires reqwest adapters over one authenticated client; tests build a
/// context from [`crate::adapters::fake::FakePlatform`] instead.
pub struct PlatformContext {
    /// Principal search.
    pub principals: Box<dyn PrincipalDirectory>,
    /// Paged entry listing.
    pub entries: Box<dyn EntryCatalog>,
    /// Category-link listing, creation, and deletion.
    pub links: Box<dyn CategoryLinks>,
    /// Category search.
    pub categories: Box<dyn CategoryDirectory>,
}

impl PlatformContext {
    /// Authenticates against the platform and wires the live adapters.
    ///
    /// Sequenced strictly before any dependent call: nothing else touches
    /// the platform until the session is established.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be started.
    pub async fn connect(config: &Config) -> Result<Self, String> {
        let api = ApiClient::connect(config)
            .await
            .map_err(|e| format!("Authentication failed: {e}"))?;
        let api = Arc::new(api);

        Ok(Self {
            principals: Box::new(LiveDirectory::new(Arc::clone(&api))),
            entries: Box::new(LiveEntryCatalog::new(Arc::clone(&api))),
            links: Box::new(LiveCategoryLinks::new(Arc::clone(&api))),
            categories: Box::new(LiveCategoryDirectory::new(api)),
        })
    }
}
