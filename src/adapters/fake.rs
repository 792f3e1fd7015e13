//! In-memory platform used by unit and integration tests.
//!
//! Holds principals, entries, links, and categories behind a mutex and
//! records every mutation attempt so tests can assert exactly which calls
//! the core issued. Mirrors the platform's observable quirks where they
//! matter: unpaged link listings are truncated to the platform's default
//! page size while `total_count` still covers the full set, duplicate
//! links are rejected, and the 32-link cap is enforced on create.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::context::PlatformContext;
use crate::ports::{
    Category, CategoryDirectory, CategoryLink, CategoryLinks, Entry, EntryCatalog, Listing,
    PageRequest, Principal, PrincipalDirectory, PortFuture,
};

/// Page size the platform applies when a listing request carries no pager.
const DEFAULT_PAGE_SIZE: usize = 30;

/// Hard cap on category links per entry, enforced on create.
const LINK_CAP: usize = 32;

#[derive(Default)]
struct FakeState {
    principals: Vec<Principal>,
    entries: Vec<Entry>,
    links: Vec<(String, i64)>,
    categories: Vec<Category>,
    fail_create_for: HashSet<String>,
    fail_link_list_for: HashSet<String>,
    fail_entry_list: bool,
    entry_pages_requested: Vec<u32>,
    create_attempts: Vec<(String, i64)>,
    deletes: Vec<(String, i64)>,
}

/// Scripted in-memory platform; cloning shares the underlying state.
#[derive(Clone, Default)]
pub struct FakePlatform {
    state: Arc<Mutex<FakeState>>,
}

impl FakePlatform {
    /// Creates an empty platform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context whose every port is served by this platform.
    #[must_use]
    pub fn context(&self) -> PlatformContext {
        PlatformContext {
            principals: Box::new(self.clone()),
            entries: Box::new(self.clone()),
            links: Box::new(self.clone()),
            categories: Box::new(self.clone()),
        }
    }

    /// Registers a principal in the directory.
    pub fn add_principal(&self, id: &str, display_name: &str) {
        self.state
            .lock()
            .expect("fake state poisoned")
            .principals
            .push(Principal { id: id.into(), display_name: display_name.into() });
    }

    /// Registers a media entry.
    pub fn add_entry(&self, id: &str, name: &str, owner_id: &str) {
        self.state
            .lock()
            .expect("fake state poisoned")
            .entries
            .push(Entry { id: id.into(), name: name.into(), owner_id: owner_id.into() });
    }

    /// Registers a category in the taxonomy.
    pub fn add_category(&self, id: i64, name: &str) {
        self.state
            .lock()
            .expect("fake state poisoned")
            .categories
            .push(Category { id, name: name.into() });
    }

    /// Links an entry to a category directly, bypassing cap enforcement.
    pub fn link(&self, entry_id: &str, category_id: i64) {
        self.state.lock().expect("fake state poisoned").links.push((entry_id.into(), category_id));
    }

    /// Makes `create_link` fail for the given entry.
    pub fn fail_create_for(&self, entry_id: &str) {
        self.state.lock().expect("fake state poisoned").fail_create_for.insert(entry_id.into());
    }

    /// Makes `list_links` fail for the given entry.
    pub fn fail_link_list_for(&self, entry_id: &str) {
        self.state.lock().expect("fake state poisoned").fail_link_list_for.insert(entry_id.into());
    }

    /// Makes every `list_entries` call fail.
    pub fn fail_entry_list(&self) {
        self.state.lock().expect("fake state poisoned").fail_entry_list = true;
    }

    /// Every `(entry_id, category_id)` pair passed to `create_link`,
    /// including rejected attempts, in call order.
    #[must_use]
    pub fn create_attempts(&self) -> Vec<(String, i64)> {
        self.state.lock().expect("fake state poisoned").create_attempts.clone()
    }

    /// Every `(entry_id, category_id)` pair deleted, in call order.
    #[must_use]
    pub fn deletes(&self) -> Vec<(String, i64)> {
        self.state.lock().expect("fake state poisoned").deletes.clone()
    }

    /// Page indices requested from the entry catalog, in call order.
    #[must_use]
    pub fn entry_pages_requested(&self) -> Vec<u32> {
        self.state.lock().expect("fake state poisoned").entry_pages_requested.clone()
    }

    /// Category IDs currently linked to the given entry.
    #[must_use]
    pub fn links_of(&self, entry_id: &str) -> Vec<i64> {
        self.state
            .lock()
            .expect("fake state poisoned")
            .links
            .iter()
            .filter(|(entry, _)| entry == entry_id)
            .map(|(_, category)| *category)
            .collect()
    }
}

impl PrincipalDirectory for FakePlatform {
    fn find_principals(&self, display_name_like: &str) -> PortFuture<'_, Vec<Principal>> {
        let pattern = display_name_like.to_string();
        let matches: Vec<Principal> = self
            .state
            .lock()
            .expect("fake state poisoned")
            .principals
            .iter()
            .filter(|principal| principal.display_name.contains(&pattern))
            .cloned()
            .collect();
        Box::pin(async move { Ok(matches) })
    }
}

impl EntryCatalog for FakePlatform {
    fn list_entries(&self, owner_id: &str, page: PageRequest) -> PortFuture<'_, Listing<Entry>> {
        let result = {
            let mut state = self.state.lock().expect("fake state poisoned");
            state.entry_pages_requested.push(page.page_index);
            if state.fail_entry_list {
                Err("media listing unavailable".to_string())
            } else {
                let owned: Vec<Entry> =
                    state.entries.iter().filter(|e| e.owner_id == owner_id).cloned().collect();
                let total = i64::try_from(owned.len()).unwrap_or(i64::MAX);
                let size = page.page_size as usize;
                let start = (page.page_index.saturating_sub(1) as usize) * size;
                let objects =
                    owned.into_iter().skip(start).take(size).collect::<Vec<_>>();
                Ok(Listing { objects, total_count: total })
            }
        };
        Box::pin(async move { result.map_err(Into::into) })
    }
}

impl CategoryLinks for FakePlatform {
    fn list_links(
        &self,
        entry_id: &str,
        category_id: Option<i64>,
        page: Option<PageRequest>,
    ) -> PortFuture<'_, Listing<CategoryLink>> {
        let result = {
            let state = self.state.lock().expect("fake state poisoned");
            if state.fail_link_list_for.contains(entry_id) {
                Err(format!("link listing unavailable for {entry_id}"))
            } else {
                let matching: Vec<CategoryLink> = state
                    .links
                    .iter()
                    .filter(|(entry, category)| {
                        entry == entry_id && category_id.is_none_or(|id| *category == id)
                    })
                    .map(|(entry, category)| CategoryLink {
                        entry_id: entry.clone(),
                        category_id: Some(*category),
                    })
                    .collect();
                let total = i64::try_from(matching.len()).unwrap_or(i64::MAX);
                let limit = page.map_or(DEFAULT_PAGE_SIZE, |p| p.page_size as usize);
                let objects = matching.into_iter().take(limit).collect();
                Ok(Listing { objects, total_count: total })
            }
        };
        Box::pin(async move { result.map_err(Into::into) })
    }

    fn create_link(&self, entry_id: &str, category_id: i64) -> PortFuture<'_, ()> {
        let result = {
            let mut state = self.state.lock().expect("fake state poisoned");
            state.create_attempts.push((entry_id.to_string(), category_id));
            if state.fail_create_for.contains(entry_id) {
                Err(format!("category link rejected for {entry_id}"))
            } else if state.links.iter().any(|(e, c)| e == entry_id && *c == category_id) {
                Err(format!("entry {entry_id} already linked to category {category_id}"))
            } else if state.links.iter().filter(|(e, _)| e == entry_id).count() >= LINK_CAP {
                Err(format!("entry {entry_id} has reached the maximum number of categories"))
            } else {
                state.links.push((entry_id.to_string(), category_id));
                Ok(())
            }
        };
        Box::pin(async move { result.map_err(Into::into) })
    }

    fn delete_link(&self, entry_id: &str, category_id: i64) -> PortFuture<'_, ()> {
        let result = {
            let mut state = self.state.lock().expect("fake state poisoned");
            state.deletes.push((entry_id.to_string(), category_id));
            let before = state.links.len();
            state.links.retain(|(e, c)| !(e == entry_id && *c == category_id));
            if state.links.len() == before {
                Err(format!("no link between {entry_id} and {category_id}"))
            } else {
                Ok(())
            }
        };
        Box::pin(async move { result.map_err(Into::into) })
    }
}

impl CategoryDirectory for FakePlatform {
    fn find_categories(&self, ids: &[i64], name_equal: &str) -> PortFuture<'_, Vec<Category>> {
        let wanted: HashSet<i64> = ids.iter().copied().collect();
        let matches: Vec<Category> = self
            .state
            .lock()
            .expect("fake state poisoned")
            .categories
            .iter()
            .filter(|category| wanted.contains(&category.id) && category.name == name_equal)
            .cloned()
            .collect();
        Box::pin(async move { Ok(matches) })
    }
}
