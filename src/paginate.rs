//! Pagination driver over the entry catalog.
//!
//! A lazy, finite, non-restartable sequence of entry batches: page index
//! starts at 1 and advances by exactly 1, a batch shorter than the page
//! size is the last (no guaranteed-empty trailing request), and fetch
//! errors propagate untouched — a failed page is fatal to the run.

use crate::ports::{Entry, EntryCatalog, PageRequest, PortError};

/// Enumerates all entries owned by one principal, page by page.
pub struct EntryPages<'a> {
    catalog: &'a dyn EntryCatalog,
    owner_id: String,
    owner_label: String,
    page_size: u32,
    page_index: u32,
    announced: bool,
    done: bool,
}

impl<'a> EntryPages<'a> {
    /// Creates a fresh pager starting at page 1.
    ///
    /// `owner_label` is only used in log lines (the creator's identifier
    /// as the operator typed it).
    #[must_use]
    pub fn new(
        catalog: &'a dyn EntryCatalog,
        owner_id: &str,
        owner_label: &str,
        page_size: u32,
    ) -> Self {
        Self {
            catalog,
            owner_id: owner_id.to_string(),
            owner_label: owner_label.to_string(),
            page_size,
            page_index: 1,
            announced: false,
            done: false,
        }
    }

    /// Fetches the next batch of entries, or `None` once exhausted.
    ///
    /// After exhaustion further calls return `Ok(None)` without issuing
    /// requests. The first page distinguishes "no entries at all" from
    /// ordinary completion, for logging only.
    ///
    /// # Errors
    ///
    /// Propagates any catalog error; the caller aborts the run.
    pub async fn next_batch(&mut self) -> Result<Option<Vec<Entry>>, PortError> {
        if self.done {
            return Ok(None);
        }

        let page = PageRequest { page_size: self.page_size, page_index: self.page_index };
        let listing = self.catalog.list_entries(&self.owner_id, page).await?;

        if !self.announced {
            self.announced = true;
            let total = listing.count();
            if total == 0 {
                println!("No entries found matching the creator ID.");
                self.done = true;
                return Ok(None);
            }
            println!(r#"Found {total} entries for creator "{}"."#, self.owner_label);
        }

        if listing.objects.is_empty() {
            self.done = true;
            return Ok(None);
        }
        if listing.objects.len() < self.page_size as usize {
            self.done = true;
        }
        self.page_index += 1;
        Ok(Some(listing.objects))
    }
}

#[cfg(test)]
mod tests {
    use super::EntryPages;
    use crate::adapters::fake::FakePlatform;

    fn seed_entries(fake: &FakePlatform, count: usize) {
        for i in 0..count {
            fake.add_entry(&format!("entry-{i}"), &format!("Entry {i}"), "u-1");
        }
    }

    #[tokio::test]
    async fn short_page_terminates_without_trailing_request() {
        let fake = FakePlatform::new();
        seed_entries(&fake, 5);

        let mut pages = EntryPages::new(&fake, "u-1", "creator", 2);
        assert_eq!(pages.next_batch().await.unwrap().unwrap().len(), 2);
        assert_eq!(pages.next_batch().await.unwrap().unwrap().len(), 2);
        assert_eq!(pages.next_batch().await.unwrap().unwrap().len(), 1);
        assert!(pages.next_batch().await.unwrap().is_none());

        // Three requests for three pages; nothing after the short page.
        assert_eq!(fake.entry_pages_requested(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn exact_multiple_stops_on_the_empty_page() {
        let fake = FakePlatform::new();
        seed_entries(&fake, 4);

        let mut pages = EntryPages::new(&fake, "u-1", "creator", 2);
        assert_eq!(pages.next_batch().await.unwrap().unwrap().len(), 2);
        assert_eq!(pages.next_batch().await.unwrap().unwrap().len(), 2);
        assert!(pages.next_batch().await.unwrap().is_none());
        assert_eq!(fake.entry_pages_requested(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn zero_entries_ends_after_one_request() {
        let fake = FakePlatform::new();

        let mut pages = EntryPages::new(&fake, "u-1", "creator", 200);
        assert!(pages.next_batch().await.unwrap().is_none());
        assert!(pages.next_batch().await.unwrap().is_none());
        assert_eq!(fake.entry_pages_requested(), vec![1]);
    }

    #[tokio::test]
    async fn never_requests_the_same_index_twice() {
        let fake = FakePlatform::new();
        seed_entries(&fake, 7);

        let mut pages = EntryPages::new(&fake, "u-1", "creator", 3);
        while pages.next_batch().await.unwrap().is_some() {}

        let requested = fake.entry_pages_requested();
        let mut deduped = requested.clone();
        deduped.dedup();
        assert_eq!(requested, deduped);
        assert_eq!(requested, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn fetch_errors_propagate() {
        let fake = FakePlatform::new();
        seed_entries(&fake, 1);
        fake.fail_entry_list();

        let mut pages = EntryPages::new(&fake, "u-1", "creator", 200);
        assert!(pages.next_batch().await.is_err());
    }
}
