//! Entry catalog port for listing a creator's media entries.

use serde::{Deserialize, Serialize};

use super::PortFuture;

/// A media entry record owned by a principal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    /// Opaque entry identifier.
    pub id: String,
    /// Display name of the entry.
    pub name: String,
    /// ID of the owning principal.
    pub owner_id: String,
}

/// One page of a paginated listing request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of objects requested per page.
    pub page_size: u32,
    /// 1-based page index.
    pub page_index: u32,
}

/// A page of objects plus the total count the platform reports for the
/// whole filtered collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Listing<T> {
    /// The objects on this page.
    pub objects: Vec<T>,
    /// Total matching objects across all pages.
    pub total_count: i64,
}

impl<T> Listing<T> {
    /// Total count as reported by the platform, falling back to the batch
    /// length when the metadata is absent or inconsistent (zero with a
    /// non-empty batch).
    #[must_use]
    pub fn count(&self) -> usize {
        if self.total_count <= 0 && !self.objects.is_empty() {
            self.objects.len()
        } else {
            usize::try_from(self.total_count).unwrap_or(0)
        }
    }
}

/// Lists media entries belonging to a principal.
pub trait EntryCatalog: Send + Sync {
    /// Fetches one page of entries owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing request fails.
    fn list_entries(&self, owner_id: &str, page: PageRequest) -> PortFuture<'_, Listing<Entry>>;
}

#[cfg(test)]
mod tests {
    use super::Listing;

    #[test]
    fn count_prefers_total_count() {
        let listing = Listing { objects: vec![1, 2], total_count: 40 };
        assert_eq!(listing.count(), 40);
    }

    #[test]
    fn count_falls_back_to_batch_length() {
        let listing = Listing { objects: vec![1, 2, 3], total_count: 0 };
        assert_eq!(listing.count(), 3);
    }

    #[test]
    fn count_of_empty_listing_is_zero() {
        let listing: Listing<i32> = Listing { objects: vec![], total_count: 0 };
        assert_eq!(listing.count(), 0);
    }
}
