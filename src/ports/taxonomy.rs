//! Category and category-link ports.
//!
//! The platform caps an entry at 32 category links; exceeding the cap is
//! the platform's error to raise, but the capacity guard avoids reaching
//! it in the first place.

use serde::{Deserialize, Serialize};

use super::media::{Listing, PageRequest};
use super::PortFuture;

/// A taxonomy node that can be linked to entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Numeric category ID.
    pub id: i64,
    /// Human-readable category name.
    pub name: String,
}

/// The relation between one entry and one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryLink {
    /// The linked entry's ID.
    pub entry_id: String,
    /// The linked category's ID; absent in some platform responses.
    pub category_id: Option<i64>,
}

/// Manages the entry-to-category link relation.
pub trait CategoryLinks: Send + Sync {
    /// Lists links for an entry, optionally narrowed to one category and
    /// optionally paged. Without a pager the platform applies its own
    /// default page size, but `total_count` still covers the full set.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing request fails.
    fn list_links(
        &self,
        entry_id: &str,
        category_id: Option<i64>,
        page: Option<PageRequest>,
    ) -> PortFuture<'_, Listing<CategoryLink>>;

    /// Creates a link between an entry and a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the link cannot be created (already present,
    /// entry at the cap, or a transport failure).
    fn create_link(&self, entry_id: &str, category_id: i64) -> PortFuture<'_, ()>;

    /// Deletes the link between an entry and a category.
    ///
    /// # Errors
    ///
    /// Returns an error if no such link exists or the request fails.
    fn delete_link(&self, entry_id: &str, category_id: i64) -> PortFuture<'_, ()>;
}

/// Searches the category taxonomy.
pub trait CategoryDirectory: Send + Sync {
    /// Finds categories whose ID is in `ids` and whose name equals
    /// `name_equal`, in the platform's order.
    ///
    /// # Errors
    ///
    /// Returns an error if the search fails.
    fn find_categories(&self, ids: &[i64], name_equal: &str) -> PortFuture<'_, Vec<Category>>;
}
