//! Membership lookup: does an entry already hold the target category?

use crate::ports::{CategoryLinks, PortError};

/// Returns true iff a link between the entry and the category exists.
///
/// # Errors
///
/// Propagates any listing error; the reconciliation loop treats that as
/// "unknown" and falls through to the add rather than crashing the batch.
pub async fn entry_has_category(
    links: &dyn CategoryLinks,
    entry_id: &str,
    category_id: i64,
) -> Result<bool, PortError> {
    let listing = links.list_links(entry_id, Some(category_id), None).await?;
    Ok(!listing.objects.is_empty())
}

#[cfg(test)]
mod tests {
    use super::entry_has_category;
    use crate::adapters::fake::FakePlatform;

    #[tokio::test]
    async fn true_when_the_link_exists() {
        let fake = FakePlatform::new();
        fake.link("entry-1", 9001);

        assert!(entry_has_category(&fake, "entry-1", 9001).await.unwrap());
    }

    #[tokio::test]
    async fn false_for_other_categories_and_other_entries() {
        let fake = FakePlatform::new();
        fake.link("entry-1", 7);

        assert!(!entry_has_category(&fake, "entry-1", 9001).await.unwrap());
        assert!(!entry_has_category(&fake, "entry-2", 7).await.unwrap());
    }

    #[tokio::test]
    async fn listing_errors_propagate_to_the_caller() {
        let fake = FakePlatform::new();
        fake.fail_link_list_for("entry-1");

        assert!(entry_has_category(&fake, "entry-1", 9001).await.is_err());
    }
}
