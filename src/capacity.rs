//! Capacity guard: frees one category slot on an entry at the link cap.

use crate::ports::{CategoryDirectory, CategoryLinks, PageRequest, PortError};

/// Hard platform cap on category links per entry.
pub const LINK_CAP: usize = 32;

/// Page size used to fetch an entry's full link set in one page;
/// comfortably above the cap.
pub const LINK_PAGE_SIZE: u32 = 500;

/// Removes one link to the named category when the entry is at the cap.
///
/// Returns `true` when a link was evicted, `false` when the entry is under
/// the cap or nothing evictable was found. In the "at cap, nothing
/// evictable" case a warning is logged and the caller's subsequent add may
/// still fail remotely; that outcome is not prevented here.
///
/// # Errors
///
/// Propagates any listing, search, or delete error; the reconciliation
/// loop logs it and proceeds as though nothing was evicted.
pub async fn free_slot_if_at_cap(
    links: &dyn CategoryLinks,
    categories: &dyn CategoryDirectory,
    entry_id: &str,
    category_name: &str,
) -> Result<bool, PortError> {
    // Count first; the unpaged listing may truncate objects but its total
    // still covers the whole link set.
    let counted = links.list_links(entry_id, None, None).await?;
    if counted.count() < LINK_CAP {
        return Ok(false);
    }

    // At the cap: re-fetch the full set in one oversized page.
    let page = PageRequest { page_size: LINK_PAGE_SIZE, page_index: 1 };
    let full = links.list_links(entry_id, None, Some(page)).await?;
    let category_ids: Vec<i64> =
        full.objects.into_iter().filter_map(|link| link.category_id).collect();

    if category_ids.is_empty() {
        eprintln!(
            "Warning: entry {entry_id} has {LINK_CAP} categories, but could not enumerate category IDs."
        );
        return Ok(false);
    }

    let matches = categories.find_categories(&category_ids, category_name).await?;
    if let Some(evictable) = matches.first() {
        links.delete_link(entry_id, evictable.id).await?;
        println!(
            r#"Removed category named "{category_name}" (id {}) from entry {entry_id} to free space."#,
            evictable.id
        );
        return Ok(true);
    }

    eprintln!(
        r#"Warning: entry {entry_id} has {LINK_CAP} categories but no category named "{category_name}" to remove."#
    );
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::{free_slot_if_at_cap, LINK_CAP};
    use crate::adapters::fake::FakePlatform;

    const EVICTION: &str = "InContext";

    fn entry_with_links(fake: &FakePlatform, entry_id: &str, count: usize) {
        for id in 0..count {
            fake.link(entry_id, i64::try_from(id).unwrap());
        }
    }

    #[tokio::test]
    async fn under_the_cap_never_deletes() {
        let fake = FakePlatform::new();
        entry_with_links(&fake, "entry-1", LINK_CAP - 1);
        fake.add_category(0, EVICTION);

        let evicted = free_slot_if_at_cap(&fake, &fake, "entry-1", EVICTION).await.unwrap();
        assert!(!evicted);
        assert!(fake.deletes().is_empty());
    }

    #[tokio::test]
    async fn at_the_cap_evicts_exactly_one_link() {
        let fake = FakePlatform::new();
        entry_with_links(&fake, "entry-1", LINK_CAP - 1);
        fake.link("entry-1", 555);
        fake.add_category(555, EVICTION);

        let evicted = free_slot_if_at_cap(&fake, &fake, "entry-1", EVICTION).await.unwrap();
        assert!(evicted);
        assert_eq!(fake.deletes(), vec![("entry-1".to_string(), 555)]);
        assert_eq!(fake.links_of("entry-1").len(), LINK_CAP - 1);
    }

    #[tokio::test]
    async fn at_the_cap_without_the_category_deletes_nothing() {
        let fake = FakePlatform::new();
        entry_with_links(&fake, "entry-1", LINK_CAP);
        fake.add_category(999, EVICTION); // exists, but not linked to the entry

        let evicted = free_slot_if_at_cap(&fake, &fake, "entry-1", EVICTION).await.unwrap();
        assert!(!evicted);
        assert!(fake.deletes().is_empty());
    }

    #[tokio::test]
    async fn over_the_cap_still_evicts() {
        let fake = FakePlatform::new();
        entry_with_links(&fake, "entry-1", LINK_CAP + 2);
        fake.add_category(3, EVICTION);

        let evicted = free_slot_if_at_cap(&fake, &fake, "entry-1", EVICTION).await.unwrap();
        assert!(evicted);
        assert_eq!(fake.deletes().len(), 1);
    }

    #[tokio::test]
    async fn listing_errors_propagate() {
        let fake = FakePlatform::new();
        fake.fail_link_list_for("entry-1");

        assert!(free_slot_if_at_cap(&fake, &fake, "entry-1", EVICTION).await.is_err());
    }
}
