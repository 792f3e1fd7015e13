//! Reconciliation loop: brings every entry of one creator into the target
//! category, one entry at a time.
//!
//! Per entry the order is membership check, capacity guard, add. The
//! membership check and the guard are best-effort: their failures are
//! logged and the loop falls through to the add, because a false "doesn't
//! have it" is recoverable while crashing the batch is not. Only the
//! steps before the loop (resolution, pagination) are fatal.

use crate::capacity::free_slot_if_at_cap;
use crate::config::Config;
use crate::context::PlatformContext;
use crate::membership::entry_has_category;
use crate::paginate::EntryPages;
use crate::resolve::resolve_creator_id;

/// Entries are listed with this page size; far above typical result sizes.
pub const ENTRY_PAGE_SIZE: u32 = 200;

/// The low-priority category evicted to free a slot on a full entry.
pub const EVICTION_CATEGORY: &str = "InContext";

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries whose link to the target category was created.
    pub processed: u32,
    /// Entry pages visited.
    pub pages: u32,
}

/// Assigns the target category to every entry owned by the configured
/// creator, evicting one "InContext" link per full entry as needed.
///
/// Per-entry failures are logged and skipped; the run always reaches the
/// final summary unless resolution or pagination fails.
///
/// # Errors
///
/// Returns an error when the creator cannot be resolved or an entry page
/// cannot be fetched. Per-entry errors never surface here.
pub async fn assign_category_to_creator_entries(
    ctx: &PlatformContext,
    config: &Config,
) -> Result<RunSummary, String> {
    let category_id = config.target_category_id;
    println!("Using known category ID: {category_id}");

    let creator = &config.creator_identifier;
    let creator_id = resolve_creator_id(ctx.principals.as_ref(), creator)
        .await
        .map_err(|e| e.to_string())?;
    println!(r#"Found creator "{creator}" with ID: {creator_id}"#);

    let mut pages = EntryPages::new(ctx.entries.as_ref(), &creator_id, creator, ENTRY_PAGE_SIZE);
    let mut summary = RunSummary { processed: 0, pages: 0 };

    while let Some(batch) =
        pages.next_batch().await.map_err(|e| format!("Failed to list entries: {e}"))?
    {
        for entry in &batch {
            match entry_has_category(ctx.links.as_ref(), &entry.id, category_id).await {
                Ok(true) => {
                    println!(
                        r#"Entry "{}" ({}) already has category {category_id}; skipping."#,
                        entry.name, entry.id
                    );
                    continue;
                }
                Ok(false) => {}
                Err(e) => {
                    eprintln!(
                        r#"Warning: could not verify existing category for entry "{}" ({}): {e}"#,
                        entry.name, entry.id
                    );
                }
            }

            if let Err(e) = free_slot_if_at_cap(
                ctx.links.as_ref(),
                ctx.categories.as_ref(),
                &entry.id,
                EVICTION_CATEGORY,
            )
            .await
            {
                eprintln!(
                    r#"Warning: could not attempt removal for entry "{}" ({}): {e}"#,
                    entry.name, entry.id
                );
            }

            match ctx.links.create_link(&entry.id, category_id).await {
                Ok(()) => {
                    println!(
                        r#"Successfully added category to entry "{}" ({})"#,
                        entry.name, entry.id
                    );
                    summary.processed += 1;
                }
                Err(e) => {
                    eprintln!(
                        r#"Failed to add category to entry "{}" ({}): {e}"#,
                        entry.name, entry.id
                    );
                }
            }
        }
        summary.pages += 1;
    }

    println!(
        "Bulk operation completed. Processed {} entries across {} pages.",
        summary.processed, summary.pages
    );
    Ok(summary)
}
