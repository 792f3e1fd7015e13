//! Core library for the `shelver` bulk category assignment tool.
//!
//! One invocation assigns the configured target category to every media
//! entry owned by one creator, evicting a designated low-priority category
//! from entries at the platform's 32-link cap.

pub mod adapters;
pub mod assign;
pub mod capacity;
pub mod config;
pub mod context;
pub mod membership;
pub mod paginate;
pub mod ports;
pub mod resolve;

use config::Config;
use context::PlatformContext;

/// Runs one bulk assignment to completion.
///
/// Loads `.env` if present, reads the configuration, authenticates, and
/// reconciles every entry. Per-entry failures are logged and do not fail
/// the run.
///
/// # Errors
///
/// Returns an error string on startup validation failures, authentication
/// failures, creator-resolution misses, or entry-page fetch failures.
pub fn run() -> Result<(), String> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;

    runtime.block_on(async {
        let ctx = PlatformContext::connect(&config).await?;
        assign::assign_category_to_creator_entries(&ctx, &config).await?;
        Ok(())
    })
}
