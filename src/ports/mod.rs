//! Port traits defining the remote-platform boundary.
//!
//! Each trait represents one slice of the media platform's API that the
//! core calls (principal search, entry listing, category links and
//! categories). Live adapters live in `src/adapters/live/`; the in-memory
//! test platform in `src/adapters/fake.rs`.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

pub mod directory;
pub mod media;
pub mod taxonomy;

pub use directory::{Principal, PrincipalDirectory};
pub use media::{Entry, EntryCatalog, Listing, PageRequest};
pub use taxonomy::{Category, CategoryDirectory, CategoryLink, CategoryLinks};

/// Error type carried across every port boundary.
pub type PortError = Box<dyn Error + Send + Sync>;

/// Boxed future type alias used by the port traits to stay dyn-compatible.
pub type PortFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, PortError>> + Send + 'a>>;
