//! Live adapters speaking the platform's JSON API over HTTP.

pub mod api;
pub mod directory;
pub mod media;
pub mod taxonomy;

pub use api::ApiClient;
pub use directory::LiveDirectory;
pub use media::LiveEntryCatalog;
pub use taxonomy::{LiveCategoryDirectory, LiveCategoryLinks};
