//! Principal directory port for resolving creator identities.

use serde::{Deserialize, Serialize};

use super::PortFuture;

/// An addressable user identity in the remote platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    /// The platform's internal principal ID.
    pub id: String,
    /// Human-readable identifier (display name / screen name).
    pub display_name: String,
}

/// Searches the platform's user directory.
pub trait PrincipalDirectory: Send + Sync {
    /// Finds principals whose display name matches the given pattern.
    ///
    /// Returns matches in the platform's order; callers take the first.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory query fails.
    fn find_principals(&self, display_name_like: &str) -> PortFuture<'_, Vec<Principal>>;
}
