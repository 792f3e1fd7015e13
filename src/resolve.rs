//! Identity resolution: creator identifier to internal principal ID.

use crate::ports::{PortError, PrincipalDirectory};

/// Resolves a creator's display-name identifier to the platform's internal
/// principal ID, taking the first directory match.
///
/// # Errors
///
/// Returns an error if the directory query fails or no principal matches;
/// either is fatal to the run, since no entries can be enumerated without
/// an owner ID.
pub async fn resolve_creator_id(
    directory: &dyn PrincipalDirectory,
    identifier: &str,
) -> Result<String, PortError> {
    let matches = directory.find_principals(identifier).await?;
    matches
        .into_iter()
        .next()
        .map(|principal| principal.id)
        .ok_or_else(|| format!(r#"User with name "{identifier}" not found."#).into())
}

#[cfg(test)]
mod tests {
    use super::resolve_creator_id;
    use crate::adapters::fake::FakePlatform;

    #[tokio::test]
    async fn returns_first_matching_principal() {
        let fake = FakePlatform::new();
        fake.add_principal("u-1", "creator@example.com");
        fake.add_principal("u-2", "creator@example.com");

        let id = resolve_creator_id(&fake, "creator@example.com").await.unwrap();
        assert_eq!(id, "u-1");
    }

    #[tokio::test]
    async fn errors_when_no_principal_matches() {
        let fake = FakePlatform::new();
        fake.add_principal("u-1", "someone-else@example.com");

        let err = resolve_creator_id(&fake, "ghost@example.com").await.unwrap_err();
        assert!(err.to_string().contains(r#""ghost@example.com" not found"#));
    }
}
