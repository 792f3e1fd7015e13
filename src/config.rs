//! Run configuration loaded from the environment.
//!
//! Built once at process entry and passed by reference into the core; no
//! module-level globals.

use std::env;

/// Everything one run needs, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Admin credential secret used to start the session.
    pub admin_secret: String,
    /// Acting user ID recorded on the session.
    pub user_id: String,
    /// Platform session type (2 = admin).
    pub session_type: i32,
    /// Session lifetime in seconds.
    pub expiry: i64,
    /// Numeric partner/tenant ID.
    pub partner_id: i32,
    /// Platform endpoint base URL.
    pub service_url: String,
    /// The category every entry should end up holding.
    pub target_category_id: i64,
    /// The creator whose entries are reconciled (display-name identifier).
    pub creator_identifier: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is missing or a numeric field does
    /// not parse; nothing remote has been called at that point.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through the given variable lookup.
    ///
    /// # Errors
    ///
    /// Same contract as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let partner_id: i32 = required(&lookup, "PARTNER_ID")?
            .parse()
            .map_err(|_| "Missing or invalid PARTNER_ID in environment".to_string())?;
        let admin_secret = required(&lookup, "ADMIN_SECRET")
            .map_err(|_| "Missing ADMIN_SECRET in environment".to_string())?;

        Ok(Self {
            admin_secret,
            user_id: required(&lookup, "USER_ID")?,
            session_type: parse_required(&lookup, "TYPE")?,
            expiry: parse_required(&lookup, "EXPIRY")?,
            partner_id,
            service_url: required(&lookup, "SERVICE_URL")?,
            target_category_id: parse_required(&lookup, "CATEGORY_ID")?,
            creator_identifier: required(&lookup, "CREATOR_EMAIL")?,
        })
    }
}

/// Fetches a required variable, rejecting empty values.
fn required<F>(lookup: &F, key: &str) -> Result<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("Missing {key} in environment")),
    }
}

/// Fetches a required variable and parses it into a numeric type.
fn parse_required<F, T>(lookup: &F, key: &str) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    required(lookup, key)?
        .trim()
        .parse()
        .map_err(|_| format!("Missing or invalid {key} in environment"))
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ADMIN_SECRET", "s3cret"),
            ("USER_ID", "admin@example.com"),
            ("TYPE", "2"),
            ("EXPIRY", "86400"),
            ("PARTNER_ID", "4242"),
            ("SERVICE_URL", "https://media.example.com"),
            ("CATEGORY_ID", "9001"),
            ("CREATOR_EMAIL", "creator@example.com"),
        ])
    }

    fn load(env: &HashMap<&str, &str>) -> Result<Config, String> {
        Config::from_lookup(|key| env.get(key).map(ToString::to_string))
    }

    #[test]
    fn loads_complete_environment() {
        let config = load(&full_env()).unwrap();
        assert_eq!(config.partner_id, 4242);
        assert_eq!(config.target_category_id, 9001);
        assert_eq!(config.session_type, 2);
        assert_eq!(config.creator_identifier, "creator@example.com");
    }

    #[test]
    fn missing_partner_id_is_fatal() {
        let mut env = full_env();
        env.remove("PARTNER_ID");
        let err = load(&env).unwrap_err();
        assert!(err.contains("PARTNER_ID"));
    }

    #[test]
    fn non_numeric_partner_id_is_fatal() {
        let mut env = full_env();
        env.insert("PARTNER_ID", "not-a-number");
        let err = load(&env).unwrap_err();
        assert_eq!(err, "Missing or invalid PARTNER_ID in environment");
    }

    #[test]
    fn missing_admin_secret_is_fatal() {
        let mut env = full_env();
        env.insert("ADMIN_SECRET", "");
        let err = load(&env).unwrap_err();
        assert_eq!(err, "Missing ADMIN_SECRET in environment");
    }

    #[test]
    fn malformed_category_id_is_fatal() {
        let mut env = full_env();
        env.insert("CATEGORY_ID", "news");
        let err = load(&env).unwrap_err();
        assert!(err.contains("CATEGORY_ID"));
    }
}
