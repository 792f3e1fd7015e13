//! Shared JSON API client for the media platform.
//!
//! Every call is `POST {base}/api_v3/service/{service}/action/{action}`
//! with a JSON body; `format: 1` selects JSON responses and the session
//! token rides along as `ks`. Errors come back as a JSON object carrying
//! both `code` and `message`.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::ports::PortError;

/// Exception envelope the platform uses for API errors.
#[derive(Deserialize)]
struct ApiException {
    code: String,
    message: String,
}

/// Authenticated client shared by the live port adapters.
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: String,
}

impl ApiClient {
    /// Starts an admin session and returns a client that injects the
    /// session token into every subsequent call.
    ///
    /// # Errors
    ///
    /// Returns an error if the session call fails or the platform rejects
    /// the credentials.
    pub async fn connect(config: &Config) -> Result<Self, PortError> {
        let http = Client::new();
        let body = json!({
            "secret": config.admin_secret,
            "userId": config.user_id,
            "type": config.session_type,
            "partnerId": config.partner_id,
            "expiry": config.expiry,
        });

        let result = call(&http, &config.service_url, "session", "start", body).await?;
        let session: String = serde_json::from_value(result)
            .map_err(|e| -> PortError { format!("Unexpected session response: {e}").into() })?;

        Ok(Self { http, base_url: config.service_url.clone(), session })
    }

    /// Invokes one service action with the session token attached.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status,
    /// an unparseable body, or a platform exception envelope.
    pub async fn call(&self, service: &str, action: &str, mut body: Value) -> Result<Value, PortError> {
        if let Value::Object(map) = &mut body {
            map.insert("ks".into(), Value::String(self.session.clone()));
        }
        call(&self.http, &self.base_url, service, action, body).await
    }
}

/// One raw API round trip; used both for `session/start` (no token yet)
/// and for authenticated calls.
async fn call(
    http: &Client,
    base_url: &str,
    service: &str,
    action: &str,
    mut body: Value,
) -> Result<Value, PortError> {
    if let Value::Object(map) = &mut body {
        map.insert("format".into(), json!(1));
    }
    let url = format!("{}/api_v3/service/{service}/action/{action}", base_url.trim_end_matches('/'));

    let response = http
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| -> PortError { format!("Request to {service}/{action} failed: {e}").into() })?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| -> PortError { format!("Failed to read {service}/{action} response: {e}").into() })?;

    if !status.is_success() {
        return Err(format!("{service}/{action} returned HTTP {}: {text}", status.as_u16()).into());
    }

    let value: Value = serde_json::from_str(&text)
        .map_err(|e| -> PortError { format!("Failed to parse {service}/{action} response: {e}").into() })?;

    // The platform reports API errors with HTTP 200 and an exception body.
    if let Ok(exception) = serde_json::from_value::<ApiException>(value.clone()) {
        return Err(format!(
            "{service}/{action} failed: {} ({})",
            exception.message, exception.code
        )
        .into());
    }

    Ok(value)
}
