//! Cloudflare v4 API client
//!
//! Implements the `cf-core` [`DnsApi`] trait against the Cloudflare
//! client API. Authentication uses the account email and legacy API key
//! (`X-Auth-Email` / `X-Auth-Key` headers). Every trait method issues
//! exactly one HTTP request; there is no retry, backoff, or caching in
//! this crate.
//!
//! API reference:
//! - List zones: GET `/zones?name=...`
//! - List DNS records: GET `/zones/:zone_id/dns_records?type=...&name=...`
//! - Create DNS record: POST `/zones/:zone_id/dns_records`
//! - Update DNS record: PUT `/zones/:zone_id/dns_records/:record_id`
//! - Delete DNS record: DELETE `/zones/:zone_id/dns_records/:record_id`

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use cf_core::error::{Error, Result};
use cf_core::record::{DnsRecord, NewRecord, RecordFilter, RecordUpdate};
use cf_core::traits::{ApiFactory, DnsApi};

/// Cloudflare API base URL
const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// HTTP timeout for API requests
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated Cloudflare API handle
pub struct CloudflareApi {
    client: reqwest::Client,
    email: String,
    /// Account API key. Never logged.
    api_key: String,
}

// The Debug implementation intentionally does not expose the API key.
impl std::fmt::Debug for CloudflareApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareApi")
            .field("email", &self.email)
            .field("api_key", &"<REDACTED>")
            .finish()
    }
}

/// Cloudflare's uniform response envelope
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    errors: Vec<ApiMessage>,
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct Zone {
    id: String,
}

/// Deletion responses carry only the record ID
#[derive(Debug, Deserialize)]
struct DeletedRecord {
    #[allow(dead_code)]
    id: Option<String>,
}

impl CloudflareApi {
    /// Create an API handle for the given account credentials
    ///
    /// An empty API key is rejected here rather than at the first
    /// request, so the caller's command fails before any HTTP traffic.
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let email = email.into();
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::api("Cloudflare API key is required"));
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            email,
            api_key,
        })
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("X-Auth-Email", &self.email)
            .header("X-Auth-Key", &self.api_key)
            .header("Content-Type", "application/json")
    }

    /// Send a request and decode the Cloudflare envelope
    ///
    /// On failure the first envelope error message is surfaced verbatim,
    /// so the user sees the provider's own diagnostic. The HTTP status
    /// is the fallback when the body is not a valid envelope.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        what: &str,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::http(format!("{what}: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("{what}: failed to read response: {e}")))?;

        match serde_json::from_str::<Envelope<T>>(&body) {
            Ok(envelope) => {
                if envelope.success {
                    envelope
                        .result
                        .ok_or_else(|| Error::api(format!("{what}: empty result")))
                } else if let Some(err) = envelope.errors.first() {
                    tracing::debug!(code = err.code, "API error: {}", err.message);
                    Err(Error::api(err.message.clone()))
                } else {
                    Err(Error::api(format!("{what} failed: HTTP {status}")))
                }
            }
            Err(_) => Err(Error::api(format!("{what} failed: HTTP {status}"))),
        }
    }
}

#[async_trait]
impl DnsApi for CloudflareApi {
    async fn zone_id_by_name(&self, name: &str) -> Result<String> {
        tracing::debug!("looking up zone ID for {}", name);
        let url = format!("{CLOUDFLARE_API_BASE}/zones");
        let request = self
            .request(reqwest::Method::GET, &url)
            .query(&[("name", name)]);

        let zones: Vec<Zone> = self.dispatch(request, "zone lookup").await?;
        zones
            .into_iter()
            .next()
            .map(|z| z.id)
            .ok_or_else(|| Error::ZoneNotFound(name.to_string()))
    }

    async fn list_records(&self, zone_id: &str, filter: &RecordFilter) -> Result<Vec<DnsRecord>> {
        let url = format!("{CLOUDFLARE_API_BASE}/zones/{zone_id}/dns_records");
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(record_type) = &filter.record_type {
            query.push(("type", record_type));
        }
        if let Some(name) = &filter.name {
            query.push(("name", name));
        }
        let request = self.request(reqwest::Method::GET, &url).query(&query);

        self.dispatch(request, "record listing").await
    }

    async fn create_record(&self, zone_id: &str, record: &NewRecord) -> Result<DnsRecord> {
        tracing::debug!("creating {} record {}", record.record_type, record.name);
        let url = format!("{CLOUDFLARE_API_BASE}/zones/{zone_id}/dns_records");
        let request = self.request(reqwest::Method::POST, &url).json(record);

        self.dispatch(request, "record creation").await
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        update: &RecordUpdate,
    ) -> Result<DnsRecord> {
        tracing::debug!("updating record {} ({})", record_id, update.name);
        let url = format!("{CLOUDFLARE_API_BASE}/zones/{zone_id}/dns_records/{record_id}");
        let request = self.request(reqwest::Method::PUT, &url).json(update);

        self.dispatch(request, "record update").await
    }

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<()> {
        tracing::debug!("deleting record {}", record_id);
        let url = format!("{CLOUDFLARE_API_BASE}/zones/{zone_id}/dns_records/{record_id}");
        let request = self.request(reqwest::Method::DELETE, &url);

        let _: DeletedRecord = self.dispatch(request, "record deletion").await?;
        Ok(())
    }
}

/// Factory used by the session to build the handle on first use
pub struct CloudflareFactory;

impl ApiFactory for CloudflareFactory {
    fn connect(&self, email: &str, api_key: &str) -> Result<Box<dyn DnsApi>> {
        Ok(Box::new(CloudflareApi::new(email, api_key)?))
    }
}
