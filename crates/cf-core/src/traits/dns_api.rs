//! DNS API trait
//!
//! Defines the interface the command handlers use to talk to the remote
//! DNS provider. The concrete Cloudflare implementation lives in the
//! `cf-cloudflare` crate; tests substitute call-counting mocks.
//!
//! Implementations make exactly one HTTP request per method call. There
//! is no retry, no backoff, and no caching here: every command attempts
//! each remote call exactly once and surfaces the provider's error text.

use async_trait::async_trait;

use crate::error::Result;
use crate::record::{DnsRecord, NewRecord, RecordFilter, RecordUpdate};

/// Interface to the remote DNS provider
///
/// Implementations must be usable behind `Arc<dyn DnsApi>` from the
/// session, so they are `Send + Sync` and take `&self`.
#[async_trait]
pub trait DnsApi: Send + Sync {
    /// Resolve a human-readable zone name to the provider's zone ID
    async fn zone_id_by_name(&self, name: &str) -> Result<String>;

    /// List records in a zone, optionally filtered by type and/or name
    async fn list_records(&self, zone_id: &str, filter: &RecordFilter) -> Result<Vec<DnsRecord>>;

    /// Create a new record; duplicates of an existing name+type are allowed
    async fn create_record(&self, zone_id: &str, record: &NewRecord) -> Result<DnsRecord>;

    /// Update an existing record in place
    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        update: &RecordUpdate,
    ) -> Result<DnsRecord>;

    /// Delete a record by its provider-assigned ID
    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<()>;
}

/// Constructs an authenticated API handle from collected credentials
///
/// The session calls this once, the first time a command needs the API;
/// the resulting handle is cached for the life of the process.
pub trait ApiFactory: Send + Sync {
    fn connect(&self, email: &str, api_key: &str) -> Result<Box<dyn DnsApi>>;
}
