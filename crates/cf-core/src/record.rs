//! DNS record types
//!
//! Records are owned entirely by the remote provider; these types exist
//! only for the duration of a single list/add/update/delete call and are
//! never cached locally. The serde derives match the Cloudflare v4 wire
//! format so the API crate can decode payloads directly.

use serde::{Deserialize, Serialize};

/// Cloudflare's sentinel TTL meaning "automatic"
pub const TTL_AUTOMATIC: u32 = 1;

/// A DNS record as returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Opaque provider-assigned record identifier
    pub id: String,
    /// Record type (A, AAAA, CNAME, TXT, ...)
    #[serde(rename = "type")]
    pub record_type: String,
    /// Fully qualified record name
    pub name: String,
    /// Record content (address, target, text, ...)
    pub content: String,
    /// Time-to-live in seconds; 1 means automatic
    pub ttl: u32,
    /// Whether the record is proxied through the provider's edge
    #[serde(default)]
    pub proxied: bool,
}

/// Payload for creating a record
///
/// New records always get the automatic TTL and proxying disabled.
#[derive(Debug, Clone, Serialize)]
pub struct NewRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub proxied: bool,
}

impl NewRecord {
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
            content: content.into(),
            ttl: TTL_AUTOMATIC,
            proxied: false,
        }
    }
}

/// Payload for updating an existing record in place
#[derive(Debug, Clone, Serialize)]
pub struct RecordUpdate {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
}

/// Optional filters for listing records
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Restrict to one record type
    pub record_type: Option<String>,
    /// Restrict to one record name
    pub name: Option<String>,
}

impl RecordFilter {
    /// Filter on both type and name
    pub fn type_and_name(record_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            record_type: Some(record_type.into()),
            name: Some(name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let rec = NewRecord::new("A", "host.example.com", "1.2.3.4");
        assert_eq!(rec.ttl, TTL_AUTOMATIC);
        assert!(!rec.proxied);
    }

    #[test]
    fn test_record_wire_format() {
        let json = r#"{
            "id": "abc123",
            "type": "TXT",
            "name": "foo.example.com",
            "content": "a b c",
            "ttl": 300
        }"#;
        let rec: DnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.record_type, "TXT");
        assert_eq!(rec.content, "a b c");
        assert!(!rec.proxied);
    }
}
