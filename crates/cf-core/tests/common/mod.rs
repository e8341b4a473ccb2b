//! Test doubles and helpers for the dispatch and handler contract tests
//!
//! `MockDnsApi` is a call-counting in-memory stand-in for the remote
//! provider: it stores records, assigns IDs, and can be told to fail
//! individual deletions so partial-failure behavior is observable.

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cf_core::error::{Error, Result};
use cf_core::record::{DnsRecord, NewRecord, RecordFilter, RecordUpdate};
use cf_core::session::{Credentials, Session};
use cf_core::traits::{ApiFactory, DnsApi, Prompt};

#[derive(Default)]
struct Inner {
    records: Mutex<Vec<DnsRecord>>,
    next_id: AtomicUsize,
    fail_delete_ids: Mutex<HashSet<String>>,
    zone_lookup_calls: AtomicUsize,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

/// In-memory DNS API with per-operation call counters
#[derive(Clone, Default)]
pub struct MockDnsApi {
    inner: Arc<Inner>,
}

impl MockDnsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly, bypassing the counters
    pub fn seed(&self, record_type: &str, name: &str, content: &str) -> String {
        let id = format!("rec-{}", self.inner.next_id.fetch_add(1, Ordering::SeqCst));
        self.inner.records.lock().unwrap().push(DnsRecord {
            id: id.clone(),
            record_type: record_type.to_string(),
            name: name.to_string(),
            content: content.to_string(),
            ttl: 1,
            proxied: false,
        });
        id
    }

    /// Make every future deletion of `id` fail
    pub fn fail_delete(&self, id: &str) {
        self.inner
            .fail_delete_ids
            .lock()
            .unwrap()
            .insert(id.to_string());
    }

    pub fn records(&self) -> Vec<DnsRecord> {
        self.inner.records.lock().unwrap().clone()
    }

    pub fn zone_lookup_calls(&self) -> usize {
        self.inner.zone_lookup_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.inner.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.inner.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.inner.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.inner.delete_calls.load(Ordering::SeqCst)
    }

    /// Total remote calls of any kind
    pub fn total_calls(&self) -> usize {
        self.zone_lookup_calls()
            + self.list_calls()
            + self.create_calls()
            + self.update_calls()
            + self.delete_calls()
    }
}

#[async_trait]
impl DnsApi for MockDnsApi {
    async fn zone_id_by_name(&self, name: &str) -> Result<String> {
        self.inner.zone_lookup_calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("zone-{name}"))
    }

    async fn list_records(&self, _zone_id: &str, filter: &RecordFilter) -> Result<Vec<DnsRecord>> {
        self.inner.list_calls.fetch_add(1, Ordering::SeqCst);
        let records = self.inner.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| {
                filter
                    .record_type
                    .as_ref()
                    .is_none_or(|t| &r.record_type == t)
                    && filter.name.as_ref().is_none_or(|n| &r.name == n)
            })
            .cloned()
            .collect())
    }

    async fn create_record(&self, _zone_id: &str, record: &NewRecord) -> Result<DnsRecord> {
        self.inner.create_calls.fetch_add(1, Ordering::SeqCst);
        let id = format!("rec-{}", self.inner.next_id.fetch_add(1, Ordering::SeqCst));
        let created = DnsRecord {
            id,
            record_type: record.record_type.clone(),
            name: record.name.clone(),
            content: record.content.clone(),
            ttl: record.ttl,
            proxied: record.proxied,
        };
        self.inner.records.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_record(
        &self,
        _zone_id: &str,
        record_id: &str,
        update: &RecordUpdate,
    ) -> Result<DnsRecord> {
        self.inner.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut records = self.inner.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| Error::api(format!("no such record: {record_id}")))?;
        record.record_type = update.record_type.clone();
        record.name = update.name.clone();
        record.content = update.content.clone();
        record.ttl = update.ttl;
        Ok(record.clone())
    }

    async fn delete_record(&self, _zone_id: &str, record_id: &str) -> Result<()> {
        self.inner.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self
            .inner
            .fail_delete_ids
            .lock()
            .unwrap()
            .contains(record_id)
        {
            return Err(Error::api("simulated deletion failure"));
        }
        let mut records = self.inner.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != record_id);
        if records.len() == before {
            return Err(Error::api(format!("no such record: {record_id}")));
        }
        Ok(())
    }
}

/// Factory handing out clones of one shared mock
pub struct MockFactory {
    api: MockDnsApi,
}

impl MockFactory {
    pub fn new(api: MockDnsApi) -> Self {
        Self { api }
    }
}

impl ApiFactory for MockFactory {
    fn connect(&self, _email: &str, _api_key: &str) -> Result<Box<dyn DnsApi>> {
        Ok(Box::new(self.api.clone()))
    }
}

/// Prompt that replays scripted answers and records every prompt shown
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    shown: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompt {
    pub fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            shown: Arc::default(),
        }
    }

    /// Shared handle onto the prompts shown, still readable after the
    /// prompt itself has moved into a session
    #[allow(dead_code)]
    pub fn shown(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.shown)
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.shown.lock().unwrap().push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| Error::Io(std::io::Error::other("no scripted answer")))
    }

    fn read_hidden(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)
    }
}

/// Full set of credentials, so no prompting is needed
pub fn full_credentials() -> Credentials {
    Credentials {
        email: Some("user@example.com".to_string()),
        api_key: Some("test-key".to_string()),
        zone: Some("example.com".to_string()),
    }
}

/// A non-interactive session wired to the given mock
pub fn session_with(api: &MockDnsApi, credentials: Credentials) -> Session {
    Session::new(
        false,
        credentials,
        Box::new(MockFactory::new(api.clone())),
        Box::new(ScriptedPrompt::default()),
    )
}
