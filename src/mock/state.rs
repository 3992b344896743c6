//! Mock Store
//!
//! Holds the read fixtures and the write log for one mock instance. The read
//! fixtures never change after construction and are shared without locking.
//! Everything the write path mutates sits behind a single mutex so that
//! consuming a scripted outcome and appending the payload happen atomically.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::MockIoError;
use crate::resource::ResourceKey;

use super::failure::{FailSequences, Outcome};
use super::reader::MockReader;
use super::writer::MockWriter;

/// Mutable write-side state
#[derive(Debug)]
pub(crate) struct WriteLog<K> {
    /// Successfully written payloads, in call order, per resource
    history: HashMap<K, Vec<Vec<u8>>>,
    /// Resources in the order of their first successful write
    written: Vec<K>,
    /// Write attempts per resource, successful or not
    attempts: HashMap<K, usize>,
    failures: FailSequences<K>,
}

impl<K: ResourceKey> WriteLog<K> {
    fn new(failures: FailSequences<K>) -> Self {
        Self {
            history: HashMap::new(),
            written: Vec::new(),
            attempts: HashMap::new(),
            failures,
        }
    }

    fn write(&mut self, payload: &[u8], resource: &K) -> Result<(), MockIoError> {
        let attempt = {
            let count = self.attempts.entry(resource.clone()).or_insert(0);
            *count += 1;
            *count
        };

        match self.failures.next_outcome(resource) {
            Outcome::Fail => {
                let err = MockIoError::write_rejected(resource, attempt);
                tracing::debug!(
                    ?resource,
                    attempt,
                    kind = err.kind().as_str(),
                    "mock write rejected by fail sequence"
                );
                Err(err)
            }
            Outcome::Succeed => {
                let entries = self.history.entry(resource.clone()).or_default();
                entries.push(payload.to_vec());
                if entries.len() == 1 {
                    self.written.push(resource.clone());
                }
                tracing::debug!(
                    ?resource,
                    attempt,
                    len = payload.len(),
                    stored = entries.len(),
                    "mock write stored"
                );
                Ok(())
            }
        }
    }
}

/// Shared state behind a mock reader/writer pair
///
/// Cloning is cheap and yields a handle to the same store.
#[derive(Debug)]
pub struct MockStore<K> {
    reads: Arc<HashMap<K, Vec<u8>>>,
    log: Arc<Mutex<WriteLog<K>>>,
}

impl<K> Clone for MockStore<K> {
    fn clone(&self) -> Self {
        Self {
            reads: Arc::clone(&self.reads),
            log: Arc::clone(&self.log),
        }
    }
}

impl<K: ResourceKey> Default for MockStore<K> {
    fn default() -> Self {
        Self::new(HashMap::new(), FailSequences::new())
    }
}

impl<K: ResourceKey> MockStore<K> {
    /// Create a store from read fixtures and write outcome scripts
    pub fn new(reads: HashMap<K, Vec<u8>>, failures: FailSequences<K>) -> Self {
        Self {
            reads: Arc::new(reads),
            log: Arc::new(Mutex::new(WriteLog::new(failures))),
        }
    }

    /// Create a store whose fail sequences are copied from `scripts`
    pub fn with_fail_sequences(
        reads: HashMap<K, Vec<u8>>,
        scripts: &HashMap<K, Vec<bool>>,
    ) -> Self {
        Self::new(reads, FailSequences::from_map(scripts))
    }

    /// Blocking reader over this store
    pub fn reader(&self) -> MockReader<K> {
        MockReader::from_store(self.clone())
    }

    /// Blocking writer over this store
    pub fn writer(&self) -> MockWriter<K> {
        MockWriter::from_store(self.clone())
    }

    pub(crate) fn read(&self, resource: &K) -> Result<Vec<u8>, MockIoError> {
        match self.reads.get(resource) {
            Some(payload) => {
                tracing::trace!(?resource, len = payload.len(), "mock read hit");
                Ok(payload.clone())
            }
            None => {
                let err = MockIoError::not_found(resource);
                tracing::trace!(?resource, kind = err.kind().as_str(), "mock read miss");
                Err(err)
            }
        }
    }

    pub(crate) fn write(&self, payload: &[u8], resource: &K) -> Result<(), MockIoError> {
        self.lock_log().write(payload, resource)
    }

    // === Inspection for test assertions ===

    /// Payloads successfully written to `resource`, oldest first
    pub fn history(&self, resource: &K) -> Vec<Vec<u8>> {
        self.lock_log()
            .history
            .get(resource)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of write attempts against `resource`, including rejected ones
    pub fn attempts(&self, resource: &K) -> usize {
        self.lock_log().attempts.get(resource).copied().unwrap_or(0)
    }

    /// Scripted outcomes not yet consumed for `resource`
    pub fn remaining_outcomes(&self, resource: &K) -> usize {
        self.lock_log().failures.remaining(resource)
    }

    /// Resources with at least one successful write, in order of their
    /// first successful write
    pub fn written_resources(&self) -> Vec<K> {
        self.lock_log().written.clone()
    }

    /// True when every scripted outcome has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.lock_log().failures.is_exhausted()
    }

    /// Whether a read fixture exists for `resource`
    pub fn has_fixture(&self, resource: &K) -> bool {
        self.reads.contains_key(resource)
    }

    fn lock_log(&self) -> MutexGuard<'_, WriteLog<K>> {
        // Each mutation is a single insert or push, so the log is consistent
        // even if a holder panicked.
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MockStore<&'static str> {
        let mut reads = HashMap::new();
        reads.insert("user", b"xx".to_vec());
        MockStore::new(reads, FailSequences::new().with_script("user", [true, false]))
    }

    #[test]
    fn test_read_hit_and_miss() {
        let store = store();
        assert_eq!(store.read(&"user").unwrap(), b"xx".to_vec());
        assert!(store.read(&"artist").unwrap_err().is_not_found());
        assert!(store.has_fixture(&"user"));
        assert!(!store.has_fixture(&"artist"));
    }

    #[test]
    fn test_rejected_write_is_not_stored() {
        let store = store();
        store.write(b"a", &"user").unwrap();
        let err = store.write(b"b", &"user").unwrap_err();
        assert_eq!(
            err,
            MockIoError::WriteRejected {
                resource: "\"user\"".to_string(),
                attempt: 2
            }
        );
        store.write(b"c", &"user").unwrap();

        assert_eq!(store.history(&"user"), vec![b"a".to_vec(), b"c".to_vec()]);
        assert_eq!(store.attempts(&"user"), 3);
        assert_eq!(store.remaining_outcomes(&"user"), 0);
    }

    #[test]
    fn test_writes_do_not_touch_read_fixtures() {
        let store = store();
        store.write(b"overwritten?", &"user").unwrap();
        store.write(b"new", &"artist").unwrap();

        assert_eq!(store.read(&"user").unwrap(), b"xx".to_vec());
        assert!(store.read(&"artist").is_err());
    }

    #[test]
    fn test_empty_payload_is_valid() {
        let store: MockStore<&str> = MockStore::default();
        store.write(b"", &"user").unwrap();
        assert_eq!(store.history(&"user"), vec![Vec::<u8>::new()]);
    }

    #[test]
    fn test_clones_share_state() {
        let store = store();
        let other = store.clone();
        other.write(b"a", &"artist").unwrap();

        assert_eq!(store.history(&"artist"), vec![b"a".to_vec()]);
        assert_eq!(store.written_resources(), vec!["artist"]);
    }

    #[test]
    fn test_written_resources_follow_first_write_order() {
        let store: MockStore<&str> = MockStore::new(
            HashMap::new(),
            FailSequences::new().with_script("a", [false]),
        );
        store.write(b"1", &"c").unwrap();
        assert!(store.write(b"2", &"a").is_err());
        store.write(b"3", &"b").unwrap();
        store.write(b"4", &"c").unwrap();
        store.write(b"5", &"a").unwrap();

        assert_eq!(store.written_resources(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_written_resources_order_is_stable_across_stores() {
        for _ in 0..20 {
            let store: MockStore<&str> = MockStore::default();
            for key in ["c", "a", "b"] {
                store.write(b"x", &key).unwrap();
            }
            assert_eq!(store.written_resources(), vec!["c", "a", "b"]);
        }
    }

    #[test]
    fn test_store_exhaustion_tracks_scripts() {
        let store = store();
        assert!(!store.is_exhausted());
        store.write(b"a", &"user").unwrap();
        assert!(!store.is_exhausted());
        assert!(store.write(b"b", &"user").is_err());
        assert!(store.is_exhausted());
        assert_eq!(store.remaining_outcomes(&"user"), 0);
    }

    #[test]
    fn test_history_of_unknown_resource_is_empty() {
        let store = store();
        assert!(store.history(&"nobody").is_empty());
        assert_eq!(store.attempts(&"nobody"), 0);
    }
}
