//! Blocking Writer

use std::collections::HashMap;

use crate::contract::ResourceWriter;
use crate::error::MockIoError;
use crate::resource::ResourceKey;

use super::concurrent::Concurrent;
use super::failure::FailSequences;
use super::state::MockStore;

/// Writer that records payloads and follows scripted outcomes
///
/// A write to a resource with a pending scripted outcome consumes it. A
/// `false` entry rejects the write with [`MockIoError::WriteRejected`] and the
/// payload is dropped; anything else appends the payload to the resource's
/// history.
#[derive(Debug, Clone)]
pub struct MockWriter<K> {
    store: MockStore<K>,
}

impl<K: ResourceKey> MockWriter<K> {
    /// Create a writer over its own store, copying the caller's fail sequences
    pub fn new(fail_sequences: &HashMap<K, Vec<bool>>) -> Self {
        MockStore::with_fail_sequences(HashMap::new(), fail_sequences).writer()
    }

    /// Create a writer over its own store with a prepared registry
    pub fn with_failures(failures: FailSequences<K>) -> Self {
        MockStore::new(HashMap::new(), failures).writer()
    }

    pub(crate) fn from_store(store: MockStore<K>) -> Self {
        Self { store }
    }

    /// Store this writer records into
    pub fn store(&self) -> &MockStore<K> {
        &self.store
    }

    /// Payloads successfully written to `resource`, oldest first
    pub fn history(&self, resource: &K) -> Vec<Vec<u8>> {
        self.store.history(resource)
    }

    /// Concurrent form of this writer, sharing the same store
    pub fn concurrent(&self) -> Concurrent<Self> {
        Concurrent::new(self.clone())
    }
}

impl<K: ResourceKey> ResourceWriter<K> for MockWriter<K> {
    fn write(&self, payload: &[u8], resource: &K) -> Result<(), MockIoError> {
        self.store.write(payload, resource)
    }
}
