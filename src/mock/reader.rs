//! Blocking Reader

use std::collections::HashMap;

use crate::contract::ResourceReader;
use crate::error::MockIoError;
use crate::resource::ResourceKey;

use super::concurrent::Concurrent;
use super::state::MockStore;

/// Reader that answers from a fixed fixture map
///
/// Reads never mutate state and are idempotent: a resource returns the same
/// payload (or the same `NotFound`) however often it is read.
#[derive(Debug, Clone)]
pub struct MockReader<K> {
    store: MockStore<K>,
}

impl<K: ResourceKey> MockReader<K> {
    /// Create a reader over its own store seeded with `fixtures`
    pub fn new(fixtures: HashMap<K, Vec<u8>>) -> Self {
        MockStore::new(fixtures, Default::default()).reader()
    }

    pub(crate) fn from_store(store: MockStore<K>) -> Self {
        Self { store }
    }

    /// Store this reader answers from
    pub fn store(&self) -> &MockStore<K> {
        &self.store
    }

    /// Concurrent form of this reader, sharing the same fixtures
    pub fn concurrent(&self) -> Concurrent<Self> {
        Concurrent::new(self.clone())
    }
}

impl<K: ResourceKey> ResourceReader<K> for MockReader<K> {
    fn read(&self, resource: &K) -> Result<Vec<u8>, MockIoError> {
        self.store.read(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_is_idempotent() {
        let reader = MockReader::new(HashMap::from([("user", b"xx".to_vec())]));
        for _ in 0..3 {
            assert_eq!(reader.read(&"user"), Ok(b"xx".to_vec()));
        }
    }

    #[test]
    fn test_miss_is_consistent() {
        let reader = MockReader::new(HashMap::from([("user", b"xx".to_vec())]));
        for _ in 0..3 {
            let err = reader.read(&"artist").unwrap_err();
            assert!(err.is_not_found());
        }
    }
}
