//! Concurrent Reader / Writer
//!
//! [`Concurrent`] lifts any blocking reader or writer into its concurrent
//! form. Each call clones a handle to the wrapped implementation, runs the
//! blocking operation on a new thread, and delivers the result through a
//! [`Completion`]. No ordering is imposed between calls; callers that need
//! ordering wait on completions in the order they want.

use std::sync::Arc;

use crate::completion::Completion;
use crate::contract::{ConcurrentReader, ConcurrentWriter, ResourceReader, ResourceWriter};
use crate::error::MockIoError;
use crate::resource::ResourceKey;

/// Concurrent wrapper around a blocking implementation
#[derive(Debug)]
pub struct Concurrent<T> {
    inner: Arc<T>,
}

impl<T> Clone for Concurrent<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Concurrent<T> {
    /// Wrap a blocking implementation
    pub fn new(inner: T) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Blocking implementation the calls are delegated to
    pub fn blocking(&self) -> &T {
        &self.inner
    }
}

impl<K, T> ConcurrentReader<K> for Concurrent<T>
where
    K: ResourceKey,
    T: ResourceReader<K> + Send + Sync + 'static,
{
    fn start_read(&self, resource: K) -> Completion<Result<Vec<u8>, MockIoError>> {
        tracing::debug!(?resource, "dispatching concurrent read");
        let inner = Arc::clone(&self.inner);
        Completion::spawn(move || inner.read(&resource))
    }
}

impl<K, T> ConcurrentWriter<K> for Concurrent<T>
where
    K: ResourceKey,
    T: ResourceWriter<K> + Send + Sync + 'static,
{
    fn start_write(&self, payload: Vec<u8>, resource: K) -> Completion<Result<(), MockIoError>> {
        tracing::debug!(?resource, len = payload.len(), "dispatching concurrent write");
        let inner = Arc::clone(&self.inner);
        Completion::spawn(move || inner.write(&payload, &resource))
    }
}
