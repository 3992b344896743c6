//! Capability contracts
//!
//! Code under test depends on these traits rather than on a concrete storage
//! or network client, so the mocks in [`crate::mock`] can stand in for the
//! real implementation.

use crate::completion::Completion;
use crate::error::MockIoError;

/// Blocking read of a resource
pub trait ResourceReader<K> {
    /// Read the full payload stored for `resource`
    fn read(&self, resource: &K) -> Result<Vec<u8>, MockIoError>;
}

/// Blocking write of a resource
pub trait ResourceWriter<K> {
    /// Write `payload` to `resource`
    fn write(&self, payload: &[u8], resource: &K) -> Result<(), MockIoError>;
}

/// Concurrent read of a resource
///
/// The call returns immediately; the read runs on its own thread and its
/// result is delivered exactly once through the returned [`Completion`].
/// There is no way to cancel a read once started.
pub trait ConcurrentReader<K> {
    /// Start reading `resource` and return a handle to the result
    fn start_read(&self, resource: K) -> Completion<Result<Vec<u8>, MockIoError>>;
}

/// Concurrent write of a resource
///
/// Same dispatch model as [`ConcurrentReader`].
pub trait ConcurrentWriter<K> {
    /// Start writing `payload` to `resource` and return a handle to the result
    fn start_write(&self, payload: Vec<u8>, resource: K) -> Completion<Result<(), MockIoError>>;
}

impl<K, T: ResourceReader<K> + ?Sized> ResourceReader<K> for &T {
    fn read(&self, resource: &K) -> Result<Vec<u8>, MockIoError> {
        (**self).read(resource)
    }
}

impl<K, T: ResourceWriter<K> + ?Sized> ResourceWriter<K> for &T {
    fn write(&self, payload: &[u8], resource: &K) -> Result<(), MockIoError> {
        (**self).write(payload, resource)
    }
}
