//! Mock I/O errors
//!
//! Every error the mock produces is surfaced to the caller verbatim. Nothing
//! is retried or swallowed inside the mock.

use std::fmt::Debug;

/// Coarse classification of a [`MockIoError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Read of a resource with no fixture
    NotFound,
    /// Write refused by the resource's fail sequence
    WriteRejected,
}

impl ErrorKind {
    /// Stable string form, used as the `kind` field of log events
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::WriteRejected => "WRITE_REJECTED",
        }
    }
}

/// Errors returned by the mock reader and writer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockIoError {
    /// No read fixture exists for `resource`
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Scripted failure on the `attempt`-th write to `resource` (1-based)
    #[error("Write rejected for {resource} (attempt {attempt})")]
    WriteRejected { resource: String, attempt: usize },
}

impl MockIoError {
    pub(crate) fn not_found<K: Debug>(resource: &K) -> Self {
        MockIoError::NotFound {
            resource: format!("{:?}", resource),
        }
    }

    pub(crate) fn write_rejected<K: Debug>(resource: &K, attempt: usize) -> Self {
        MockIoError::WriteRejected {
            resource: format!("{:?}", resource),
            attempt,
        }
    }

    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MockIoError::NotFound { .. } => ErrorKind::NotFound,
            MockIoError::WriteRejected { .. } => ErrorKind::WriteRejected,
        }
    }

    /// True for [`MockIoError::NotFound`]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// True for [`MockIoError::WriteRejected`]
    pub fn is_write_rejected(&self) -> bool {
        self.kind() == ErrorKind::WriteRejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MockIoError::not_found(&"user/AS");
        assert_eq!(err.to_string(), "Resource not found: \"user/AS\"");

        let err = MockIoError::write_rejected(&42u32, 3);
        assert_eq!(err.to_string(), "Write rejected for 42 (attempt 3)");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(MockIoError::not_found(&1).kind(), ErrorKind::NotFound);
        assert!(MockIoError::write_rejected(&1, 1).is_write_rejected());
        assert!(!MockIoError::write_rejected(&1, 1).is_not_found());
        assert_eq!(ErrorKind::WriteRejected.as_str(), "WRITE_REJECTED");
    }
}
