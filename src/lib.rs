//! Resource Mock - deterministic I/O test doubles
//!
//! This crate provides in-memory implementations of a resource-oriented
//! read/write abstraction, in both blocking and concurrent form, with
//! scripted per-resource write failures. Code under test is written against
//! the traits in [`contract`]; tests hand it a [`MockReader`] / [`MockWriter`]
//! (or their [`Concurrent`] wrappers) and then assert on the store.
//!
//! ```
//! use std::collections::HashMap;
//! use resource_mock::{ConcurrentWriter, FailSequences, MockStore, ResourceWriter};
//!
//! let store = MockStore::new(
//!     HashMap::new(),
//!     FailSequences::new().with_script("user/AS", [true, false]),
//! );
//! let writer = store.writer();
//!
//! assert!(writer.write(b"first", &"user/AS").is_ok());
//! assert!(writer.write(b"second", &"user/AS").is_err());
//! assert!(writer.concurrent().start_write(b"third".to_vec(), "user/AS").wait().is_ok());
//!
//! assert_eq!(store.history(&"user/AS"), vec![b"first".to_vec(), b"third".to_vec()]);
//! ```

pub mod completion;
pub mod contract;
pub mod error;
pub mod fixture;
pub mod mock;
pub mod resource;

pub use completion::Completion;
pub use contract::{ConcurrentReader, ConcurrentWriter, ResourceReader, ResourceWriter};
pub use error::{ErrorKind, MockIoError};
pub use fixture::{Fixture, FixtureError, Payload};
pub use mock::{Concurrent, FailSequences, MockReader, MockStore, MockWriter, Outcome};
pub use resource::ResourceKey;
