//! Resource keys
//!
//! The naming scheme for resources belongs to the code under test. The mock
//! only needs to compare, hash, clone and print keys, and to move them across
//! threads for the concurrent operations.

use std::fmt::Debug;
use std::hash::Hash;

/// Bound for any type usable as a resource key
pub trait ResourceKey: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> ResourceKey for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}
