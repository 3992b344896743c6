//! Fail-Sequence Registry
//!
//! Per-resource scripts of write outcomes. Each write attempt against a
//! scripted resource consumes the head of its queue; once the queue is empty
//! (or was never configured) every write succeeds.

use std::collections::{HashMap, VecDeque};

use crate::resource::ResourceKey;

/// Outcome of a single write attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Store the payload
    Succeed,
    /// Reject the write and drop the payload
    Fail,
}

impl Outcome {
    /// True for [`Outcome::Succeed`]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeed)
    }
}

impl From<bool> for Outcome {
    fn from(succeed: bool) -> Self {
        if succeed {
            Outcome::Succeed
        } else {
            Outcome::Fail
        }
    }
}

/// Scripted write outcomes, keyed by resource
#[derive(Debug, Clone)]
pub struct FailSequences<K> {
    queues: HashMap<K, VecDeque<Outcome>>,
}

impl<K> Default for FailSequences<K> {
    fn default() -> Self {
        Self {
            queues: HashMap::new(),
        }
    }
}

impl<K: ResourceKey> FailSequences<K> {
    /// Create an empty registry (every write succeeds)
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the caller's scripts into a new registry
    ///
    /// The registry owns its queues; later changes to `scripts` have no effect.
    pub fn from_map(scripts: &HashMap<K, Vec<bool>>) -> Self {
        let queues = scripts
            .iter()
            .map(|(key, outcomes)| {
                let queue = outcomes.iter().copied().map(Outcome::from).collect();
                (key.clone(), queue)
            })
            .collect();
        Self { queues }
    }

    /// Add a script for `resource`, replacing any previous one
    ///
    /// Only usable while building: the registry is moved into a writer
    /// afterwards and cannot be refilled.
    pub fn with_script<I>(mut self, resource: K, outcomes: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let queue = outcomes.into_iter().map(Outcome::from).collect();
        self.queues.insert(resource, queue);
        self
    }

    /// Consume the next scripted outcome for `resource`
    pub(crate) fn next_outcome(&mut self, resource: &K) -> Outcome {
        self.queues
            .get_mut(resource)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Outcome::Succeed)
    }

    /// Number of scripted outcomes still pending for `resource`
    pub fn remaining(&self, resource: &K) -> usize {
        self.queues.get(resource).map_or(0, VecDeque::len)
    }

    /// True when no resource has a pending outcome
    pub fn is_exhausted(&self) -> bool {
        self.queues.values().all(VecDeque::is_empty)
    }
}
