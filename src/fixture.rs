//! Declarative fixtures
//!
//! Read payloads and fail sequences can be described in a TOML or JSON file
//! instead of being assembled in code:
//!
//! ```toml
//! [[reads]]
//! resource = { UserInfo = "AS" }
//! payload = "xx"
//!
//! [[fail_sequences]]
//! resource = { UserInfo = "AS" }
//! outcomes = [true, true, false]
//! ```
//!
//! The resource key type decides how `resource` is spelled; the example uses
//! an externally tagged enum.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::mock::{FailSequences, MockStore};
use crate::resource::ResourceKey;

/// Read payload as written in a fixture file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// UTF-8 text, stored as its bytes
    Text(String),
    /// Raw byte values
    Bytes(Vec<u8>),
    /// Hex-encoded bytes: `{ hex = "c3a9" }`
    Hex { hex: String },
}

impl Payload {
    /// Decode into the bytes a reader returns
    pub fn to_bytes(&self) -> Result<Vec<u8>, FixtureError> {
        match self {
            Payload::Text(text) => Ok(text.as_bytes().to_vec()),
            Payload::Bytes(bytes) => Ok(bytes.clone()),
            Payload::Hex { hex: encoded } => hex::decode(encoded).map_err(|e| {
                FixtureError::ParseError(format!("invalid hex payload {:?}: {}", encoded, e))
            }),
        }
    }
}

/// One read fixture entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadFixture<K> {
    pub resource: K,
    pub payload: Payload,
}

/// One fail sequence entry (`true` = succeed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailScript<K> {
    pub resource: K,
    pub outcomes: Vec<bool>,
}

/// Complete fixture for one test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture<K> {
    #[serde(default = "Vec::new")]
    pub reads: Vec<ReadFixture<K>>,
    #[serde(default = "Vec::new")]
    pub fail_sequences: Vec<FailScript<K>>,
}

impl<K> Default for Fixture<K> {
    fn default() -> Self {
        Self {
            reads: Vec::new(),
            fail_sequences: Vec::new(),
        }
    }
}

impl<K: ResourceKey + DeserializeOwned> Fixture<K> {
    /// Parse a TOML fixture
    pub fn from_toml_str(input: &str) -> Result<Self, FixtureError> {
        toml::from_str(input).map_err(|e| FixtureError::ParseError(e.to_string()))
    }

    /// Parse a JSON fixture
    pub fn from_json_str(input: &str) -> Result<Self, FixtureError> {
        serde_json::from_str(input).map_err(|e| FixtureError::ParseError(e.to_string()))
    }

    /// Load a fixture file; `.json` files are parsed as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let content = fs::read_to_string(path)
            .map_err(|e| FixtureError::IoError(format!("{}: {}", path.display(), e)))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::debug!(path = %path.display(), is_json, "loading mock fixture");
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }
}

impl<K: ResourceKey> Fixture<K> {
    /// Read fixtures as a resource -> payload map
    pub fn read_map(&self) -> Result<HashMap<K, Vec<u8>>, FixtureError> {
        let mut reads = HashMap::with_capacity(self.reads.len());
        for entry in &self.reads {
            if reads.insert(entry.resource.clone(), entry.payload.to_bytes()?).is_some() {
                return Err(FixtureError::ValidationError(format!(
                    "duplicate read fixture for {:?}",
                    entry.resource
                )));
            }
        }
        Ok(reads)
    }

    /// Fail sequences as a resource -> outcomes map
    pub fn fail_sequence_map(&self) -> Result<HashMap<K, Vec<bool>>, FixtureError> {
        let mut scripts = HashMap::with_capacity(self.fail_sequences.len());
        for entry in &self.fail_sequences {
            if scripts.insert(entry.resource.clone(), entry.outcomes.clone()).is_some() {
                return Err(FixtureError::ValidationError(format!(
                    "duplicate fail sequence for {:?}",
                    entry.resource
                )));
            }
        }
        Ok(scripts)
    }

    /// Validate the fixture and build a store from it
    pub fn into_store(self) -> Result<MockStore<K>, FixtureError> {
        let reads = self.read_map()?;
        let failures = FailSequences::from_map(&self.fail_sequence_map()?);
        Ok(MockStore::new(reads, failures))
    }
}

/// Fixture loading errors
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
