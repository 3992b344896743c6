//! Shared test fixtures
//!
//! Provides a resource key type shaped like the ones production code uses
//! (record kind + subject) and paths to the on-disk fixture files.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Resource key used throughout the integration tests
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    UserInfo(String),
    ArtistInfo(String),
    TagInfo(String),
}

pub fn user(name: &str) -> Resource {
    Resource::UserInfo(name.to_string())
}

pub fn artist(name: &str) -> Resource {
    Resource::ArtistInfo(name.to_string())
}

pub fn tag(name: &str) -> Resource {
    Resource::TagInfo(name.to_string())
}

/// Path to a fixture file under tests/fixtures/mock
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/mock")
        .join(name)
}

/// Bytes of a string literal, for terser assertions
pub fn bytes(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}
