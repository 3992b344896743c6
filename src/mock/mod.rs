//! Mock Reader / Writer Implementation
//!
//! In-memory stand-ins for the resource capability contracts, with scripted
//! failure injection for exercising retry and error paths.
//!
//! # Components
//!
//! - `failure`: per-resource fail sequences, consumed one entry per write
//! - `state`: the shared store (read fixtures + write log)
//! - `reader` / `writer`: blocking operations over the store
//! - `concurrent`: thread-backed wrappers delivering one result per call

mod concurrent;
mod failure;
mod reader;
mod state;
mod writer;

pub use concurrent::Concurrent;
pub use failure::{FailSequences, Outcome};
pub use reader::MockReader;
pub use state::MockStore;
pub use writer::MockWriter;
