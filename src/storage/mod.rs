//! Student record persistence.
//!
//! Provides the JSON-blob-backed record store and the record types it holds.

mod json_store;
mod record;

pub use json_store::RecordStore;
pub use record::{Student, StudentPatch};
