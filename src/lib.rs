//! # Simak - A Student Record Manager
//!
//! Simak keeps an ordered list of student records in a single JSON data file
//! and exposes create, read, update, delete, search, bulk-reset, and JSON
//! import/export through a git-like CLI.
//!
//! ## Features
//!
//! - **Unique NIM keys**: duplicate student numbers are rejected at add and
//!   update time
//! - **Persist-on-mutate**: every successful mutation rewrites the data file
//!   before reporting success, so memory and disk never diverge
//! - **Search**: case-insensitive substring match over nama, NIM, and prodi
//! - **JSON import/export**: import wholesale-replaces the record list;
//!   export writes a pretty-printed, date-stamped file
//! - **Multiple Output Formats**: plain text table, JSON, and CSV
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use simak::storage::{RecordStore, Student};
//! use simak::types::Nim;
//!
//! fn main() -> simak::error::StoreResult<()> {
//!     let mut store = RecordStore::open_at("students.json")?;
//!     let nim = Nim::new("2110511001").unwrap();
//!     store.add(Student::new("Budi Santoso", nim, "Laki-laki", "TI"))?;
//!
//!     for student in store.list("budi") {
//!         println!("{} ({})", student.nama, student.nim);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Core type definitions with newtype patterns for type safety
//! - [`storage`] - The record store and record types
//! - [`config`] - Configuration management and application paths
//! - [`error`] - Comprehensive error types
//! - [`cli`] - Subcommand definitions and handlers
//! - [`output`] - Output formatting utilities

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, StoreError};
pub use storage::{RecordStore, Student, StudentPatch};
pub use types::{Nim, StudyProgram};
