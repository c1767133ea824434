//! Core type definitions using newtype patterns for type safety.
//!
//! These types keep record identifiers and enumerated form fields distinct
//! from raw strings at the points where input enters the system.

mod fields;
mod nim;

pub use fields::{BloodGroup, Gender, Religion, StudyProgram};
pub use nim::{Nim, NimError};
