//! The student identification number (NIM).
//!
//! `Nim` is the natural unique key of a student record. The newtype prevents
//! accidental mixing of raw strings and record identifiers, and guarantees
//! the value is trimmed and non-empty when constructed through the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated student identification number.
///
/// Serialized transparently as a plain string, so imported data keeps its
/// original shape. Validation applies to values entered at the CLI boundary;
/// imported records are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nim(String);

impl Nim {
    /// Create a new NIM, trimming surrounding whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, NimError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(NimError::Empty);
        }
        Ok(Self(value))
    }

    /// Get the NIM as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Nim {
    type Err = NimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Error type for NIM validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NimError {
    #[error("NIM cannot be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nim_creation() {
        let nim = Nim::new("2110511001").unwrap();
        assert_eq!(nim.as_str(), "2110511001");
    }

    #[test]
    fn test_nim_trims_whitespace() {
        let nim = Nim::new("  A1  ").unwrap();
        assert_eq!(nim.as_str(), "A1");
    }

    #[test]
    fn test_empty_nim_rejected() {
        assert!(Nim::new("").is_err());
        assert!(Nim::new("   ").is_err());
    }

    #[test]
    fn test_nim_parse_roundtrip() {
        let nim: Nim = "A1".parse().unwrap();
        assert_eq!(nim.to_string(), "A1");
    }

    #[test]
    fn test_nim_serde_transparent() {
        let nim = Nim::new("A1").unwrap();
        let json = serde_json::to_string(&nim).unwrap();
        assert_eq!(json, "\"A1\"");
    }
}
