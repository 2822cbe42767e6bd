//! Error types for map access and value coercion.
//!
//! This module defines the structured error type shared by the coercion engine
//! and the typed map accessors. Every failure is local and recoverable: the
//! `_or` accessors pair each error cause with the caller-supplied default, so
//! callers that ignore the cause still get a well-defined fallback value.

use thiserror::Error;

/// Structured error type for map access and coercion failures.
///
/// Accessors distinguish exactly four causes so callers can branch on *why* a
/// lookup failed rather than just whether it failed:
///
/// - [`MapError::KeyAbsent`]: the key is not present at all
/// - [`MapError::NilValue`]: the key is present but holds an explicit null
/// - [`MapError::TypeMismatch`]: the stored representation cannot be coerced
///   to the requested type (this includes text that fails to parse as the
///   target, with the parse failure folded into `actual`)
/// - [`MapError::ElementTypeMismatch`]: one element of a composite failed to
///   coerce, invalidating the whole conversion
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The requested key does not exist in the map.
    #[error("key does not exist: {key}")]
    KeyAbsent { key: String },

    /// The key exists but holds an explicit null.
    #[error("value for key '{key}' is null")]
    NilValue { key: String },

    /// The stored representation cannot be coerced to the requested type.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: String,
    },

    /// An element of an array failed to coerce to the requested element type.
    /// The whole conversion is aborted; no partial result is produced.
    #[error("element {index} type mismatch: expected {expected}, found {actual}")]
    ElementTypeMismatch {
        index: usize,
        expected: &'static str,
        actual: String,
    },
}

impl MapError {
    /// Check if this error reports a missing key.
    pub fn is_absent(&self) -> bool {
        matches!(self, MapError::KeyAbsent { .. })
    }

    /// Check if this error reports an explicit null value.
    pub fn is_nil(&self) -> bool {
        matches!(self, MapError::NilValue { .. })
    }

    /// Check if this error reports an uncoercible representation.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, MapError::TypeMismatch { .. })
    }

    /// Check if this error reports a failing element inside a composite.
    pub fn is_element_mismatch(&self) -> bool {
        matches!(self, MapError::ElementTypeMismatch { .. })
    }

    /// Get the key if this is a key-related error.
    pub fn key(&self) -> Option<&str> {
        match self {
            MapError::KeyAbsent { key } | MapError::NilValue { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from MapError to the main Error type
impl From<MapError> for crate::Error {
    fn from(err: MapError) -> Self {
        crate::Error::Map(err)
    }
}
