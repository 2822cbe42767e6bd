//!
//! Dynmap: ergonomic typed access over dynamically-typed string-keyed maps.
//!
//! This library wraps loosely-structured data, such as a decoded JSON document
//! or a parsed web form, in a [`Map`] that can hand back values of concrete
//! types. It is built around two pieces:
//!
//! * **Coercion** ([`Value`]): every stored value is a tagged union, and each
//!   `to_*` method converts the runtime representation into the requested type
//!   (numbers from strings, strings from numbers, timestamps parsed against a
//!   fixed format table) or reports a typed failure.
//! * **Key expansion** ([`Map::expand_pairs`]): bracket-chained keys like
//!   `"nested[a][b]"` from form-encoded input are inflated into a tree of
//!   nested maps.
//!
//! Around those, [`Map`] carries the usual collection helpers: typed accessors
//! with caller-supplied defaults, and pure `merge`/`slice`/`except`/`select`/
//! `reject`/`reduce` transforms that always allocate a new map.
//!
//! ```
//! use dynmap::Map;
//!
//! let map = Map::from_json_str(r#"{"name":"Alice","age":"30","tags":["a","b"]}"#)?;
//!
//! assert_eq!(map.get_text("name")?, "Alice");
//! assert_eq!(map.get_i64("age")?, 30); // coerced from "30"
//! assert_eq!(map.get_text_array("tags")?, vec!["a", "b"]);
//! assert_eq!(map.get_i64_or("missing", 7), 7);
//! # Ok::<(), dynmap::Error>(())
//! ```
//!
//! The map is a plain in-memory structure with no internal synchronization;
//! callers needing concurrent access must wrap it externally.

pub mod errors;
pub mod map;
pub mod value;

pub use errors::MapError;
pub use map::Map;
pub use value::Value;

/// Result type used throughout the dynmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dynmap library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured access and coercion errors from the map module
    #[error(transparent)]
    Map(errors::MapError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Map(_) => "map",
        }
    }

    /// Check if this error indicates a key was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_absent(),
            _ => false,
        }
    }

    /// Check if this error indicates an explicit null value.
    pub fn is_nil_value(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_nil(),
            _ => false,
        }
    }

    /// Check if this error is a coercion type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_type_mismatch() || map_err.is_element_mismatch(),
            _ => false,
        }
    }

    /// Check if this error came from the JSON boundary.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
