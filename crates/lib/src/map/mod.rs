//! The string-keyed, dynamically-typed map and its typed accessors.
//!
//! [`Map`] is the core container: an unordered mapping from exact-match,
//! case-sensitive string keys to [`Value`]s. It is typically built once, from
//! a decoded JSON document or expanded form input, and then read many times
//! through the typed accessors.
//!
//! Every accessor comes in two flavors:
//!
//! * `get_<type>(key)` returns `Result<T, MapError>` and distinguishes all
//!   four failure causes (absent key, explicit null, type mismatch, element
//!   mismatch).
//! * `get_<type>_or(key, default)` returns the caller-supplied default on any
//!   failure, never a zero-value substitute.
//!
//! Accessors never mutate the map; they return freshly-constructed values.

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};

use crate::errors::MapError;
use crate::value::Value;

mod expand;
mod transform;


/// An unordered, dynamically-typed map from string keys to [`Value`]s.
///
/// Keys are unique; later writes overwrite earlier ones. There is no implicit
/// key normalization. The map is an in-memory, unsynchronized structure:
/// concurrent mutation from multiple threads is out of scope and callers must
/// supply external synchronization if they need it.
///
/// # Examples
///
/// ```
/// use dynmap::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("count", 10);
/// map.insert("label", "cake");
///
/// assert_eq!(map.get_i64("count"), Ok(10));
/// assert_eq!(map.get_text_or("missing", "fallback"), "fallback");
/// assert_eq!(map.get("label"), Some(&Value::Text("cake".to_string())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Map {
    entries: HashMap<String, Value>,
}

impl Map {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the map contains the given key (exact match).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts a value under a key, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Gets the raw value for a key (immutable reference).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets the raw value for a key (mutable reference).
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns an iterator over all key-value pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over all key-value pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns an iterator over all values.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns a mutable iterator over all values.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.values_mut()
    }

    /// Looks up a key, mapping absence and explicit null to their causes.
    fn fetch(&self, key: &str) -> Result<&Value, MapError> {
        match self.entries.get(key) {
            None => Err(MapError::KeyAbsent {
                key: key.to_string(),
            }),
            Some(Value::Null) => Err(MapError::NilValue {
                key: key.to_string(),
            }),
            Some(value) => Ok(value),
        }
    }
}

// Typed accessors: the Result flavor carries the failure cause, the `_or`
// flavor trades it for a caller-supplied default.
impl Map {
    /// Retrieves a boolean, coercing with [`Value::to_bool`].
    pub fn get_bool(&self, key: &str) -> Result<bool, MapError> {
        self.fetch(key)?.to_bool()
    }

    /// Retrieves a boolean, or the default on any failure.
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    /// Retrieves a signed integer, coercing with [`Value::to_i64`].
    ///
    /// ```
    /// # use dynmap::{Map, MapError};
    /// let mut map = Map::new();
    /// map.insert("n", "100");
    ///
    /// assert_eq!(map.get_i64("n"), Ok(100));
    /// assert_eq!(
    ///     map.get_i64("missing"),
    ///     Err(MapError::KeyAbsent { key: "missing".to_string() })
    /// );
    /// ```
    pub fn get_i64(&self, key: &str) -> Result<i64, MapError> {
        self.fetch(key)?.to_i64()
    }

    /// Retrieves a signed integer, or the default on any failure.
    pub fn get_i64_or(&self, key: &str, default: i64) -> i64 {
        self.get_i64(key).unwrap_or(default)
    }

    /// Retrieves a float, coercing with [`Value::to_f64`].
    pub fn get_f64(&self, key: &str) -> Result<f64, MapError> {
        self.fetch(key)?.to_f64()
    }

    /// Retrieves a float, or the default on any failure.
    pub fn get_f64_or(&self, key: &str, default: f64) -> f64 {
        self.get_f64(key).unwrap_or(default)
    }

    /// Retrieves a string, coercing with [`Value::to_text`].
    pub fn get_text(&self, key: &str) -> Result<String, MapError> {
        self.fetch(key)?.to_text()
    }

    /// Retrieves a string, or the default on any failure.
    pub fn get_text_or(&self, key: &str, default: impl Into<String>) -> String {
        self.get_text(key).unwrap_or_else(|_| default.into())
    }

    /// Retrieves a raw array of values. Only a stored array qualifies; the
    /// result is a fresh copy.
    pub fn get_array(&self, key: &str) -> Result<Vec<Value>, MapError> {
        match self.fetch(key)? {
            Value::Array(items) => Ok(items.clone()),
            other => Err(MapError::TypeMismatch {
                expected: "array",
                actual: other.kind_name().to_string(),
            }),
        }
    }

    /// Retrieves a raw array, or the default on any failure.
    pub fn get_array_or(&self, key: &str, default: Vec<Value>) -> Vec<Value> {
        self.get_array(key).unwrap_or(default)
    }

    /// Retrieves an array of strings, coercing with [`Value::to_text_array`].
    /// A single failing element aborts the whole conversion.
    pub fn get_text_array(&self, key: &str) -> Result<Vec<String>, MapError> {
        self.fetch(key)?.to_text_array()
    }

    /// Retrieves an array of strings, or the default on any failure.
    pub fn get_text_array_or(&self, key: &str, default: Vec<String>) -> Vec<String> {
        self.get_text_array(key).unwrap_or(default)
    }

    /// Retrieves an array of signed integers, coercing with
    /// [`Value::to_i64_array`].
    pub fn get_i64_array(&self, key: &str) -> Result<Vec<i64>, MapError> {
        self.fetch(key)?.to_i64_array()
    }

    /// Retrieves an array of signed integers, or the default on any failure.
    pub fn get_i64_array_or(&self, key: &str, default: Vec<i64>) -> Vec<i64> {
        self.get_i64_array(key).unwrap_or(default)
    }

    /// Retrieves an array of floats, coercing with [`Value::to_f64_array`].
    pub fn get_f64_array(&self, key: &str) -> Result<Vec<f64>, MapError> {
        self.fetch(key)?.to_f64_array()
    }

    /// Retrieves an array of floats, or the default on any failure.
    pub fn get_f64_array_or(&self, key: &str, default: Vec<f64>) -> Vec<f64> {
        self.get_f64_array(key).unwrap_or(default)
    }

    /// Retrieves a nested map, coercing with [`Value::to_map`].
    pub fn get_map(&self, key: &str) -> Result<Map, MapError> {
        self.fetch(key)?.to_map()
    }

    /// Retrieves a nested map, or the default on any failure.
    pub fn get_map_or(&self, key: &str, default: Map) -> Map {
        self.get_map(key).unwrap_or(default)
    }

    /// Retrieves a timestamp, coercing with [`Value::to_time`]. Text values
    /// are parsed against the fixed format table, first match wins.
    pub fn get_time(&self, key: &str) -> Result<DateTime<FixedOffset>, MapError> {
        self.fetch(key)?.to_time()
    }

    /// Retrieves a timestamp, or the default on any failure.
    pub fn get_time_or(&self, key: &str, default: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        self.get_time(key).unwrap_or(default)
    }

    /// Retrieves a timestamp normalized to UTC, coercing with
    /// [`Value::to_time_utc`].
    pub fn get_time_utc(&self, key: &str) -> Result<DateTime<Utc>, MapError> {
        self.fetch(key)?.to_time_utc()
    }

    /// Retrieves a UTC timestamp, or the default on any failure.
    pub fn get_time_utc_or(&self, key: &str, default: DateTime<Utc>) -> DateTime<Utc> {
        self.get_time_utc(key).unwrap_or(default)
    }
}

// JSON boundary helpers.
impl Map {
    /// Parses a JSON object into a map.
    ///
    /// ```
    /// # use dynmap::Map;
    /// let map = Map::from_json_str(r#"{"flag": true, "level": 464.21}"#)?;
    /// assert_eq!(map.get_bool("flag"), Ok(true));
    /// # Ok::<(), dynmap::Error>(())
    /// ```
    pub fn from_json_str(input: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Renders the map as a JSON object string.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl From<HashMap<String, Value>> for Map {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<Map> for HashMap<String, Value> {
    fn from(map: Map) -> Self {
        map.entries
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Map {
    fn from(object: serde_json::Map<String, serde_json::Value>) -> Self {
        object
            .into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect()
    }
}

impl From<Map> for serde_json::Map<String, serde_json::Value> {
    fn from(map: Map) -> Self {
        map.entries
            .into_iter()
            .map(|(key, value)| (key, serde_json::Value::from(value)))
            .collect()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Value)> for Map {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
