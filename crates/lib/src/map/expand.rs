//! Key expansion: inflating bracket-chained flat keys into nested maps.
//!
//! Web-form-style input arrives as a flat list of raw keys, each holding an
//! ordered list of string values. A raw key is either a plain identifier
//! (`"foo"`) or a bracket chain (`"nested[a][b]"`). Expansion walks the chain
//! segment by segment, creating-or-fetching a nested map at each step, and
//! stores the value under the final segment.
//!
//! This is a population routine, not a query: unlike every other transform in
//! this crate it mutates its target map in place.

use tracing::{debug, warn};

use crate::map::Map;
use crate::value::Value;

impl Map {
    /// Builds a new map by expanding the given raw key / value-list pairs
    /// into an empty map. See [`Map::expand_pairs`].
    pub fn from_pairs<I, K>(pairs: I) -> Map
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: AsRef<str>,
    {
        let mut map = Map::new();
        map.expand_pairs(pairs);
        map
    }

    /// Expands raw key / value-list pairs into this map, in place.
    ///
    /// Raw keys are split on `[` and `]` into an ordered segment path; empty
    /// segments are dropped. Every segment but the last resolves to a nested
    /// map, created on demand. A single-element value list is unwrapped and
    /// stored as scalar text; a multi-element list is stored as an array of
    /// text values.
    ///
    /// The final shape does not depend on the order pairs are processed in,
    /// except for the collision policy below.
    ///
    /// # Collisions
    ///
    /// If an intermediate segment already holds a non-map value, that value
    /// is silently overwritten with a fresh nested map. The original data is
    /// lost; this is accepted by design and is the caller's hazard when
    /// feeding keys that disagree about the shape of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynmap::Map;
    /// let mut map = Map::new();
    /// map.expand_pairs([
    ///     ("foo", vec!["bar".to_string()]),
    ///     ("nested[map]", vec!["what".to_string()]),
    ///     ("nested[even][deeper]", vec!["easy there".to_string()]),
    /// ]);
    ///
    /// assert_eq!(map.get_text("foo"), Ok("bar".to_string()));
    /// let nested = map.get_map("nested")?;
    /// assert_eq!(nested.get_text("map"), Ok("what".to_string()));
    /// assert_eq!(nested.get_map("even")?.get_text("deeper"), Ok("easy there".to_string()));
    /// # Ok::<(), dynmap::MapError>(())
    /// ```
    pub fn expand_pairs<I, K>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: AsRef<str>,
    {
        for (raw_key, values) in pairs {
            let raw_key = raw_key.as_ref();
            let segments: Vec<&str> = raw_key
                .split(['[', ']'])
                .filter(|segment| !segment.is_empty())
                .collect();

            let Some((last, parents)) = segments.split_last() else {
                debug!(key = %raw_key, "skipping raw key with no usable segments");
                continue;
            };

            // Create-or-fetch the nested map at each parent segment. The
            // target map exclusively owns its children, so following the
            // path only ever needs one live mutable reference.
            let mut node: &mut Map = &mut *self;
            for segment in parents {
                let entry = node
                    .entries
                    .entry((*segment).to_string())
                    .or_insert_with(|| Value::Map(Map::new()));
                if !matches!(entry, Value::Map(_)) {
                    warn!(
                        key = %raw_key,
                        segment = %segment,
                        "overwriting non-map value with a nested map during key expansion"
                    );
                    *entry = Value::Map(Map::new());
                }
                node = match entry {
                    Value::Map(child) => child,
                    _ => unreachable!("intermediate segment was just replaced with a map"),
                };
            }

            node.entries
                .insert((*last).to_string(), collapse_values(values));
        }
    }

    /// Zips a key list with a value list into this map, in place. Keys
    /// beyond the end of the value list (and values beyond the end of the
    /// key list) are dropped.
    ///
    /// ```
    /// # use dynmap::{Map, Value};
    /// let mut map = Map::new();
    /// map.extend_from_keys_values(
    ///     ["first_name", "age", "extra"],
    ///     [Value::Text("bob".to_string()), Value::Int(30)],
    /// );
    ///
    /// assert_eq!(map.get_text("first_name"), Ok("bob".to_string()));
    /// assert_eq!(map.get_i64("age"), Ok(30));
    /// assert!(map.get_text("extra").is_err_and(|e| e.is_absent()));
    /// ```
    pub fn extend_from_keys_values<IK, K, IV, V>(&mut self, keys: IK, values: IV)
    where
        IK: IntoIterator<Item = K>,
        K: Into<String>,
        IV: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        for (key, value) in keys.into_iter().zip(values) {
            self.entries.insert(key.into(), value.into());
        }
    }
}

/// Applies the single-vs-multi unwrapping rule to a raw value list.
fn collapse_values(mut values: Vec<String>) -> Value {
    if values.len() == 1 {
        return Value::Text(values.swap_remove(0));
    }
    Value::Array(values.into_iter().map(Value::Text).collect())
}
