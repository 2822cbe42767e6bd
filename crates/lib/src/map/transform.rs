//! Pure map transforms: slicing, filtering, merging, reducing.
//!
//! Every operation here allocates and returns a new [`Map`], leaving the
//! receiver untouched. Iteration order over entries is unspecified, so
//! callbacks must not depend on visit order.

use crate::map::Map;
use crate::value::Value;

impl Map {
    /// Returns a new map containing only the given keys. Keys not present in
    /// the receiver are skipped. Opposite of [`Map::except`].
    ///
    /// ```
    /// # use dynmap::Map;
    /// let mut map = Map::new();
    /// map.insert("cake", "is a lie");
    /// map.insert("beer", "free");
    /// map.insert("count", 10);
    ///
    /// let sliced = map.slice(["cake", "count"]);
    /// assert_eq!(sliced.len(), 2);
    /// assert!(!sliced.contains_key("beer"));
    /// ```
    pub fn slice<I, S>(&self, keys: I) -> Map
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Map::new();
        for key in keys {
            let key = key.as_ref();
            if let Some(value) = self.entries.get(key) {
                out.entries.insert(key.to_string(), value.clone());
            }
        }
        out
    }

    /// Returns a new map without the given keys. Opposite of [`Map::slice`].
    pub fn except<I, S>(&self, keys: I) -> Map
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = self.clone();
        for key in keys {
            out.entries.remove(key.as_ref());
        }
        out
    }

    /// Merges another map into this one, returning a new map. On key
    /// collisions the other map's value wins.
    ///
    /// ```
    /// # use dynmap::Map;
    /// let mut base = Map::new();
    /// base.insert("a", 10);
    /// base.insert("c", 3);
    ///
    /// let mut incoming = Map::new();
    /// incoming.insert("a", 1);
    /// incoming.insert("b", 2);
    ///
    /// let merged = base.merge(&incoming);
    /// assert_eq!(merged.get_i64("a"), Ok(1)); // new wins
    /// assert_eq!(merged.get_i64("b"), Ok(2));
    /// assert_eq!(merged.get_i64("c"), Ok(3));
    /// ```
    pub fn merge(&self, other: &Map) -> Map {
        self.merge_with(other, |_, _, new| new.clone())
    }

    /// Merges another map into this one with a custom collision policy,
    /// returning a new map. The policy sees the key, the receiver's value
    /// and the other map's value; non-colliding keys pass through untouched.
    pub fn merge_with<F>(&self, other: &Map, mut merge: F) -> Map
    where
        F: FnMut(&str, &Value, &Value) -> Value,
    {
        let mut out = self.clone();
        for (key, new) in &other.entries {
            let merged = match out.entries.get(key) {
                Some(old) => merge(key, old, new),
                None => new.clone(),
            };
            out.entries.insert(key.clone(), merged);
        }
        out
    }

    /// Returns a new map keeping only the entries for which the predicate
    /// returns true. Opposite of [`Map::reject`].
    pub fn select<F>(&self, mut keep: F) -> Map
    where
        F: FnMut(&str, &Value) -> bool,
    {
        self.entries
            .iter()
            .filter(|(key, value)| keep(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns a new map dropping the entries for which the predicate returns
    /// true. Opposite of [`Map::select`].
    pub fn reject<F>(&self, mut drop: F) -> Map
    where
        F: FnMut(&str, &Value) -> bool,
    {
        self.select(|key, value| !drop(key, value))
    }

    /// Folds all entries into an accumulator. For each entry the closure
    /// receives the accumulator from the previous step and the key-value
    /// pair; its result feeds the next step.
    ///
    /// ```
    /// # use dynmap::Map;
    /// let mut map = Map::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    /// map.insert("c", 3);
    ///
    /// let total = map.reduce(0, |acc, _key, value| acc + value.to_i64().unwrap_or(0));
    /// assert_eq!(total, 6);
    /// ```
    pub fn reduce<A, F>(&self, initial: A, mut fold: F) -> A
    where
        F: FnMut(A, &str, &Value) -> A,
    {
        let mut acc = initial;
        for (key, value) in &self.entries {
            acc = fold(acc, key, value);
        }
        acc
    }

    /// Returns references to the values for the given keys, in the order the
    /// keys are given. Missing keys are skipped.
    pub fn values_at<I, S>(&self, keys: I) -> Vec<&Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .filter_map(|key| self.entries.get(key.as_ref()))
            .collect()
    }
}
