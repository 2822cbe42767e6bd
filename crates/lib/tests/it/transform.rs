//! Tests for the pure map transforms. Every operation returns a new map and
//! leaves the receiver untouched.

use std::collections::HashSet;

use dynmap::{Map, Value};

fn pantry() -> Map {
    let mut map = Map::new();
    map.insert("cake", "is a lie");
    map.insert("beer", "free");
    map.insert("count", 10);
    map
}

#[test]
fn slice_keeps_only_named_keys() {
    let map = pantry();
    let sliced = map.slice(["cake", "count", "no_such_key"]);

    assert_eq!(sliced.len(), 2);
    assert_eq!(sliced.get_text("cake"), Ok("is a lie".to_string()));
    assert_eq!(sliced.get_i64("count"), Ok(10));
    assert!(!sliced.contains_key("beer"));

    // The receiver is untouched.
    assert_eq!(map.len(), 3);
}

#[test]
fn except_drops_named_keys() {
    let map = pantry();
    let remaining = map.except(["cake", "count"]);

    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining.get_text("beer"), Ok("free".to_string()));
    assert!(!remaining.contains_key("cake"));
    assert_eq!(map.len(), 3);
}

#[test]
fn slice_and_except_are_complementary() {
    let map = pantry();
    let keys = ["cake", "count"];
    let merged_back = map.slice(keys).merge(&map.except(keys));
    assert_eq!(merged_back, map);
}

#[test]
fn merge_prefers_incoming_values() {
    let mut base = Map::new();
    base.insert("a", 10);
    base.insert("c", 3);

    let mut incoming = Map::new();
    incoming.insert("a", 1);
    incoming.insert("b", 2);

    let merged = base.merge(&incoming);
    assert_eq!(merged.get_i64("a"), Ok(1));
    assert_eq!(merged.get_i64("b"), Ok(2));
    assert_eq!(merged.get_i64("c"), Ok(3));

    // Both sources are untouched.
    assert_eq!(base.get_i64("a"), Ok(10));
    assert_eq!(incoming.len(), 2);
}

#[test]
fn merge_with_custom_collision_policy() {
    let mut base = Map::new();
    base.insert("a", 10);
    base.insert("c", 3);

    let mut incoming = Map::new();
    incoming.insert("a", 1);
    incoming.insert("b", 2);

    // Keep the receiver's value on collision.
    let merged = base.merge_with(&incoming, |_, old, _| old.clone());
    assert_eq!(merged.get_i64("a"), Ok(10));
    assert_eq!(merged.get_i64("b"), Ok(2));

    // Or combine both sides.
    let summed = base.merge_with(&incoming, |_, old, new| {
        Value::Int(old.to_i64().unwrap_or(0) + new.to_i64().unwrap_or(0))
    });
    assert_eq!(summed.get_i64("a"), Ok(11));
    assert_eq!(summed.get_i64("c"), Ok(3));
}

#[test]
fn select_keeps_matching_entries() {
    let map = pantry();
    let selected = map.select(|_, value| value.as_text().is_some());

    assert_eq!(selected.len(), 2);
    assert!(selected.contains_key("cake"));
    assert!(selected.contains_key("beer"));
    assert!(!selected.contains_key("count"));
}

#[test]
fn reject_drops_matching_entries() {
    let map = pantry();
    let rejected = map.reject(|key, _| key.starts_with('b'));

    assert_eq!(rejected.len(), 2);
    assert!(!rejected.contains_key("beer"));
}

#[test]
fn select_and_reject_are_complementary() {
    let map = pantry();
    let is_text = |_: &str, value: &Value| value.as_text().is_some();

    let merged_back = map.select(is_text).merge(&map.reject(is_text));
    assert_eq!(merged_back, map);
}

#[test]
fn reduce_folds_every_entry_once() {
    let mut map = Map::new();
    map.insert("first", 1);
    map.insert("second", 2);
    map.insert("third", 3);

    let total = map.reduce(0i64, |acc, _, value| acc + value.to_i64().unwrap_or(0));
    assert_eq!(total, 6);

    let visited = map.reduce(Vec::new(), |mut acc, key, _| {
        acc.push(key.to_string());
        acc
    });
    assert_eq!(visited.len(), 3);
}

#[test]
fn keys_and_values_enumerate_everything() {
    let mut map = Map::new();
    map.insert("first", 1);
    map.insert("second", 2);
    map.insert("third", 3);

    // Iteration order is unspecified, so only membership is checked.
    let keys: HashSet<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, HashSet::from(["first", "second", "third"]));

    let values: Vec<&Value> = map.values().collect();
    assert_eq!(values.len(), 3);
    assert!(values.contains(&&Value::Int(2)));
}

#[test]
fn values_at_follows_key_order() {
    let mut map = Map::new();
    map.insert("first", 1);
    map.insert("second", 2);
    map.insert("third", 3);

    let picked = map.values_at(["first", "third", "no_such_key"]);
    assert_eq!(picked, vec![&Value::Int(1), &Value::Int(3)]);
}
