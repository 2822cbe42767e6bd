//! Key expansion tests: bracket-chained form input into nested maps.

use dynmap::{Map, Value};

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn expands_form_input_into_nested_maps() {
    let mut map = Map::new();
    map.expand_pairs([
        ("foo", owned(&["bar"])),
        ("hello", owned(&["bar", "chomp", "bit"])),
        ("nested[map]", owned(&["what"])),
        ("nested[is]", owned(&["it"])),
        ("nested[1]", owned(&["this is one", "two"])),
        ("nested[even][deeper]", owned(&["easy there"])),
    ]);

    // Single-element lists unwrap to scalars, longer lists stay arrays.
    assert_eq!(map.get_text("foo"), Ok("bar".to_string()));
    assert_eq!(
        map.get_text_array("hello"),
        Ok(owned(&["bar", "chomp", "bit"]))
    );

    let nested = map.get_map("nested").unwrap();
    assert_eq!(nested.get_text("map"), Ok("what".to_string()));
    assert_eq!(nested.get_text("is"), Ok("it".to_string()));
    assert_eq!(
        nested.get_text_array("1"),
        Ok(owned(&["this is one", "two"]))
    );

    let deeper = nested.get_map("even").unwrap();
    assert_eq!(deeper.get_text("deeper"), Ok("easy there".to_string()));
}

#[test]
fn from_pairs_builds_a_fresh_map() {
    let map = Map::from_pairs([("a[b]", owned(&["v"]))]);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get_map("a").unwrap().get_text("b"), Ok("v".to_string()));
}

#[test]
fn deep_chains_create_every_level() {
    let map = Map::from_pairs([("a[b][c][d]", owned(&["bottom"]))]);

    let level = map.get_map("a").unwrap();
    let level = level.get_map("b").unwrap();
    let level = level.get_map("c").unwrap();
    assert_eq!(level.get_text("d"), Ok("bottom".to_string()));
}

#[test]
fn scalar_intermediate_is_overwritten_by_nested_map() {
    let mut map = Map::new();
    map.expand_pairs([("k", owned(&["scalar"]))]);
    assert_eq!(map.get_text("k"), Ok("scalar".to_string()));

    // The scalar under "k" is discarded to make room for the subtree.
    map.expand_pairs([("k[sub]", owned(&["nested"]))]);
    let k = map.get_map("k").unwrap();
    assert_eq!(k.get_text("sub"), Ok("nested".to_string()));
}

#[test]
fn plain_key_overwrites_existing_subtree() {
    // The mirror image of the collision above: a later plain write wins.
    let mut map = Map::new();
    map.expand_pairs([("k[sub]", owned(&["nested"]))]);
    map.expand_pairs([("k", owned(&["scalar"]))]);
    assert_eq!(map.get_text("k"), Ok("scalar".to_string()));
}

#[test]
fn shape_does_not_depend_on_sibling_order() {
    let forward = Map::from_pairs([
        ("nested[a]", owned(&["1"])),
        ("nested[b][c]", owned(&["2"])),
    ]);
    let reversed = Map::from_pairs([
        ("nested[b][c]", owned(&["2"])),
        ("nested[a]", owned(&["1"])),
    ]);
    assert_eq!(forward, reversed);
}

#[test]
fn expansion_populates_in_place() {
    let mut map = Map::new();
    map.insert("existing", 1);
    map.expand_pairs([("added", owned(&["value"]))]);

    // Unlike the pure transforms, expansion extends the receiver itself.
    assert_eq!(map.len(), 2);
    assert_eq!(map.get_i64("existing"), Ok(1));
}

#[test]
fn zips_keys_with_values() {
    let mut map = Map::new();
    map.extend_from_keys_values(
        ["first_name", "last_name", "address", "age", "extra"],
        [
            Value::Text("bob".to_string()),
            Value::Text("foobar".to_string()),
            Value::Text("123 Main St".to_string()),
            Value::Int(30),
        ],
    );

    assert_eq!(map.get_text("last_name"), Ok("foobar".to_string()));
    assert_eq!(map.get_i64("age"), Ok(30));

    // "extra" has no value to pair with and is dropped.
    assert!(map.get_text("extra").is_err_and(|e| e.is_absent()));
}
