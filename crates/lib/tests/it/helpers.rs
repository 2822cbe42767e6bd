//! Shared fixtures for the integration suite.

use dynmap::Map;

/// A JSON payload exercising every representation the accessors care about:
/// exact-type hits, cross-representation coercions, and failure causes.
pub const SAMPLE_PAYLOAD: &str = r#"
{
 "Name": "John",
 "Hash": { "SubKey": "Value" },
 "Array": [99, 98, 97, 96, 95],
 "Value": 1,
 "Level": 464.21,
 "Flag": true,
 "StringArray": ["1", "a", "2"],
 "MixedStringArray": ["1", "a", 2.9, 100, -3, "foobar"],
 "MixedFloatArray": ["1", 2.9, 100, -3, false],
 "MixedIntArray": ["1", 2.9, 100, -3, false],
 "BadArray": ["ok", {"nested": true}],
 "TimeISO": "2017-07-10T12:13:47Z",
 "TimeRFC1123": "Mon, 10 Jul 2017 12:13:47 GMT",
 "TimeCommonLog": "10/Jul/2017:12:13:47 -0700",
 "TimeZoneName": "2017-07-10 12:13:47 UTC",
 "TimeNumericOffset": "2017-07-10 12:13:47 -0200",
 "TimeOffsetAndZone": "2017-07-10 12:13:47 -0700 PDT",
 "StringAsInt": "100",
 "StringAsFloat": "100.012",
 "StringAsBool": "true",
 "NullValue": null
}
"#;

/// Decodes [`SAMPLE_PAYLOAD`] into a map.
pub fn sample_map() -> Map {
    Map::from_json_str(SAMPLE_PAYLOAD).expect("sample payload is valid JSON")
}
