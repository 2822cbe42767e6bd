//! The coercion engine: cross-representation conversion of [`Value`]s.
//!
//! Each `to_*` method matches exhaustively on the runtime representation and
//! either produces the requested type or a [`MapError`] naming the cause.
//! Coercion never mutates the source value; composite conversions fail
//! atomically, discarding any partially-converted result.

use chrono::{DateTime, FixedOffset, Utc};

use crate::errors::MapError;
use crate::map::Map;
use crate::value::{Value, time};

fn mismatch(expected: &'static str, actual: &Value) -> MapError {
    MapError::TypeMismatch {
        expected,
        actual: actual.kind_name().to_string(),
    }
}

impl Value {
    /// Coerces to a signed 64-bit integer.
    ///
    /// Accepts any stored integer, a float (fractional part truncated), text
    /// holding a base-10 integer, or a boolean (`true` → 1, `false` → 0).
    ///
    /// ```
    /// # use dynmap::Value;
    /// assert_eq!(Value::Float(2.9).to_i64(), Ok(2));
    /// assert_eq!(Value::Text("100".into()).to_i64(), Ok(100));
    /// assert_eq!(Value::Bool(true).to_i64(), Ok(1));
    /// assert!(Value::Text("not a number".into()).to_i64().is_err());
    /// ```
    pub fn to_i64(&self) -> Result<i64, MapError> {
        match self {
            Value::Int(n) => Ok(*n),
            Value::UInt(n) => Ok(*n as i64),
            Value::Float(x) => Ok(*x as i64),
            Value::Text(s) => s.parse().map_err(|err| MapError::TypeMismatch {
                expected: "int",
                actual: format!("unparseable text {s:?} ({err})"),
            }),
            Value::Bool(b) => Ok(i64::from(*b)),
            other => Err(mismatch("int", other)),
        }
    }

    /// Coerces to a 64-bit float.
    ///
    /// Accepts any stored integer or float (widened), text holding a decimal
    /// number, or a boolean (`true` → 1.0, `false` → 0.0).
    pub fn to_f64(&self) -> Result<f64, MapError> {
        match self {
            Value::Int(n) => Ok(*n as f64),
            Value::UInt(n) => Ok(*n as f64),
            Value::Float(x) => Ok(*x),
            Value::Text(s) => s.parse().map_err(|err| MapError::TypeMismatch {
                expected: "float",
                actual: format!("unparseable text {s:?} ({err})"),
            }),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            other => Err(mismatch("float", other)),
        }
    }

    /// Coerces to a string.
    ///
    /// Accepts text (identity), booleans (`"true"`/`"false"`), and numbers.
    /// Floats render as the shortest decimal that round-trips, with no
    /// trailing zeros. There is no catch-all stringification: nulls,
    /// timestamps, arrays and maps are errors, not debug representations.
    ///
    /// ```
    /// # use dynmap::Value;
    /// assert_eq!(Value::Float(464.21).to_text(), Ok("464.21".to_string()));
    /// assert_eq!(Value::Bool(false).to_text(), Ok("false".to_string()));
    /// assert!(Value::Null.to_text().is_err());
    /// ```
    pub fn to_text(&self) -> Result<String, MapError> {
        match self {
            Value::Text(s) => Ok(s.clone()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Float(x) => Ok(x.to_string()),
            Value::Int(n) => Ok(n.to_string()),
            Value::UInt(n) => Ok(n.to_string()),
            other => Err(mismatch("text", other)),
        }
    }

    /// Coerces to a boolean.
    ///
    /// Accepts a stored boolean, or text matching the strict grammar
    /// `"true" | "false" | "1" | "0" | "t" | "f"`, case-insensitive.
    pub fn to_bool(&self) -> Result<bool, MapError> {
        match self {
            Value::Bool(b) => Ok(*b),
            Value::Text(s) => match s.to_ascii_lowercase().as_str() {
                "true" | "t" | "1" => Ok(true),
                "false" | "f" | "0" => Ok(false),
                _ => Err(MapError::TypeMismatch {
                    expected: "bool",
                    actual: format!("unparseable text {s:?}"),
                }),
            },
            other => Err(mismatch("bool", other)),
        }
    }

    /// Coerces to a timestamp.
    ///
    /// Accepts a stored timestamp (identity), or text tried in order against
    /// the fixed format table (ISO-8601 `Z`, numeric offset, zone
    /// abbreviation, offset plus abbreviation, RFC 1123, common-log). The
    /// first format that parses wins; if none matches, the last parse error
    /// is reported.
    pub fn to_time(&self) -> Result<DateTime<FixedOffset>, MapError> {
        match self {
            Value::Time(t) => Ok(*t),
            Value::Text(s) => time::parse_timestamp(s).map_err(|err| MapError::TypeMismatch {
                expected: "time",
                actual: format!("unparseable text {s:?} ({err})"),
            }),
            other => Err(mismatch("time", other)),
        }
    }

    /// Coerces to a timestamp and normalizes it to UTC.
    ///
    /// The conversion shifts the wall-clock fields by the source offset; it
    /// does not just relabel the zone.
    pub fn to_time_utc(&self) -> Result<DateTime<Utc>, MapError> {
        self.to_time().map(|t| t.with_timezone(&Utc))
    }

    /// Coerces to an array of strings, converting each element with
    /// [`Value::to_text`].
    ///
    /// The first element that fails aborts the whole conversion with
    /// [`MapError::ElementTypeMismatch`]; partial results are discarded.
    ///
    /// ```
    /// # use dynmap::Value;
    /// let mixed = Value::Array(vec![
    ///     Value::Text("1".into()),
    ///     Value::Float(2.9),
    ///     Value::Int(-3),
    /// ]);
    /// assert_eq!(mixed.to_text_array(), Ok(vec!["1".to_string(), "2.9".to_string(), "-3".to_string()]));
    /// ```
    pub fn to_text_array(&self) -> Result<Vec<String>, MapError> {
        self.coerce_elements("string array", Value::to_text)
    }

    /// Coerces to an array of signed integers, converting each element with
    /// [`Value::to_i64`]. Fails atomically like [`Value::to_text_array`].
    pub fn to_i64_array(&self) -> Result<Vec<i64>, MapError> {
        self.coerce_elements("int array", Value::to_i64)
    }

    /// Coerces to an array of floats, converting each element with
    /// [`Value::to_f64`]. Fails atomically like [`Value::to_text_array`].
    pub fn to_f64_array(&self) -> Result<Vec<f64>, MapError> {
        self.coerce_elements("float array", Value::to_f64)
    }

    /// Coerces to a nested map. Only a stored map qualifies; the result is a
    /// fresh copy, leaving the source untouched.
    pub fn to_map(&self) -> Result<Map, MapError> {
        match self {
            Value::Map(map) => Ok(map.clone()),
            other => Err(mismatch("map", other)),
        }
    }

    fn coerce_elements<T>(
        &self,
        expected: &'static str,
        coerce: impl Fn(&Value) -> Result<T, MapError>,
    ) -> Result<Vec<T>, MapError> {
        let items = match self {
            Value::Array(items) => items,
            other => return Err(mismatch(expected, other)),
        };

        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match coerce(item) {
                Ok(converted) => out.push(converted),
                Err(MapError::TypeMismatch { expected, actual }) => {
                    return Err(MapError::ElementTypeMismatch {
                        index,
                        expected,
                        actual,
                    });
                }
                Err(err) => return Err(err),
            }
        }
        Ok(out)
    }
}
