//! Result kinds returned by service executors and their wire encoding.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Wire text for an absent result.
pub const NULL_RESULT: &str = "null";

/// A scalar result, encoded by its direct string form.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            // Integral floats keep a fractional digit: `1.0`, not `1`.
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{x:.1}")
            }
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Value produced by a service executor.
///
/// The variant, not the payload's shape, decides the encoding: collections
/// and records are encoded as JSON text, scalars by their string form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ServiceResult {
    /// No value. Encoded as `null`.
    #[default]
    Absent,
    Scalar(Scalar),
    /// Ordered list of values.
    Sequence(Vec<Value>),
    /// Unique values in first-seen order. Build with [`ServiceResult::set`].
    Set(Vec<Value>),
    /// String-keyed mapping.
    Mapping(Map<String, Value>),
    /// A structured record (e.g., an ORM model instance) as a JSON tree.
    Record(Value),
}

impl ServiceResult {
    /// Builds a set result, dropping duplicate elements.
    #[must_use]
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::new();
        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        Self::Set(unique)
    }

    /// Builds a record result from any serializable model.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be represented as JSON.
    pub fn record<T: Serialize + ?Sized>(model: &T) -> serde_json::Result<Self> {
        serde_json::to_value(model).map(Self::Record)
    }

    /// Encodes the result for the wire.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Absent => NULL_RESULT.to_string(),
            Self::Scalar(scalar) => scalar.to_string(),
            Self::Sequence(items) | Self::Set(items) => to_json(items),
            Self::Mapping(map) => to_json(map),
            Self::Record(value) => value.to_string(),
        }
    }
}

// Serializing `Value` trees with string keys cannot fail.
fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| NULL_RESULT.to_string())
}

impl fmt::Display for ServiceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<Scalar> for ServiceResult {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<String> for ServiceResult {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::Text(s))
    }
}

impl From<&str> for ServiceResult {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::Text(s.to_string()))
    }
}

impl From<bool> for ServiceResult {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for ServiceResult {
    fn from(i: i64) -> Self {
        Self::Scalar(Scalar::Int(i))
    }
}

impl From<f64> for ServiceResult {
    fn from(x: f64) -> Self {
        Self::Scalar(Scalar::Float(x))
    }
}

impl<T: Into<ServiceResult>> From<Option<T>> for ServiceResult {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_encodes_as_null_literal() {
        assert_eq!(ServiceResult::Absent.encode(), "null");
        assert_eq!(ServiceResult::from(None::<i64>).encode(), "null");
    }

    #[test]
    fn scalars_use_direct_string_form() {
        assert_eq!(ServiceResult::from(42_i64).encode(), "42");
        assert_eq!(ServiceResult::from("hello").encode(), "hello");
        assert_eq!(ServiceResult::from(true).encode(), "true");
        assert_eq!(ServiceResult::from(1.5).encode(), "1.5");
    }

    #[test]
    fn integral_floats_keep_fraction_digit() {
        assert_eq!(ServiceResult::from(1.0).encode(), "1.0");
        assert_eq!(ServiceResult::from(-3.0).encode(), "-3.0");
        assert_eq!(ServiceResult::from(0.25).encode(), "0.25");
        assert_eq!(ServiceResult::from(f64::NAN).encode(), "NaN");
    }

    #[test]
    fn sequence_encodes_as_json_array() {
        let result = ServiceResult::Sequence(vec![json!(1), json!("a")]);
        assert_eq!(result.encode(), r#"[1,"a"]"#);
    }

    #[test]
    fn mapping_encodes_as_json_object() {
        let mut map = Map::new();
        map.insert("name".to_string(), json!("zhh"));
        map.insert("age".to_string(), json!(18));
        let encoded = ServiceResult::Mapping(map).encode();
        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, json!({"name": "zhh", "age": 18}));
    }

    #[test]
    fn set_drops_duplicates_in_first_seen_order() {
        let result = ServiceResult::set([json!("b"), json!("a"), json!("b")]);
        assert_eq!(result, ServiceResult::Set(vec![json!("b"), json!("a")]));
        assert_eq!(result.encode(), r#"["b","a"]"#);
    }

    #[test]
    fn record_encodes_serializable_model() {
        #[derive(Serialize)]
        struct User {
            id: i64,
            name: String,
        }

        let result = ServiceResult::record(&User {
            id: 7,
            name: "rob".to_string(),
        })
        .unwrap();
        assert_eq!(result.encode(), r#"{"id":7,"name":"rob"}"#);
    }

    #[test]
    fn text_containing_json_is_not_reencoded() {
        assert_eq!(ServiceResult::from("[1,2]").encode(), "[1,2]");
    }
}
