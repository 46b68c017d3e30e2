//! Runtime values handed to the literal builder.
//!
//! A [`RuntimeValue`] is the decoded form of a data document: the caller (or
//! one of the decoding helpers in this module) produces it, and the
//! [`LiteralBuilder`](crate::LiteralBuilder) pattern-matches over it to build
//! literal expression nodes.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{Result, SourceContext};

/// A dynamically-typed value to be converted into a literal expression.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RuntimeValue {
    /// A missing or unsupported value. Produces no node and is dropped from
    /// arrays and records.
    #[default]
    Undefined,
    /// The `null` value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value, carried without coercion.
    Number(Number),
    /// String value.
    String(String),
    /// Ordered sequence of values.
    Array(Vec<RuntimeValue>),
    /// Keyed structure; insertion order determines output order.
    Record(IndexMap<String, RuntimeValue>),
}

/// A numeric value.
///
/// Integers keep their exact representation so that values outside the
/// `f64`-safe range are not rounded before they reach the AST factory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::UInt(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}

impl RuntimeValue {
    /// Create a string value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create an array value.
    pub fn array(items: impl IntoIterator<Item = RuntimeValue>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    /// Create a record value; later duplicates of a key replace earlier ones
    /// but keep the first key's position.
    pub fn record<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, RuntimeValue)>,
    {
        Self::Record(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Whether this value lays out like an object: a record, or `null`.
    ///
    /// Arrays are never object-like.
    pub fn is_object_like(&self) -> bool {
        matches!(self, Self::Record(_) | Self::Null)
    }

    /// Decode a JSON document, preserving object key order.
    pub fn from_json_str(src: &str, filename: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(src).map_err(|e| SourceContext::new(src, filename).json_error(e))?;
        Ok(value.into())
    }

    /// Decode a TOML document, preserving table key order.
    pub fn from_toml_str(src: &str, filename: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(src).map_err(|e| SourceContext::new(src, filename).toml_error(e))?;
        Ok(toml::Value::Table(table).into())
    }
}

impl From<serde_json::Value> for RuntimeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.into()),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Record(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Number> for Number {
    fn from(n: serde_json::Number) -> Self {
        if let Some(v) = n.as_i64() {
            Self::Int(v)
        } else if let Some(v) = n.as_u64() {
            Self::UInt(v)
        } else {
            // Without `arbitrary_precision` every remaining number is an f64.
            Self::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<toml::Value> for RuntimeValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Self::String(s),
            toml::Value::Integer(i) => Self::Number(Number::Int(i)),
            toml::Value::Float(f) => Self::Number(Number::Float(f)),
            toml::Value::Boolean(b) => Self::Bool(b),
            toml::Value::Datetime(dt) => Self::String(dt.to_string()),
            toml::Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            toml::Value::Table(table) => Self::Record(
                table
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for RuntimeValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for RuntimeValue {
    fn from(v: i64) -> Self {
        Self::Number(Number::Int(v))
    }
}

impl From<u64> for RuntimeValue {
    fn from(v: u64) -> Self {
        Self::Number(Number::UInt(v))
    }
}

impl From<f64> for RuntimeValue {
    fn from(v: f64) -> Self {
        Self::Number(Number::Float(v))
    }
}

impl From<&str> for RuntimeValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for RuntimeValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<RuntimeValue>> for RuntimeValue {
    fn from(v: Vec<RuntimeValue>) -> Self {
        Self::Array(v)
    }
}

impl From<IndexMap<String, RuntimeValue>> for RuntimeValue {
    fn from(v: IndexMap<String, RuntimeValue>) -> Self {
        Self::Record(v)
    }
}

impl<T: Into<RuntimeValue>> From<Option<T>> for RuntimeValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Undefined, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_scalars() {
        assert_eq!(RuntimeValue::from(json!(null)), RuntimeValue::Null);
        assert_eq!(RuntimeValue::from(json!(true)), RuntimeValue::Bool(true));
        assert_eq!(
            RuntimeValue::from(json!(-3)),
            RuntimeValue::Number(Number::Int(-3))
        );
        assert_eq!(
            RuntimeValue::from(json!(u64::MAX)),
            RuntimeValue::Number(Number::UInt(u64::MAX))
        );
        assert_eq!(
            RuntimeValue::from(json!(1.5)),
            RuntimeValue::Number(Number::Float(1.5))
        );
        assert_eq!(RuntimeValue::from(json!("hi")), RuntimeValue::string("hi"));
    }

    #[test]
    fn test_json_object_preserves_order() {
        let value = RuntimeValue::from(json!({ "zeta": 1, "alpha": 2, "mid": 3 }));
        let RuntimeValue::Record(map) = value else {
            panic!("Expected Record variant");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_json_str() {
        let value = RuntimeValue::from_json_str(r#"[1, "two", null]"#, "data.json").unwrap();
        assert_eq!(
            value,
            RuntimeValue::array([1i64.into(), "two".into(), RuntimeValue::Null])
        );
    }

    #[test]
    fn test_from_json_str_error() {
        let err = RuntimeValue::from_json_str("{\n  \"a\": ,\n}", "broken.json").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_from_toml_str() {
        let value = RuntimeValue::from_toml_str(
            r#"
            name = "api"
            port = 8080
            ratio = 0.5
            created = 1979-05-27T07:32:00Z

            [server]
            tls = true
            "#,
            "config.toml",
        )
        .unwrap();

        let RuntimeValue::Record(map) = value else {
            panic!("Expected Record variant");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "port", "ratio", "created", "server"]);
        assert_eq!(map["port"], RuntimeValue::Number(Number::Int(8080)));
        assert_eq!(map["created"], RuntimeValue::string("1979-05-27T07:32:00Z"));
        assert_eq!(
            map["server"],
            RuntimeValue::record([("tls", RuntimeValue::Bool(true))])
        );
    }

    #[test]
    fn test_from_toml_str_error() {
        let err = RuntimeValue::from_toml_str("name = ", "bad.toml").unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(RuntimeValue::from(None::<bool>), RuntimeValue::Undefined);
        assert_eq!(RuntimeValue::from(Some("x")), RuntimeValue::string("x"));
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Int(-1).to_string(), "-1");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_object_like() {
        assert!(RuntimeValue::record([("a", RuntimeValue::Null)]).is_object_like());
        assert!(RuntimeValue::Null.is_object_like());
        assert!(!RuntimeValue::array([RuntimeValue::Null]).is_object_like());
        assert!(!RuntimeValue::Undefined.is_object_like());
        assert!(!RuntimeValue::string("{}").is_object_like());
    }
}
