//! # Request URI Construction
//!
//! Merges a literal path with an ordered list of optional named parameters.
//! Absent parameters are dropped, the remainder keep their call-site order and
//! their values are `application/x-www-form-urlencoded` encoded, with every
//! RFC 3986 reserved character escaped and `~` left as-is. Parameter
//! names are written as-is, so dotted range filters such as `timestamp.gte`
//! reach the wire untouched.

use serde_json::Value;
use std::fmt;
use thiserror::Error;
use url::form_urlencoded;

/// Raised when a dynamically typed value cannot be used as a query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for query parameter `{name}`: {reason}")]
pub struct InvalidArgument {
    /// The parameter name that was rejected.
    pub name: String,
    /// Why the value was rejected.
    pub reason: String,
}

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Percent-encoded on output.
    Str(String),
    /// Written as base-10 digits.
    Int(i64),
    /// Written as `true` / `false`.
    Bool(bool),
}

impl QueryValue {
    /// Encoded form of the value, ready to follow `name=`.
    pub fn encode(&self) -> String {
        match self {
            // byte_serialize yields safe runs, `+`, or a single `%XX` per chunk.
            QueryValue::Str(s) => form_urlencoded::byte_serialize(s.as_bytes())
                .map(|chunk| match chunk {
                    "%7E" => "~".to_string(),
                    run => run.replace('*', "%2A"),
                })
                .collect(),
            QueryValue::Int(i) => i.to_string(),
            QueryValue::Bool(b) => b.to_string(),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(i) => write!(f, "{}", i),
            QueryValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Str(value.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

// Values above i64::MAX keep their digits.
impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => QueryValue::Int(i),
            Err(_) => QueryValue::Str(value.to_string()),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

/// An ordered set of named, possibly absent, query parameters.
///
/// Entries are kept in insertion order; nothing is sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Option<QueryValue>)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter. `None` records an absent value which `build_uri` will skip.
    pub fn push<V: Into<QueryValue>>(&mut self, name: impl Into<String>, value: Option<V>) -> &mut Self {
        self.entries.push((name.into(), value.map(Into::into)));
        self
    }

    /// Builder-style variant of [`QueryParams::push`].
    pub fn with<V: Into<QueryValue>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends a parameter from a JSON value.
    ///
    /// `null` is treated as absent. Strings, integers (signed or unsigned 64-bit)
    /// and booleans are accepted;
    /// floats, arrays and objects are rejected.
    pub fn try_push_json(&mut self, name: impl Into<String>, value: &Value) -> Result<&mut Self, InvalidArgument> {
        let name = name.into();
        let converted = match value {
            Value::Null => None,
            Value::Bool(b) => Some(QueryValue::Bool(*b)),
            Value::String(s) => Some(QueryValue::Str(s.clone())),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Some(QueryValue::Int(i)),
                (None, Some(u)) => Some(QueryValue::from(u)),
                (None, None) => {
                    return Err(InvalidArgument { reason: format!("{} is not an integer", n), name })
                }
            },
            Value::Array(_) => {
                return Err(InvalidArgument { name, reason: "arrays are not scalar".to_string() })
            }
            Value::Object(_) => {
                return Err(InvalidArgument { name, reason: "objects are not scalar".to_string() })
            }
        };
        self.entries.push((name, converted));
        Ok(self)
    }

    /// Number of entries, absent ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries have been pushed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries whose value is present, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (name.as_str(), v)))
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (name, value) in iter {
            params.push(name, value);
        }
        params
    }
}

/// Builds `path?name=value&...` from the present parameters.
///
/// Returns `path` unchanged when every value is absent.
pub fn build_uri(path: &str, params: &QueryParams) -> String {
    let query = params
        .present()
        .map(|(name, value)| format!("{}={}", name, value.encode()))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
