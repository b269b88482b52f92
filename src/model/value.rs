use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The wire type a schema leaf expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeafKind {
    String,
    Integer,
    Boolean,
    Float,
    StringList,
    StringMap,
    /// Lists of structured sub-objects, passed through without inspection.
    ObjectList,
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeafKind::String => "string",
            LeafKind::Integer => "integer",
            LeafKind::Boolean => "boolean",
            LeafKind::Float => "float",
            LeafKind::StringList => "string-list",
            LeafKind::StringMap => "string-map",
            LeafKind::ObjectList => "object-list",
        };
        f.write_str(name)
    }
}

/// A present leaf value. Absence is expressed with [`Slot::Unbound`], never with a zero value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Integer(i64),
    Boolean(bool),
    Float(f64),
    StringList(Vec<String>),
    StringMap(BTreeMap<String, String>),
    ObjectList(Vec<serde_json::Value>),
}

impl Value {
    pub fn kind(&self) -> LeafKind {
        match self {
            Value::String(_) => LeafKind::String,
            Value::Integer(_) => LeafKind::Integer,
            Value::Boolean(_) => LeafKind::Boolean,
            Value::Float(_) => LeafKind::Float,
            Value::StringList(_) => LeafKind::StringList,
            Value::StringMap(_) => LeafKind::StringMap,
            Value::ObjectList(_) => LeafKind::ObjectList,
        }
    }

    /// True for empty strings, lists and maps. Numbers and booleans are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::String(s) => s.is_empty(),
            Value::StringList(l) => l.is_empty(),
            Value::StringMap(m) => m.is_empty(),
            Value::ObjectList(l) => l.is_empty(),
            Value::Integer(_) | Value::Boolean(_) | Value::Float(_) => false,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Integer(i) => serde_json::Value::from(*i),
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            // Non-finite floats have no JSON form.
            Value::Float(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::StringList(l) => {
                serde_json::Value::Array(l.iter().cloned().map(serde_json::Value::String).collect())
            }
            Value::StringMap(m) => serde_json::Value::Object(
                m.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            ),
            Value::ObjectList(l) => serde_json::Value::Array(l.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Float(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{:.0}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::StringList(l) => write!(f, "[{} item(s)]", l.len()),
            Value::StringMap(m) => write!(f, "{{{} key(s)}}", m.len()),
            Value::ObjectList(l) => write!(f, "[{} object(s)]", l.len()),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::StringList(value)
    }
}

impl From<BTreeMap<String, String>> for Value {
    fn from(value: BTreeMap<String, String>) -> Self {
        Value::StringMap(value)
    }
}

impl From<Vec<serde_json::Value>> for Value {
    fn from(value: Vec<serde_json::Value>) -> Self {
        Value::ObjectList(value)
    }
}

/// Whether the caller bound a parameter at all.
///
/// `Bound(Value::Integer(0))` and `Unbound` are different things: the first is
/// sent on the wire, the second is omitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Slot {
    #[default]
    Unbound,
    Bound(Value),
}

impl Slot {
    pub fn bound(value: impl Into<Value>) -> Self {
        Slot::Bound(value.into())
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, Slot::Bound(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Slot::Bound(v) => Some(v),
            Slot::Unbound => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Slot::Bound(v) => Some(v),
            Slot::Unbound => None,
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Slot {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Slot::Bound(v.into()),
            None => Slot::Unbound,
        }
    }
}
