use crate::error::ConfigurationError;
use crate::model::{LeafKind, Value};
use ahash::AHashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Defines the contract for turning a loosely-typed input into a typed leaf value.
///
/// Raw inputs arrive as JSON (from parameter files or other untyped front ends);
/// a parser validates them against the leaf's kind before anything is assembled.
pub trait KindParser: Send + Sync {
    fn type_name(&self) -> &str;
    fn kind(&self) -> LeafKind;
    fn parse(&self, parameter: &str, raw: &serde_json::Value) -> Result<Value, ConfigurationError>;
}

pub(crate) fn describe_json(raw: &serde_json::Value) -> String {
    match raw {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => format!("boolean {}", b),
        serde_json::Value::Number(n) => format!("number {}", n),
        serde_json::Value::String(s) => format!("string \"{}\"", s),
        serde_json::Value::Array(a) => format!("array of {} element(s)", a.len()),
        serde_json::Value::Object(o) => format!("object with {} key(s)", o.len()),
    }
}

fn kind_mismatch(parameter: &str, expected: LeafKind, raw: &serde_json::Value) -> ConfigurationError {
    ConfigurationError::KindMismatch {
        parameter: parameter.to_string(),
        expected,
        found: describe_json(raw),
    }
}

fn parse_string(raw: &serde_json::Value) -> Option<Value> {
    raw.as_str().map(|s| Value::String(s.to_string()))
}

fn parse_integer(raw: &serde_json::Value) -> Option<Value> {
    if let Some(i) = raw.as_i64() {
        return Some(Value::Integer(i));
    }
    // Integral floats such as `5.0` are accepted.
    raw.as_f64()
        .filter(|n| n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64)
        .map(|n| Value::Integer(n as i64))
}

fn parse_float(raw: &serde_json::Value) -> Option<Value> {
    raw.as_f64().filter(|n| n.is_finite()).map(Value::Float)
}

fn parse_boolean(raw: &serde_json::Value) -> Option<Value> {
    raw.as_bool().map(Value::Boolean)
}

fn parse_string_list(raw: &serde_json::Value) -> Option<Value> {
    match raw {
        // A lone string binds as a one-element list.
        serde_json::Value::String(s) => Some(Value::StringList(vec![s.clone()])),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(Value::StringList),
        _ => None,
    }
}

fn parse_string_map(raw: &serde_json::Value) -> Option<Value> {
    raw.as_object()?
        .iter()
        .map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect::<Option<BTreeMap<_, _>>>()
        .map(Value::StringMap)
}

fn parse_object_list(raw: &serde_json::Value) -> Option<Value> {
    match raw {
        serde_json::Value::Array(items) => Some(Value::ObjectList(items.clone())),
        serde_json::Value::Object(_) => Some(Value::ObjectList(vec![raw.clone()])),
        _ => None,
    }
}

/// Master macro to define the built-in kind parsers and their registration.
macro_rules! define_kind_parsers {
    ( $( ($struct_name:ident, $type_name:literal, $kind:path, $convert:path) ),* $(,)? ) => {
        $(
            struct $struct_name;
            impl KindParser for $struct_name {
                fn type_name(&self) -> &str { $type_name }
                fn kind(&self) -> LeafKind { $kind }
                fn parse(&self, parameter: &str, raw: &serde_json::Value) -> Result<Value, ConfigurationError> {
                    $convert(raw).ok_or_else(|| kind_mismatch(parameter, $kind, raw))
                }
            }
        )*

        pub(super) fn register_default_parsers(registry: &mut AHashMap<String, Arc<dyn KindParser>>) {
            $( registry.insert($type_name.to_string(), Arc::new($struct_name)); )*
        }
    };
}

define_kind_parsers! {
    (StringParser, "string", LeafKind::String, parse_string),
    (IntegerParser, "integer", LeafKind::Integer, parse_integer),
    (FloatParser, "float", LeafKind::Float, parse_float),
    (BooleanParser, "boolean", LeafKind::Boolean, parse_boolean),
    (StringListParser, "string-list", LeafKind::StringList, parse_string_list),
    (StringMapParser, "string-map", LeafKind::StringMap, parse_string_map),
    (ObjectListParser, "object-list", LeafKind::ObjectList, parse_object_list),
}
