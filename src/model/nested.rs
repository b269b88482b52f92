use super::{Path, Value};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A node of an assembled request: either a present leaf or a non-empty object.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested {
    Leaf(Value),
    Object(BTreeMap<String, Nested>),
}

impl Nested {
    pub fn as_object(&self) -> Option<&BTreeMap<String, Nested>> {
        match self {
            Nested::Object(children) => Some(children),
            Nested::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            Nested::Leaf(value) => Some(value),
            Nested::Object(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Nested::Leaf(value) => value.to_json(),
            Nested::Object(children) => serde_json::Value::Object(
                children
                    .iter()
                    .map(|(name, child)| (name.clone(), child.to_json()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Nested {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nested::Leaf(value) => value.serialize(serializer),
            Nested::Object(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (name, child) in children {
                    map.serialize_entry(name, child)?;
                }
                map.end()
            }
        }
    }
}

/// The output of unflattening. The root object always exists, even when empty;
/// every other object in the tree has at least one present leaf below it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NestedResult {
    root: BTreeMap<String, Nested>,
}

impl NestedResult {
    pub fn new(root: BTreeMap<String, Nested>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &BTreeMap<String, Nested> {
        &self.root
    }

    pub fn into_root(self) -> BTreeMap<String, Nested> {
        self.root
    }

    /// Number of present top-level members.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn get(&self, path: &Path) -> Option<&Nested> {
        let (head, rest) = path.segments().split_first()?;
        let mut node = self.root.get(head)?;
        for segment in rest {
            node = node.as_object()?.get(segment)?;
        }
        Some(node)
    }

    pub fn leaf(&self, path: &Path) -> Option<&Value> {
        self.get(path).and_then(Nested::as_leaf)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.get(path).is_some()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.root
                .iter()
                .map(|(name, child)| (name.clone(), child.to_json()))
                .collect(),
        )
    }
}

impl Serialize for NestedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.root.len()))?;
        for (name, child) in &self.root {
            map.serialize_entry(name, child)?;
        }
        map.end()
    }
}

/// Renders a `NestedResult` as an indented tree, for CLI output and debugging.
pub struct DisplayNested<'a> {
    pub result: &'a NestedResult,
    pub root_name: &'a str,
}

impl fmt::Display for DisplayNested<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.root_name)?;
        self.fmt_children(self.result.root(), f, "")
    }
}

impl DisplayNested<'_> {
    fn fmt_children(
        &self,
        children: &BTreeMap<String, Nested>,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
    ) -> fmt::Result {
        let count = children.len();
        for (index, (name, child)) in children.iter().enumerate() {
            let is_last = index + 1 == count;
            let node_marker = if is_last { "└── " } else { "├── " };
            match child {
                Nested::Leaf(value) => writeln!(f, "{}{}{}: {}", prefix, node_marker, name, value)?,
                Nested::Object(grandchildren) => {
                    writeln!(f, "{}{}{}", prefix, node_marker, name)?;
                    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
                    self.fmt_children(grandchildren, f, &child_prefix)?;
                }
            }
        }
        Ok(())
    }
}
