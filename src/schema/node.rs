use crate::model::{LeafKind, Path};
use std::collections::BTreeMap;

/// A value slot in the static schema tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafSpec {
    pub path: Path,
    pub kind: LeafKind,
    /// The canonical parameter name that binds this leaf.
    pub parameter: String,
}

/// The static shape of a request, derived once from a schema definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    Leaf(LeafSpec),
    Object(BTreeMap<String, SchemaNode>),
}

impl SchemaNode {
    pub fn empty_object() -> Self {
        SchemaNode::Object(BTreeMap::new())
    }

    /// Finds the node at `path`, walking down from this node.
    pub fn find(&self, path: &Path) -> Option<&SchemaNode> {
        let mut node = self;
        for segment in path.segments() {
            match node {
                SchemaNode::Object(children) => node = children.get(segment)?,
                SchemaNode::Leaf(_) => return None,
            }
        }
        Some(node)
    }

    /// The leaf at `path`, or `None` if the path is unknown or names an object.
    pub fn leaf(&self, path: &Path) -> Option<&LeafSpec> {
        match self.find(path)? {
            SchemaNode::Leaf(spec) => Some(spec),
            SchemaNode::Object(_) => None,
        }
    }

    /// All leaves below this node, in path order.
    pub fn leaves(&self) -> Vec<&LeafSpec> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a LeafSpec>) {
        match self {
            SchemaNode::Leaf(spec) => out.push(spec),
            SchemaNode::Object(children) => {
                for child in children.values() {
                    child.collect_leaves(out);
                }
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            SchemaNode::Leaf(_) => 1,
            SchemaNode::Object(children) => children.values().map(SchemaNode::leaf_count).sum(),
        }
    }
}
