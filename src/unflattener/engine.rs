use crate::flattener::FlatBag;
use crate::model::Nested;
use crate::schema::SchemaNode;
use std::cell::Cell;
use std::collections::BTreeMap;

/// The recursive post-order walk that resolves each schema node against a bag.
///
/// A leaf resolves to its bag value or to nothing. An object resolves to the
/// subset of its children that resolved, or to nothing when that subset is empty.
pub(super) struct PruningEngine<'a> {
    bag: &'a FlatBag,
    pruned: Cell<usize>,
}

impl<'a> PruningEngine<'a> {
    pub(super) fn new(bag: &'a FlatBag) -> Self {
        Self {
            bag,
            pruned: Cell::new(0),
        }
    }

    /// Resolves the root. Unlike inner objects, the root is kept even when empty.
    pub(super) fn resolve_root(&self, root: &SchemaNode) -> BTreeMap<String, Nested> {
        match root {
            SchemaNode::Object(children) => self.resolve_children(children),
            SchemaNode::Leaf(_) => BTreeMap::new(),
        }
    }

    /// Number of object nodes omitted so far.
    pub(super) fn pruned(&self) -> usize {
        self.pruned.get()
    }

    fn resolve(&self, name: &str, node: &SchemaNode) -> Option<Nested> {
        match node {
            SchemaNode::Leaf(spec) => self.bag.get(&spec.path).cloned().map(Nested::Leaf),
            SchemaNode::Object(children) => {
                let present = self.resolve_children(children);
                if present.is_empty() {
                    tracing::trace!(member = name, "pruning object with no present values");
                    self.pruned.set(self.pruned.get() + 1);
                    None
                } else {
                    Some(Nested::Object(present))
                }
            }
        }
    }

    fn resolve_children(&self, children: &BTreeMap<String, SchemaNode>) -> BTreeMap<String, Nested> {
        children
            .iter()
            .filter_map(|(name, child)| self.resolve(name, child).map(|n| (name.clone(), n)))
            .collect()
    }
}
