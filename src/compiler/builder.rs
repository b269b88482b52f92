use crate::error::SchemaError;
use crate::schema::{LeafSpec, SchemaNode};
use std::collections::BTreeMap;

/// Responsible for growing the `SchemaNode` tree one leaf path at a time.
pub(super) struct TreeBuilder {
    root: BTreeMap<String, SchemaNode>,
}

impl TreeBuilder {
    pub(super) fn new() -> Self {
        Self {
            root: BTreeMap::new(),
        }
    }

    /// Inserts a leaf, creating intermediate objects on the way down.
    pub(super) fn insert(&mut self, spec: LeafSpec) -> Result<(), SchemaError> {
        let segments = spec.path.segments().to_vec();
        let (last, parents) = segments
            .split_last()
            .ok_or_else(|| SchemaError::MalformedPath(spec.path.to_string()))?;

        let mut children = &mut self.root;
        for segment in parents {
            let node = children
                .entry(segment.clone())
                .or_insert_with(SchemaNode::empty_object);
            children = match node {
                SchemaNode::Object(grandchildren) => grandchildren,
                SchemaNode::Leaf(existing) => {
                    return Err(SchemaError::PathConflict {
                        path: spec.path.to_string(),
                        existing: existing.path.to_string(),
                    });
                }
            };
        }

        match children.get(last) {
            Some(SchemaNode::Leaf(existing)) => Err(SchemaError::DuplicatePath {
                path: spec.path.to_string(),
                first: existing.parameter.clone(),
                second: spec.parameter,
            }),
            Some(object @ SchemaNode::Object(_)) => Err(SchemaError::PathConflict {
                path: spec.path.to_string(),
                existing: object
                    .leaves()
                    .first()
                    .map(|leaf| leaf.path.to_string())
                    .unwrap_or_default(),
            }),
            None => {
                children.insert(last.clone(), SchemaNode::Leaf(spec));
                Ok(())
            }
        }
    }

    pub(super) fn finish(self) -> SchemaNode {
        SchemaNode::Object(self.root)
    }
}
