use crate::compiler::CompiledSchema;
use crate::error::ConfigurationError;
use crate::flattener::FlatBag;
use crate::model::NestedResult;

mod engine;

use engine::PruningEngine;

/// Rebuilds the nested request shape from a `FlatBag`, omitting every object
/// that has no present value below it.
///
/// The result is independent of the order in which values were bound: the
/// bag and every object in the output are keyed maps.
pub struct Unflattener<'a> {
    schema: &'a CompiledSchema,
}

impl<'a> Unflattener<'a> {
    pub fn new(schema: &'a CompiledSchema) -> Self {
        Self { schema }
    }

    /// Unflattens `bag`. Fails if the bag holds a path that is not a schema leaf.
    pub fn unflatten(&self, bag: &FlatBag) -> Result<NestedResult, ConfigurationError> {
        if let Some(stray) = bag.paths().find(|path| self.schema.leaf(path).is_none()) {
            return Err(ConfigurationError::UnknownPath(stray.to_string()));
        }

        let engine = PruningEngine::new(bag);
        let root = engine.resolve_root(self.schema.root());

        tracing::debug!(
            operation = self.schema.operation(),
            present = bag.len(),
            pruned = engine.pruned(),
            "unflattened request"
        );
        Ok(NestedResult::new(root))
    }
}
