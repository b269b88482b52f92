use crate::compiler::{CompiledSchema, ParameterSpec};
use crate::data::{Parameters, RawParameters};
use crate::error::ConfigurationError;
use crate::model::{LeafKind, Nested, NestedResult, Path, Slot, Value};
use ahash::AHashMap;
use std::collections::BTreeMap;

mod bag;

pub use bag::FlatBag;

/// Builds a `FlatBag` from caller inputs, checking every input against the schema.
///
/// The flattener only distinguishes bound from unbound inputs; it never
/// inspects a value to decide presence, except through the schema's
/// [`PresencePolicy`](crate::compiler::PresencePolicy).
pub struct Flattener<'a> {
    schema: &'a CompiledSchema,
}

impl<'a> Flattener<'a> {
    pub fn new(schema: &'a CompiledSchema) -> Self {
        Self { schema }
    }

    /// Flattens `(path, slot)` pairs. Later pairs for the same path win.
    pub fn flatten<I>(&self, slots: I) -> Result<FlatBag, ConfigurationError>
    where
        I: IntoIterator<Item = (Path, Slot)>,
    {
        let mut bag = FlatBag::new();
        for (path, slot) in slots {
            let leaf = self
                .schema
                .leaf(&path)
                .ok_or_else(|| ConfigurationError::UnknownPath(path.to_string()))?;

            match slot {
                Slot::Unbound => {
                    bag.remove(&path);
                }
                Slot::Bound(value) => {
                    let value = coerce(value, leaf.kind).map_err(|found| {
                        ConfigurationError::KindMismatch {
                            parameter: leaf.parameter.clone(),
                            expected: leaf.kind,
                            found,
                        }
                    })?;
                    if self.schema.policy().keeps(&value) {
                        bag.insert(path, value);
                    } else {
                        tracing::trace!(%path, "dropping empty value under presence policy");
                        bag.remove(&path);
                    }
                }
            }
        }
        Ok(bag)
    }

    /// Flattens named parameters, resolving aliases and checking required ones.
    ///
    /// A parameter bound under both its name and an alias is a
    /// [`ConflictingBinding`](ConfigurationError::ConflictingBinding).
    pub fn flatten_parameters(&self, parameters: &Parameters) -> Result<FlatBag, ConfigurationError> {
        let mut seen = AHashMap::new();
        let mut slots = Vec::with_capacity(parameters.len());
        for (name, slot) in parameters.iter() {
            let spec = self.resolve(name)?;
            claim(&mut seen, spec, name)?;
            slots.push((spec.path.clone(), slot.clone()));
        }

        let bag = self.flatten(slots)?;
        self.check_required(&bag)?;

        tracing::debug!(
            operation = self.schema.operation(),
            supplied = parameters.len(),
            present = bag.len(),
            "flattened parameters"
        );
        Ok(bag)
    }

    /// Flattens untyped parameters, validating each value with its parameter's type.
    pub fn flatten_raw(&self, raw: &RawParameters) -> Result<FlatBag, ConfigurationError> {
        let mut seen = AHashMap::new();
        let mut parameters = Parameters::new();
        for (name, value) in raw.iter() {
            let spec = self.resolve(name)?;
            claim(&mut seen, spec, name)?;
            let slot = if value.is_null() {
                Slot::Unbound
            } else {
                Slot::Bound(spec.parse(value)?)
            };
            parameters.set(name, slot);
        }
        self.flatten_parameters(&parameters)
    }

    fn resolve(&self, name: &str) -> Result<&'a ParameterSpec, ConfigurationError> {
        self.schema
            .parameter(name)
            .ok_or_else(|| ConfigurationError::UnknownParameter(name.to_string()))
    }

    fn check_required(&self, bag: &FlatBag) -> Result<(), ConfigurationError> {
        match self
            .schema
            .parameters()
            .iter()
            .find(|spec| spec.required && !bag.contains(&spec.path))
        {
            Some(missing) => Err(ConfigurationError::MissingRequiredParameter(
                missing.name.clone(),
            )),
            None => Ok(()),
        }
    }
}

/// Records `spelling` as the binding of `spec`. Each parameter may be bound once.
fn claim<'s>(
    seen: &mut AHashMap<&'s str, &'s str>,
    spec: &'s ParameterSpec,
    spelling: &'s str,
) -> Result<(), ConfigurationError> {
    match seen.insert(spec.name.as_str(), spelling) {
        Some(first) => Err(ConfigurationError::ConflictingBinding {
            parameter: spec.name.clone(),
            first: first.to_string(),
            second: spelling.to_string(),
        }),
        None => Ok(()),
    }
}

/// Integers widen to floats; every other kind must match exactly.
/// Non-finite floats have no wire form and are rejected.
fn coerce(value: Value, expected: LeafKind) -> Result<Value, String> {
    match (value, expected) {
        (Value::Float(n), _) if !n.is_finite() => Err(format!("non-finite float {}", n)),
        (Value::Integer(i), LeafKind::Float) => Ok(Value::Float(i as f64)),
        (value, expected) if value.kind() == expected => Ok(value),
        (value, _) => Err(value.kind().to_string()),
    }
}

/// Flattens an assembled request back into its present leaves.
pub fn flatten_nested(result: &NestedResult) -> FlatBag {
    let mut bag = FlatBag::new();
    collect_leaves(result.root(), None, &mut bag);
    bag
}

fn collect_leaves(children: &BTreeMap<String, Nested>, prefix: Option<&Path>, bag: &mut FlatBag) {
    for (name, child) in children {
        let path = match prefix {
            Some(parent) => parent.child(name.as_str()),
            None => Path::from_segment(name),
        };
        match child {
            Nested::Leaf(value) => {
                bag.insert(path, value.clone());
            }
            Nested::Object(grandchildren) => collect_leaves(grandchildren, Some(&path), bag),
        }
    }
}
