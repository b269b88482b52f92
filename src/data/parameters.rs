use crate::model::{Slot, Value};
use serde::{Deserialize, Serialize};
use std::fs;

/// Typed parameters as collected by a binding layer, in binding order.
///
/// Names are matched against the schema's parameter names and aliases without
/// regard to ASCII case. Binding the same name twice keeps the later value and
/// moves it to the end. Binding one parameter under two different spellings
/// (its name and an alias) is rejected when flattened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    entries: Vec<(String, Slot)>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to a present value. Chainable.
    pub fn bind(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, Slot::bound(value));
        self
    }

    /// Records `name` as explicitly unbound, replacing any earlier binding.
    pub fn unbind(mut self, name: &str) -> Self {
        self.set(name, Slot::Unbound);
        self
    }

    pub fn set(&mut self, name: &str, slot: Slot) {
        self.entries
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.entries.push((name.to_string(), slot));
    }

    pub fn get(&self, name: &str) -> Option<&Slot> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, slot)| slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Slot)> {
        self.entries.iter().map(|(name, slot)| (name.as_str(), slot))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Untyped parameters, matching the JSON object format of a parameter file.
///
/// Values are validated against each parameter's type when flattened. A JSON
/// `null` means the parameter is unbound.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct RawParameters {
    pub values: serde_json::Map<String, serde_json::Value>,
}

impl RawParameters {
    /// Load raw parameters from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let data = serde_json::from_str(&content)?;
        Ok(data)
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn insert(&mut self, name: &str, value: serde_json::Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}
