use crate::model::{Path, Value};
use std::collections::BTreeMap;

/// The present leaves of one request, keyed by their wire path.
///
/// Only present values are stored: a path missing from the bag is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatBag {
    entries: BTreeMap<Path, Value>,
}

impl FlatBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the value at `path`.
    pub fn insert(&mut self, path: Path, value: Value) -> Option<Value> {
        self.entries.insert(path, value)
    }

    pub fn remove(&mut self, path: &Path) -> Option<Value> {
        self.entries.remove(path)
    }

    pub fn get(&self, path: &Path) -> Option<&Value> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Value)> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys()
    }

    /// A copy holding only the entries whose paths appear in `paths`.
    pub fn restrict_to<'a>(&self, paths: impl IntoIterator<Item = &'a Path>) -> FlatBag {
        paths
            .into_iter()
            .filter_map(|path| self.entries.get(path).map(|v| (path.clone(), v.clone())))
            .collect()
    }
}

impl FromIterator<(Path, Value)> for FlatBag {
    fn from_iter<T: IntoIterator<Item = (Path, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FlatBag {
    type Item = (Path, Value);
    type IntoIter = std::collections::btree_map::IntoIter<Path, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
