use crate::error::SchemaError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A location in the nested request, e.g. `Schedule.QuietTime.Start`.
///
/// Paths always have at least one segment and no segment is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Path(Vec<String>);

impl Path {
    /// Builds a path from already-split segments.
    pub fn new<I, S>(segments: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() || segments.iter().any(|s| s.is_empty()) {
            return Err(SchemaError::MalformedPath(segments.join(".")));
        }
        Ok(Self(segments))
    }

    /// Parses a dotted path such as `"Limits.Daily"`.
    pub fn parse(dotted: &str) -> Result<Self, SchemaError> {
        Self::new(dotted.split('.'))
            .map_err(|_| SchemaError::MalformedPath(dotted.to_string()))
    }

    /// A single-segment path for a member name taken from an existing tree.
    pub(crate) fn from_segment(segment: &str) -> Self {
        Self(vec![segment.to_string()])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a parsed path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn last(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    /// The enclosing path, or `None` for a top-level member.
    pub fn parent(&self) -> Option<Path> {
        if self.0.len() > 1 {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        } else {
            None
        }
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Path {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join("."))
    }
}

impl FromStr for Path {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Path {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Path {
    type Error = SchemaError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.to_string()
    }
}
