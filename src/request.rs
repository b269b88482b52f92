use crate::error::ConfigurationError;
use crate::model::NestedResult;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// An assembled request, ready to hand to a [`Transport`](crate::transport::Transport).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    pub operation: String,
    pub body: serde_json::Value,
}

impl Request {
    pub fn new(operation: &str, result: &NestedResult) -> Self {
        Self {
            operation: operation.to_string(),
            body: result.to_json(),
        }
    }

    /// Populates a typed request from the body. See [`assemble`].
    pub fn assemble<T: DeserializeOwned>(&self) -> Result<T, ConfigurationError> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| ConfigurationError::Assembly(e.to_string()))
    }
}

/// Populates a typed request from a `NestedResult`.
///
/// Absent members are simply missing from the JSON form, so they land on the
/// target's `Option` fields as `None` (or on `#[serde(default)]` fields as their
/// default). Present objects populate nested request types recursively.
pub fn assemble<T: DeserializeOwned>(result: &NestedResult) -> Result<T, ConfigurationError> {
    serde_json::from_value(result.to_json()).map_err(|e| ConfigurationError::Assembly(e.to_string()))
}
