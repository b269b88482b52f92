use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fs;

/// The canonical description of one operation's input, ready for compilation.
/// This is the target structure for any custom description format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    pub operation: String,
    /// Dotted path of the response member returned when no selector is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_output: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// A single flat parameter and the nested location it fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub parameter: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub path: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl FieldDefinition {
    pub fn new(parameter: &str, path: &str, type_name: &str) -> Self {
        Self {
            parameter: parameter.to_string(),
            aliases: Vec::new(),
            path: path.to_string(),
            type_name: type_name.to_string(),
            required: false,
        }
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl SchemaDefinition {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            primary_output: None,
            fields: Vec::new(),
        }
    }

    pub fn with_primary_output(mut self, path: &str) -> Self {
        self.primary_output = Some(path.to_string());
        self
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDefinition>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::DefinitionParseError(e.to_string()))
    }

    pub fn from_file(path: &str) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path).map_err(|e| {
            SchemaError::DefinitionParseError(format!("Could not read file '{}': {}", path, e))
        })?;
        Self::from_json_str(&content)
    }
}
