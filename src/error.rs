use crate::model::LeafKind;
use thiserror::Error;

/// Errors that can occur while compiling a schema definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Malformed path '{0}': paths need at least one segment and no empty segments")]
    MalformedPath(String),

    #[error("Path '{path}' is declared by both parameter '{first}' and parameter '{second}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("Path '{path}' conflicts with '{existing}': a path cannot be both a value and an object")]
    PathConflict { path: String, existing: String },

    #[error("Parameter name or alias '{0}' is declared more than once")]
    DuplicateParameter(String),

    #[error("Parameter '{parameter}' uses an unregistered type: '{type_name}'")]
    UnknownType {
        parameter: String,
        type_name: String,
    },

    #[error("Failed to read schema definition: {0}")]
    DefinitionParseError(String),
}

/// Caller misuse detected before any request is sent. Never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Path '{0}' does not name a value in the schema")]
    UnknownPath(String),

    #[error("Parameter '{0}' is not defined for this operation")]
    UnknownParameter(String),

    #[error("Parameter '{parameter}' is bound as both '{first}' and '{second}'")]
    ConflictingBinding {
        parameter: String,
        first: String,
        second: String,
    },

    #[error("Required parameter '{0}' was not bound")]
    MissingRequiredParameter(String),

    #[error("Parameter '{parameter}' expects a {expected} value, but found {found}")]
    KindMismatch {
        parameter: String,
        expected: LeafKind,
        found: String,
    },

    #[error("Invalid output selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Assembled request does not fit the target request type: {0}")]
    Assembly(String),
}

/// Failure of a single invocation: either rejected locally, or failed in transport.
#[derive(Error, Debug)]
pub enum InvokeError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Transport failed: {0}")]
    Transport(#[source] E),
}

/// Errors that can occur when converting a custom description format into a `SchemaDefinition`.
#[derive(Error, Debug, Clone)]
pub enum SchemaConversionError {
    #[error("Invalid custom schema: {0}")]
    ValidationError(String),
}
