use super::definition::SchemaDefinition;
use crate::error::SchemaConversionError;

/// A trait for custom schema descriptions that can be converted into a `SchemaDefinition`.
///
/// Service models usually describe shapes as nested members rather than as a flat
/// parameter list. Implement this trait on your own model types to translate them
/// into the flat field list the compiler understands.
///
/// # Example
///
/// ```rust
/// use kumitate::error::SchemaConversionError;
/// use kumitate::schema::{FieldDefinition, IntoSchema, SchemaDefinition};
///
/// struct Member { name: String, shape: String }
/// struct Shape { operation: String, members: Vec<Member> }
///
/// impl IntoSchema for Shape {
///     fn into_schema(self) -> Result<SchemaDefinition, SchemaConversionError> {
///         let mut definition = SchemaDefinition::new(&self.operation);
///         for member in self.members {
///             let type_name = match member.shape.as_str() {
///                 "String" => "string",
///                 "Integer" => "integer",
///                 other => {
///                     return Err(SchemaConversionError::ValidationError(format!(
///                         "unsupported shape {}",
///                         other
///                     )))
///                 }
///             };
///             definition = definition
///                 .with_field(FieldDefinition::new(&member.name, &member.name, type_name));
///         }
///         Ok(definition)
///     }
/// }
/// ```
pub trait IntoSchema {
    /// Consumes the object and converts it into a compilable schema definition.
    fn into_schema(self) -> Result<SchemaDefinition, SchemaConversionError>;
}

impl IntoSchema for SchemaDefinition {
    fn into_schema(self) -> Result<SchemaDefinition, SchemaConversionError> {
        Ok(self)
    }
}
