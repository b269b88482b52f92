use crate::error::{ConfigurationError, SchemaError};
use crate::model::{LeafKind, Path, Value};
use crate::schema::{LeafSpec, SchemaDefinition, SchemaNode};
use ahash::AHashMap;
use std::fmt;
use std::sync::Arc;

mod builder;
pub mod parsing;

use builder::TreeBuilder;
use parsing::*;

/// Decides which bound values count as present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresencePolicy {
    /// Every bound value is present, including `0`, `false` and `""`.
    #[default]
    Bound,
    /// Bound empty strings, lists and maps are dropped. Zeros and `false` stay.
    NonEmpty,
}

impl PresencePolicy {
    pub fn keeps(&self, value: &Value) -> bool {
        match self {
            PresencePolicy::Bound => true,
            PresencePolicy::NonEmpty => !value.is_empty(),
        }
    }
}

/// A bindable parameter of a compiled operation.
#[derive(Clone)]
pub struct ParameterSpec {
    pub name: String,
    pub aliases: Vec<String>,
    pub path: Path,
    pub kind: LeafKind,
    pub required: bool,
    parser: Arc<dyn KindParser>,
}

impl ParameterSpec {
    /// Validates a raw input for this parameter and converts it to a typed value.
    pub fn parse(&self, raw: &serde_json::Value) -> Result<Value, ConfigurationError> {
        self.parser.parse(&self.name, raw)
    }

    pub fn type_name(&self) -> &str {
        self.parser.type_name()
    }
}

impl fmt::Debug for ParameterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterSpec")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("type_name", &self.parser.type_name())
            .finish()
    }
}

/// The static, validated form of a `SchemaDefinition`: the nested shape plus
/// the flat parameter table that feeds it.
#[derive(Debug, Clone)]
pub struct CompiledSchema {
    operation: String,
    primary_output: Option<Path>,
    root: SchemaNode,
    parameters: Vec<ParameterSpec>,
    lookup: AHashMap<String, usize>,
    policy: PresencePolicy,
}

impl CompiledSchema {
    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn primary_output(&self) -> Option<&Path> {
        self.primary_output.as_ref()
    }

    pub fn root(&self) -> &SchemaNode {
        &self.root
    }

    pub fn policy(&self) -> PresencePolicy {
        self.policy
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Looks up a parameter by name or alias, ignoring ASCII case.
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.lookup
            .get(&name.to_ascii_lowercase())
            .map(|&index| &self.parameters[index])
    }

    pub fn leaf(&self, path: &Path) -> Option<&LeafSpec> {
        self.root.leaf(path)
    }
}

pub struct SchemaCompiler {
    definition: SchemaDefinition,
    registry: AHashMap<String, Arc<dyn KindParser>>,
    policy: PresencePolicy,
}

pub struct SchemaCompilerBuilder {
    definition: SchemaDefinition,
    registry: AHashMap<String, Arc<dyn KindParser>>,
    policy: PresencePolicy,
}

impl SchemaCompilerBuilder {
    pub fn new(definition: SchemaDefinition) -> Self {
        let mut registry: AHashMap<String, Arc<dyn KindParser>> = AHashMap::new();
        register_default_parsers(&mut registry);
        Self {
            definition,
            registry,
            policy: PresencePolicy::default(),
        }
    }

    /// Lets definitions use a foreign type name (e.g. `System.Int32`) for a registered parser.
    pub fn with_type_mapping(mut self, user_type_name: &str, kumitate_type_name: &str) -> Self {
        match self.registry.get(kumitate_type_name).cloned() {
            Some(parser) => {
                self.registry.insert(user_type_name.to_string(), parser);
            }
            None => tracing::warn!(
                user_type_name,
                kumitate_type_name,
                "ignoring type mapping to an unregistered type"
            ),
        }
        self
    }

    pub fn with_custom_parser(mut self, parser: Box<dyn KindParser>) -> Self {
        let parser: Arc<dyn KindParser> = Arc::from(parser);
        self.registry.insert(parser.type_name().to_string(), parser);
        self
    }

    pub fn with_presence_policy(mut self, policy: PresencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> SchemaCompiler {
        SchemaCompiler {
            definition: self.definition,
            registry: self.registry,
            policy: self.policy,
        }
    }
}

impl SchemaCompiler {
    pub fn builder(definition: SchemaDefinition) -> SchemaCompilerBuilder {
        SchemaCompilerBuilder::new(definition)
    }

    pub fn compile(self) -> Result<CompiledSchema, SchemaError> {
        let mut tree = TreeBuilder::new();
        let mut parameters = Vec::with_capacity(self.definition.fields.len());
        let mut lookup: AHashMap<String, usize> = AHashMap::new();

        for field in self.definition.fields {
            let path = Path::parse(&field.path)?;
            let parser = self
                .registry
                .get(&field.type_name)
                .cloned()
                .ok_or_else(|| SchemaError::UnknownType {
                    parameter: field.parameter.clone(),
                    type_name: field.type_name.clone(),
                })?;

            let index = parameters.len();
            for name in std::iter::once(&field.parameter).chain(field.aliases.iter()) {
                if lookup.insert(name.to_ascii_lowercase(), index).is_some() {
                    return Err(SchemaError::DuplicateParameter(name.clone()));
                }
            }

            tree.insert(LeafSpec {
                path: path.clone(),
                kind: parser.kind(),
                parameter: field.parameter.clone(),
            })?;

            parameters.push(ParameterSpec {
                name: field.parameter,
                aliases: field.aliases,
                path,
                kind: parser.kind(),
                required: field.required,
                parser,
            });
        }

        let primary_output = self
            .definition
            .primary_output
            .as_deref()
            .map(Path::parse)
            .transpose()?;

        let root = tree.finish();
        tracing::debug!(
            operation = %self.definition.operation,
            parameters = parameters.len(),
            leaves = root.leaf_count(),
            "compiled schema"
        );

        Ok(CompiledSchema {
            operation: self.definition.operation,
            primary_output,
            root,
            parameters,
            lookup,
            policy: self.policy,
        })
    }
}

impl SchemaDefinition {
    /// Compiles with the built-in parsers and the default presence policy.
    pub fn compile(self) -> Result<CompiledSchema, SchemaError> {
        SchemaCompiler::builder(self).build().compile()
    }
}
