//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the kumitate crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use kumitate::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let definition = SchemaDefinition::from_file("path/to/schema.json")?;
//! let operation = Operation::from_definition(definition)?;
//!
//! let raw = RawParameters::from_file("path/to/parameters.json")?;
//! let request = operation.prepare_raw(&raw)?;
//!
//! println!("{}", serde_json::to_string_pretty(&request.body)?);
//! # Ok(())
//! # }
//! ```

// Compilation and the single-call pipeline
pub use crate::compiler::{CompiledSchema, PresencePolicy, SchemaCompiler};
pub use crate::operation::Operation;
pub use crate::transport::Transport;

// Flatten / unflatten
pub use crate::flattener::{FlatBag, Flattener, flatten_nested};
pub use crate::unflattener::Unflattener;

// Data model
pub use crate::model::{DisplayNested, LeafKind, Nested, NestedResult, Path, Slot, Value};
pub use crate::schema::{FieldDefinition, IntoSchema, SchemaDefinition, SchemaNode};

// Inputs and outputs
pub use crate::data::{Parameters, RawParameters};
pub use crate::projection::{Projection, Selector};
pub use crate::request::{Request, assemble};

// Error types
pub use crate::error::{ConfigurationError, InvokeError, SchemaError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
