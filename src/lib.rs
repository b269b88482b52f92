//! # Kumitate - Nested Request Assembly
//!
//! **Kumitate** turns a flat set of optionally-bound parameters into the nested
//! request structure a remote API expects. Every intermediate object is kept
//! only if at least one value below it was bound, so the wire payload never
//! carries empty containers, and an explicitly bound `0`, `false` or `""` is
//! never mistaken for an absent value.
//!
//! ## Core Workflow
//!
//! 1.  **Describe the operation**: Write a `SchemaDefinition` (in Rust, or as JSON) listing each
//!     parameter, its aliases, its wire path (e.g. `Schedule.QuietTime.Start`) and its type.
//!     Custom service-model formats can implement `IntoSchema`.
//! 2.  **Compile**: Use `SchemaCompiler::builder` to validate the definition and build the
//!     static schema tree plus the parameter lookup table.
//! 3.  **Bind and assemble**: Bind `Parameters`, then `Flattener` produces a `FlatBag` of present
//!     leaves and `Unflattener` rebuilds the pruned `NestedResult`.
//! 4.  **Invoke**: `Operation::invoke` runs the whole pipeline against a `Transport` and projects
//!     the response through the caller's selector.
//!
//! ## Quick Start
//!
//! ```rust
//! use kumitate::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let definition = SchemaDefinition::new("UpdateCampaign")
//!         .with_field(FieldDefinition::new("QuietTime_Start", "Schedule.QuietTime.Start", "string"))
//!         .with_field(FieldDefinition::new("QuietTime_End", "Schedule.QuietTime.End", "string"))
//!         .with_field(FieldDefinition::new("Schedule_Frequency", "Schedule.Frequency", "string"))
//!         .with_field(FieldDefinition::new("Limits_Daily", "Limits.Daily", "integer"));
//!
//!     let schema = SchemaCompiler::builder(definition).build().compile()?;
//!
//!     let parameters = Parameters::new().bind("QuietTime_Start", "02:30");
//!     let bag = Flattener::new(&schema).flatten_parameters(&parameters)?;
//!     let request = Unflattener::new(&schema).unflatten(&bag)?;
//!
//!     assert_eq!(
//!         request.to_json(),
//!         serde_json::json!({ "Schedule": { "QuietTime": { "Start": "02:30" } } })
//!     );
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod compiler;
pub mod data;
pub mod error;
pub mod flattener;
pub mod model;
pub mod operation;
pub mod prelude;
pub mod projection;
pub mod request;
pub mod schema;
pub mod transport;
pub mod unflattener;
