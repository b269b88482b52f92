//! Built-in schemas for the Amazon Pinpoint operations, with the parameter
//! names and aliases their PowerShell cmdlets expose, plus typed request
//! shapes for use with [`assemble`](crate::request::assemble).

pub mod application_settings;
pub mod campaign;
pub mod otp;
pub mod recommender;
pub mod types;

use crate::schema::SchemaDefinition;

/// Names of every operation in the catalog.
pub const OPERATIONS: [&str; 4] = [
    application_settings::OPERATION,
    campaign::OPERATION,
    otp::OPERATION,
    recommender::OPERATION,
];

/// Looks up a built-in operation by name, ignoring ASCII case.
pub fn definition(operation: &str) -> Option<SchemaDefinition> {
    let builders: [(&str, fn() -> SchemaDefinition); 4] = [
        (application_settings::OPERATION, application_settings::definition),
        (campaign::OPERATION, campaign::definition),
        (otp::OPERATION, otp::definition),
        (recommender::OPERATION, recommender::definition),
    ];
    builders
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(operation))
        .map(|(_, build)| build())
}
