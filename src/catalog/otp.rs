//! `SendOTPMessage`: sends a one-time password.

use crate::schema::{FieldDefinition, SchemaDefinition};
use serde::{Deserialize, Serialize};

pub const OPERATION: &str = "SendOTPMessage";

pub fn definition() -> SchemaDefinition {
    let body = "SendOTPMessageRequestParameters";
    let field = |member: &str, type_name: &str| {
        FieldDefinition::new(
            &format!("SendOTPMessageRequestParameter_{}", member),
            &format!("{}.{}", body, member),
            type_name,
        )
    };

    SchemaDefinition::new(OPERATION)
        .with_primary_output("MessageResponse")
        .with_field(FieldDefinition::new("ApplicationId", "ApplicationId", "string").required())
        .with_field(field("AllowedAttempts", "integer"))
        .with_field(field("BrandName", "string"))
        .with_field(field("Channel", "string"))
        .with_field(field("CodeLength", "integer"))
        .with_field(field("DestinationIdentity", "string"))
        .with_field(field("EntityId", "string"))
        .with_field(field("Language", "string"))
        .with_field(field("OriginationIdentity", "string"))
        .with_field(field("ReferenceId", "string"))
        .with_field(field("TemplateId", "string"))
        .with_field(field("ValidityPeriod", "integer"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SendOtpMessageRequest {
    pub application_id: String,
    #[serde(
        rename = "SendOTPMessageRequestParameters",
        skip_serializing_if = "Option::is_none"
    )]
    pub parameters: Option<SendOtpMessageRequestParameters>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SendOtpMessageRequestParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_attempts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_identity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origination_identity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_period: Option<i64>,
}
