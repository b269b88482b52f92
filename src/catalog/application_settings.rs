//! `UpdateApplicationSettings`: updates the settings for an application.

use super::types::{CampaignLimits, QuietTime, limits_fields, quiet_time_fields};
use crate::schema::{FieldDefinition, SchemaDefinition};
use serde::{Deserialize, Serialize};

pub const OPERATION: &str = "UpdateApplicationSettings";

pub fn definition() -> SchemaDefinition {
    let body = "WriteApplicationSettingsRequest";
    let field = |parameter: &str, member: &str, type_name: &str| {
        FieldDefinition::new(parameter, &format!("{}.{}", body, member), type_name)
            .alias(&format!("{}_{}", body, member.replace('.', "_")))
    };

    SchemaDefinition::new(OPERATION)
        .with_primary_output("ApplicationSettingsResource")
        .with_field(FieldDefinition::new("ApplicationId", "ApplicationId", "string").required())
        .with_field(field("CloudWatchMetricsEnabled", "CloudWatchMetricsEnabled", "boolean"))
        .with_field(field("EventTaggingEnabled", "EventTaggingEnabled", "boolean"))
        .with_field(field("CampaignHook_LambdaFunctionName", "CampaignHook.LambdaFunctionName", "string"))
        .with_field(field("CampaignHook_Mode", "CampaignHook.Mode", "string"))
        .with_field(field("CampaignHook_WebUrl", "CampaignHook.WebUrl", "string"))
        .with_fields(limits_fields(body, body))
        .with_fields(quiet_time_fields(body, body))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct UpdateApplicationSettingsRequest {
    pub application_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_application_settings_request: Option<WriteApplicationSettingsRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct WriteApplicationSettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_hook: Option<CampaignHook>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_metrics_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_tagging_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<CampaignLimits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet_time: Option<QuietTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CampaignHook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}
