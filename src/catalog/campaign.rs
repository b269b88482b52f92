//! `UpdateCampaign`: changes the configuration and settings of a campaign.

use super::types::{CampaignLimits, QuietTime, limits_fields, quiet_time_fields};
use crate::schema::{FieldDefinition, SchemaDefinition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const OPERATION: &str = "UpdateCampaign";

pub fn definition() -> SchemaDefinition {
    let body = "WriteCampaignRequest";
    let field = |parameter: &str, member: &str, type_name: &str| {
        FieldDefinition::new(parameter, &format!("{}.{}", body, member), type_name)
            .alias(&format!("{}_{}", body, member.replace('.', "_")))
    };

    SchemaDefinition::new(OPERATION)
        .with_primary_output("CampaignResponse")
        .with_field(FieldDefinition::new("ApplicationId", "ApplicationId", "string").required())
        .with_field(FieldDefinition::new("CampaignId", "CampaignId", "string").required())
        .with_field(field("AdditionalTreatment", "AdditionalTreatments", "object-list"))
        .with_field(field("Description", "Description", "string"))
        .with_field(field("HoldoutPercent", "HoldoutPercent", "integer"))
        .with_field(field("IsPaused", "IsPaused", "boolean"))
        .with_field(field("Name", "Name", "string"))
        .with_field(field("Priority", "Priority", "integer"))
        .with_field(field("SegmentId", "SegmentId", "string"))
        .with_field(field("SegmentVersion", "SegmentVersion", "integer"))
        .with_field(field("Tag", "Tags", "string-map"))
        .with_field(field("TreatmentDescription", "TreatmentDescription", "string"))
        .with_field(field("TreatmentName", "TreatmentName", "string"))
        .with_fields(limits_fields(body, body))
        .with_field(field("Schedule_StartTime", "Schedule.StartTime", "string"))
        .with_field(field("Schedule_EndTime", "Schedule.EndTime", "string"))
        .with_field(field("Schedule_Frequency", "Schedule.Frequency", "string"))
        .with_field(field("Schedule_IsLocalTime", "Schedule.IsLocalTime", "boolean"))
        .with_field(field("Schedule_Timezone", "Schedule.Timezone", "string"))
        .with_field(field("EventFilter_FilterType", "Schedule.EventFilter.FilterType", "string"))
        .with_fields(quiet_time_fields(
            "WriteCampaignRequest.Schedule",
            "WriteCampaignRequest_Schedule",
        ))
        .with_field(field("DefaultMessage_Body", "MessageConfiguration.DefaultMessage.Body", "string"))
        .with_field(field("DefaultMessage_Title", "MessageConfiguration.DefaultMessage.Title", "string"))
        .with_field(field("SMSMessage_Body", "MessageConfiguration.SMSMessage.Body", "string"))
        .with_field(field("SMSMessage_MessageType", "MessageConfiguration.SMSMessage.MessageType", "string"))
        .with_field(field("SMSMessage_SenderId", "MessageConfiguration.SMSMessage.SenderId", "string"))
        .with_field(field("EmailMessage_Body", "MessageConfiguration.EmailMessage.Body", "string"))
        .with_field(field("EmailMessage_FromAddress", "MessageConfiguration.EmailMessage.FromAddress", "string"))
        .with_field(field("EmailMessage_HtmlBody", "MessageConfiguration.EmailMessage.HtmlBody", "string"))
        .with_field(field("EmailMessage_Title", "MessageConfiguration.EmailMessage.Title", "string"))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct UpdateCampaignRequest {
    pub application_id: String,
    pub campaign_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_campaign_request: Option<WriteCampaignRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct WriteCampaignRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_treatments: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holdout_percent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<CampaignLimits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_configuration: Option<MessageConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Schedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_local_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet_time: Option<QuietTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_filter: Option<CampaignEventFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CampaignEventFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct MessageConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_message: Option<Message>,
    #[serde(rename = "SMSMessage", skip_serializing_if = "Option::is_none")]
    pub sms_message: Option<CampaignSmsMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_message: Option<CampaignEmailMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CampaignSmsMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CampaignEmailMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
