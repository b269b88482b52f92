//! Request shapes shared by more than one operation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct QuietTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CampaignLimits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages_per_second: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

/// Adds the five `Limits.*` fields under `prefix`, with PowerShell-style names.
pub(super) fn limits_fields(prefix: &str, alias_prefix: &str) -> Vec<crate::schema::FieldDefinition> {
    ["Daily", "MaximumDuration", "MessagesPerSecond", "Session", "Total"]
        .iter()
        .map(|member| {
            crate::schema::FieldDefinition::new(
                &format!("Limits_{}", member),
                &format!("{}.Limits.{}", prefix, member),
                "integer",
            )
            .alias(&format!("{}_Limits_{}", alias_prefix, member))
        })
        .collect()
}

/// Adds `QuietTime.Start` and `QuietTime.End` under `prefix`.
pub(super) fn quiet_time_fields(prefix: &str, alias_prefix: &str) -> Vec<crate::schema::FieldDefinition> {
    ["Start", "End"]
        .iter()
        .map(|member| {
            crate::schema::FieldDefinition::new(
                &format!("QuietTime_{}", member),
                &format!("{}.QuietTime.{}", prefix, member),
                "string",
            )
            .alias(&format!("{}_QuietTime_{}", alias_prefix, member))
        })
        .collect()
}
