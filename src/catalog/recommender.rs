//! `UpdateRecommenderConfiguration`: updates a recommender model configuration.

use crate::schema::{FieldDefinition, SchemaDefinition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const OPERATION: &str = "UpdateRecommenderConfiguration";

pub fn definition() -> SchemaDefinition {
    let body = "UpdateRecommenderConfiguration";
    let field = |parameter: &str, member: &str, type_name: &str| {
        FieldDefinition::new(parameter, &format!("{}.{}", body, member), type_name)
            .alias(&format!("{}_{}", body, member))
    };

    SchemaDefinition::new(OPERATION)
        .with_primary_output("RecommenderConfigurationResponse")
        .with_field(FieldDefinition::new("RecommenderId", "RecommenderId", "string").required())
        .with_field(field("Attribute", "Attributes", "string-map"))
        .with_field(field("Description", "Description", "string"))
        .with_field(field("Name", "Name", "string"))
        .with_field(field("RecommendationProviderIdType", "RecommendationProviderIdType", "string"))
        .with_field(field("RecommendationProviderRoleArn", "RecommendationProviderRoleArn", "string"))
        .with_field(field("RecommendationProviderUri", "RecommendationProviderUri", "string"))
        .with_field(field("RecommendationTransformerUri", "RecommendationTransformerUri", "string"))
        .with_field(field("RecommendationsDisplayName", "RecommendationsDisplayName", "string"))
        .with_field(field("RecommendationsPerMessage", "RecommendationsPerMessage", "integer"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct UpdateRecommenderConfigurationRequest {
    pub recommender_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_recommender_configuration: Option<UpdateRecommenderConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct UpdateRecommenderConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_provider_id_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_provider_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_provider_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_transformer_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations_per_message: Option<i64>,
}
