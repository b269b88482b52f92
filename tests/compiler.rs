//! Tests for schema definitions and their compilation into a schema tree.
mod common;
use common::*;
use kumitate::compiler::parsing::KindParser;
use kumitate::prelude::*;

#[test]
fn test_compiler_builds_schema_tree() {
    let schema = create_campaign_schema();

    assert_eq!(schema.operation(), "WriteCampaign");
    assert_eq!(schema.primary_output(), Some(&path("CampaignResponse")));
    assert_eq!(schema.root().leaf_count(), 11);
    assert_eq!(schema.parameters().len(), 11);

    let start = schema.leaf(&path("Schedule.QuietTime.Start")).unwrap();
    assert_eq!(start.kind, LeafKind::String);
    assert_eq!(start.parameter, "QuietTime_Start");

    // Intermediate objects are not leaves.
    assert!(schema.leaf(&path("Schedule.QuietTime")).is_none());
    assert!(matches!(
        schema.root().find(&path("Schedule.QuietTime")),
        Some(SchemaNode::Object(children)) if children.len() == 2
    ));
}

#[test]
fn test_parameter_lookup_by_alias_ignores_case() {
    let schema = create_campaign_schema();

    let by_name = schema.parameter("quiettime_start").unwrap();
    let by_alias = schema.parameter("SCHEDULE_QUIETTIME_START").unwrap();
    assert_eq!(by_name.name, "QuietTime_Start");
    assert_eq!(by_alias.path, by_name.path);
    assert_eq!(by_alias.type_name(), "string");
    assert!(schema.parameter("Schedule_QuietTime").is_none());
}

#[test]
fn test_compiler_with_type_mapping() {
    let definition = SchemaDefinition::new("Op")
        .with_field(FieldDefinition::new("Daily", "Limits.Daily", "System.Int32"));

    let schema = SchemaCompiler::builder(definition)
        .with_type_mapping("System.Int32", "integer")
        .build()
        .compile()
        .expect("type mapping should resolve");

    assert_eq!(schema.leaf(&path("Limits.Daily")).unwrap().kind, LeafKind::Integer);
}

#[test]
fn test_compiler_fails_on_unregistered_type() {
    let definition = SchemaDefinition::new("Op")
        .with_field(FieldDefinition::new("Daily", "Limits.Daily", "System.Int32"));

    match definition.compile() {
        Err(SchemaError::UnknownType {
            parameter,
            type_name,
        }) => {
            assert_eq!(parameter, "Daily");
            assert_eq!(type_name, "System.Int32");
        }
        other => panic!("Expected UnknownType error, got {:?}", other),
    }
}

#[test]
fn test_compiler_rejects_duplicate_paths() {
    let definition = SchemaDefinition::new("Op")
        .with_field(FieldDefinition::new("Daily", "Limits.Daily", "integer"))
        .with_field(FieldDefinition::new("DailyCap", "Limits.Daily", "integer"));

    assert_eq!(
        definition.compile().unwrap_err(),
        SchemaError::DuplicatePath {
            path: "Limits.Daily".to_string(),
            first: "Daily".to_string(),
            second: "DailyCap".to_string(),
        }
    );
}

#[test]
fn test_compiler_rejects_leaf_object_conflicts_in_either_order() {
    let leaf_first = SchemaDefinition::new("Op")
        .with_field(FieldDefinition::new("Limits", "Limits", "string"))
        .with_field(FieldDefinition::new("Daily", "Limits.Daily", "integer"));
    assert!(matches!(
        leaf_first.compile(),
        Err(SchemaError::PathConflict { path, existing })
            if path == "Limits.Daily" && existing == "Limits"
    ));

    let object_first = SchemaDefinition::new("Op")
        .with_field(FieldDefinition::new("Daily", "Limits.Daily", "integer"))
        .with_field(FieldDefinition::new("Limits", "Limits", "string"));
    assert!(matches!(
        object_first.compile(),
        Err(SchemaError::PathConflict { path, existing })
            if path == "Limits" && existing == "Limits.Daily"
    ));
}

#[test]
fn test_compiler_rejects_colliding_parameter_names() {
    let definition = SchemaDefinition::new("Op")
        .with_field(FieldDefinition::new("Name", "Name", "string"))
        .with_field(FieldDefinition::new("Title", "Title", "string").alias("NAME"));

    assert_eq!(
        definition.compile().unwrap_err(),
        SchemaError::DuplicateParameter("NAME".to_string())
    );
}

#[test]
fn test_compiler_rejects_malformed_paths() {
    let definition =
        SchemaDefinition::new("Op").with_field(FieldDefinition::new("Bad", "Limits..Daily", "integer"));
    assert_eq!(
        definition.compile().unwrap_err(),
        SchemaError::MalformedPath("Limits..Daily".to_string())
    );

    let bad_primary = SchemaDefinition::new("Op").with_primary_output("Response.");
    assert!(matches!(
        bad_primary.compile(),
        Err(SchemaError::MalformedPath(_))
    ));
}

#[test]
fn test_empty_definition_compiles_to_empty_root() {
    let schema = SchemaDefinition::new("Ping").compile().unwrap();
    assert_eq!(schema.root(), &SchemaNode::empty_object());
    assert_eq!(schema.root().leaf_count(), 0);
}

struct UpperCaseParser;

impl KindParser for UpperCaseParser {
    fn type_name(&self) -> &str {
        "upper-string"
    }

    fn kind(&self) -> LeafKind {
        LeafKind::String
    }

    fn parse(
        &self,
        parameter: &str,
        raw: &serde_json::Value,
    ) -> std::result::Result<Value, ConfigurationError> {
        raw.as_str()
            .map(|s| Value::String(s.to_uppercase()))
            .ok_or_else(|| ConfigurationError::KindMismatch {
                parameter: parameter.to_string(),
                expected: LeafKind::String,
                found: raw.to_string(),
            })
    }
}

#[test]
fn test_compiler_with_custom_parser() {
    let definition = SchemaDefinition::new("Op")
        .with_field(FieldDefinition::new("Channel", "Channel", "upper-string"));

    let schema = SchemaCompiler::builder(definition)
        .with_custom_parser(Box::new(UpperCaseParser))
        .build()
        .compile()
        .unwrap();

    let mut raw = RawParameters::default();
    raw.insert("Channel", serde_json::json!("sms"));
    let bag = Flattener::new(&schema).flatten_raw(&raw).unwrap();
    assert_eq!(bag.get(&path("Channel")), Some(&Value::from("SMS")));
}

#[test]
fn test_definition_from_json() {
    let json = r#"{
        "operation": "UpdateCampaign",
        "primary_output": "CampaignResponse",
        "fields": [
            { "parameter": "ApplicationId", "path": "ApplicationId", "type": "string", "required": true },
            { "parameter": "QuietTime_Start", "aliases": ["Schedule_QuietTime_Start"],
              "path": "WriteCampaignRequest.Schedule.QuietTime.Start", "type": "string" }
        ]
    }"#;

    let definition = SchemaDefinition::from_json_str(json).unwrap();
    assert_eq!(definition.fields.len(), 2);
    assert!(definition.fields[0].required);
    assert!(!definition.fields[1].required);
    assert_eq!(definition.fields[1].aliases, vec!["Schedule_QuietTime_Start"]);

    let schema = definition.compile().unwrap();
    assert!(schema.parameter("schedule_quiettime_start").is_some());
}

#[test]
fn test_definition_from_invalid_json() {
    assert!(matches!(
        SchemaDefinition::from_json_str("{ \"fields\": 3 }"),
        Err(SchemaError::DefinitionParseError(_))
    ));
}

struct MemberList {
    operation: String,
    members: Vec<(&'static str, &'static str)>,
}

impl IntoSchema for MemberList {
    fn into_schema(self) -> std::result::Result<SchemaDefinition, kumitate::error::SchemaConversionError> {
        Ok(SchemaDefinition::new(&self.operation).with_fields(
            self.members
                .into_iter()
                .map(|(path, type_name)| FieldDefinition::new(&path.replace('.', "_"), path, type_name)),
        ))
    }
}

#[test]
fn test_custom_description_converts_into_schema() {
    let description = MemberList {
        operation: "UpdateEndpoint".to_string(),
        members: vec![("Address", "string"), ("Location.City", "string")],
    };

    let schema = description.into_schema().unwrap().compile().unwrap();
    assert_eq!(schema.operation(), "UpdateEndpoint");
    assert_eq!(schema.parameter("Location_City").unwrap().path, path("Location.City"));
}
