//! Common test utilities for building schemas, parameters and transports.
use kumitate::prelude::*;
use std::cell::RefCell;

/// A small campaign-like schema covering every leaf kind.
///
/// ```text
/// Name                     string
/// IsPaused                 boolean
/// Rate                     float
/// Tags                     string-map
/// Treatments               object-list
/// Segments                 string-list
/// Schedule.Frequency       string
/// Schedule.QuietTime.Start string
/// Schedule.QuietTime.End   string
/// Limits.Daily             integer
/// Limits.Total             integer
/// ```
#[allow(dead_code)]
pub fn create_campaign_definition() -> SchemaDefinition {
    SchemaDefinition::new("WriteCampaign")
        .with_primary_output("CampaignResponse")
        .with_field(FieldDefinition::new("Name", "Name", "string"))
        .with_field(FieldDefinition::new("IsPaused", "IsPaused", "boolean"))
        .with_field(FieldDefinition::new("Rate", "Rate", "float"))
        .with_field(FieldDefinition::new("Tag", "Tags", "string-map").alias("Tags"))
        .with_field(FieldDefinition::new("Treatment", "Treatments", "object-list"))
        .with_field(FieldDefinition::new("Segment", "Segments", "string-list"))
        .with_field(FieldDefinition::new("Schedule_Frequency", "Schedule.Frequency", "string"))
        .with_field(
            FieldDefinition::new("QuietTime_Start", "Schedule.QuietTime.Start", "string")
                .alias("Schedule_QuietTime_Start"),
        )
        .with_field(
            FieldDefinition::new("QuietTime_End", "Schedule.QuietTime.End", "string")
                .alias("Schedule_QuietTime_End"),
        )
        .with_field(FieldDefinition::new("Limits_Daily", "Limits.Daily", "integer"))
        .with_field(FieldDefinition::new("Limits_Total", "Limits.Total", "integer"))
}

#[allow(dead_code)]
pub fn create_campaign_schema() -> CompiledSchema {
    create_campaign_definition()
        .compile()
        .expect("campaign fixture should compile")
}

/// Same fixture, with one required top-level identifier.
#[allow(dead_code)]
pub fn create_required_id_schema() -> CompiledSchema {
    create_campaign_definition()
        .with_field(FieldDefinition::new("CampaignId", "CampaignId", "string").required())
        .compile()
        .expect("fixture should compile")
}

#[allow(dead_code)]
pub fn path(dotted: &str) -> Path {
    Path::parse(dotted).expect("test path should parse")
}

/// Records every request it receives and answers with a fixed response.
#[allow(dead_code)]
pub struct RecordingTransport {
    pub response: serde_json::Value,
    pub sent: RefCell<Vec<Request>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new(response: serde_json::Value) -> Self {
        Self {
            response,
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for RecordingTransport {
    type Error = TransportFailure;

    fn send(&self, request: &Request) -> std::result::Result<serde_json::Value, TransportFailure> {
        self.sent.borrow_mut().push(request.clone());
        Ok(self.response.clone())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("service unavailable: {0}")]
pub struct TransportFailure(pub String);

/// Always fails, counting attempts.
#[allow(dead_code)]
pub struct FailingTransport {
    pub attempts: RefCell<usize>,
}

impl Transport for FailingTransport {
    type Error = TransportFailure;

    fn send(&self, _request: &Request) -> std::result::Result<serde_json::Value, TransportFailure> {
        *self.attempts.borrow_mut() += 1;
        Err(TransportFailure("503".to_string()))
    }
}
