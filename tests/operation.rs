//! Tests for the single-call pipeline: flatten, unflatten, send, project.
mod common;
use common::*;
use kumitate::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::cell::RefCell;

fn campaign_operation() -> Operation {
    Operation::new(create_required_id_schema())
}

fn service_response() -> serde_json::Value {
    json!({
        "CampaignResponse": { "Id": "c-1", "State": { "CampaignStatus": "SCHEDULED" } },
        "RequestId": "r-42"
    })
}

#[test]
fn test_invoke_returns_primary_output_by_default() {
    let operation = campaign_operation();
    let transport = RecordingTransport::new(service_response());
    let parameters = Parameters::new()
        .bind("CampaignId", "c-1")
        .bind("QuietTime_Start", "02:30");

    let output = operation
        .invoke(&transport, &parameters, &Projection::default())
        .unwrap();

    assert_eq!(
        output,
        json!({ "Id": "c-1", "State": { "CampaignStatus": "SCHEDULED" } })
    );
    assert_eq!(transport.sent_count(), 1);

    let sent = transport.sent.borrow();
    assert_eq!(sent[0].operation, "WriteCampaign");
    assert_eq!(
        sent[0].body,
        json!({
            "CampaignId": "c-1",
            "Schedule": { "QuietTime": { "Start": "02:30" } }
        })
    );
}

#[test]
fn test_invoke_with_star_returns_full_response() {
    let operation = campaign_operation();
    let transport = RecordingTransport::new(service_response());
    let parameters = Parameters::new().bind("CampaignId", "c-1");

    let star = Projection::new(Some("*"), false).unwrap();
    assert_eq!(
        operation.invoke(&transport, &parameters, &star).unwrap(),
        service_response()
    );

    let switch = Projection::new(None, true).unwrap();
    assert_eq!(
        operation.invoke(&transport, &parameters, &switch).unwrap(),
        service_response()
    );
    assert_eq!(transport.sent_count(), 2);
}

#[test]
fn test_invoke_with_field_selector() {
    let operation = campaign_operation();
    let transport = RecordingTransport::new(service_response());
    let parameters = Parameters::new().bind("CampaignId", "c-1");

    let status = Projection::new(Some("CampaignResponse.State.CampaignStatus"), false).unwrap();
    assert_eq!(
        operation.invoke(&transport, &parameters, &status).unwrap(),
        json!("SCHEDULED")
    );

    let missing = Projection::new(Some("CampaignResponse.Nope"), false).unwrap();
    assert_eq!(
        operation.invoke(&transport, &parameters, &missing).unwrap(),
        serde_json::Value::Null
    );
}

#[test]
fn test_echo_selector_returns_parameter_without_sending() {
    let operation = campaign_operation();
    let transport = RecordingTransport::new(service_response());
    let parameters = Parameters::new()
        .bind("CampaignId", "c-1")
        .bind("Limits_Daily", 0i64);

    let echo_id = Projection::new(Some("^campaignid"), false).unwrap();
    assert_eq!(
        operation.invoke(&transport, &parameters, &echo_id).unwrap(),
        json!("c-1")
    );

    let echo_daily = Projection::new(Some("^Limits_Daily"), false).unwrap();
    assert_eq!(
        operation.invoke(&transport, &parameters, &echo_daily).unwrap(),
        json!(0)
    );

    let echo_unbound = Projection::new(Some("^Name"), false).unwrap();
    assert_eq!(
        operation.invoke(&transport, &parameters, &echo_unbound).unwrap(),
        serde_json::Value::Null
    );

    assert_eq!(transport.sent_count(), 0);
}

#[test]
fn test_echo_still_validates_parameters() {
    let operation = campaign_operation();
    let transport = RecordingTransport::new(service_response());
    let parameters = Parameters::new().bind("Name", "spring-sale");

    let echo = Projection::new(Some("^Name"), false).unwrap();
    match operation.invoke(&transport, &parameters, &echo) {
        Err(InvokeError::Configuration(ConfigurationError::MissingRequiredParameter(name))) => {
            assert_eq!(name, "CampaignId")
        }
        other => panic!("Expected MissingRequiredParameter, got {:?}", other),
    }
    assert_eq!(transport.sent_count(), 0);
}

#[test]
fn test_conflicting_selectors_are_rejected() {
    assert!(matches!(
        Projection::new(Some("^CampaignId"), true),
        Err(ConfigurationError::InvalidSelector { .. })
    ));
    assert!(matches!(
        Projection::new(Some("CampaignResponse.Id"), true),
        Err(ConfigurationError::InvalidSelector { .. })
    ));
    assert_eq!(
        Projection::new(Some("*"), true).unwrap().selector(),
        &Selector::FullResponse
    );
}

#[test]
fn test_echo_of_unknown_parameter_fails_before_send() {
    let operation = campaign_operation();
    let transport = RecordingTransport::new(service_response());
    let parameters = Parameters::new().bind("CampaignId", "c-1");

    let echo = Projection::new(Some("^NoSuchThing"), false).unwrap();
    match operation.invoke(&transport, &parameters, &echo) {
        Err(InvokeError::Configuration(ConfigurationError::InvalidSelector { selector, message })) => {
            assert_eq!(selector, "^NoSuchThing");
            assert!(message.contains("WriteCampaign"));
        }
        other => panic!("Expected InvalidSelector, got {:?}", other),
    }
    assert_eq!(transport.sent_count(), 0);
}

#[test]
fn test_configuration_errors_never_reach_the_transport() {
    let operation = campaign_operation();
    let transport = RecordingTransport::new(service_response());

    let unknown = Parameters::new().bind("CampaignId", "c-1").bind("Bogus", "x");
    assert!(matches!(
        operation.invoke(&transport, &unknown, &Projection::default()),
        Err(InvokeError::Configuration(ConfigurationError::UnknownParameter(_)))
    ));

    let mismatched = Parameters::new().bind("CampaignId", "c-1").bind("Limits_Daily", "ten");
    assert!(matches!(
        operation.invoke(&transport, &mismatched, &Projection::default()),
        Err(InvokeError::Configuration(ConfigurationError::KindMismatch { .. }))
    ));

    assert_eq!(transport.sent_count(), 0);
}

#[test]
fn test_transport_error_is_passed_through_after_one_attempt() {
    let operation = campaign_operation();
    let transport = FailingTransport {
        attempts: RefCell::new(0),
    };
    let parameters = Parameters::new().bind("CampaignId", "c-1");

    match operation.invoke(&transport, &parameters, &Projection::default()) {
        Err(InvokeError::Transport(failure)) => {
            assert_eq!(failure, TransportFailure("503".to_string()))
        }
        other => panic!("Expected Transport error, got {:?}", other),
    }
    assert_eq!(*transport.attempts.borrow(), 1);
}

#[test]
fn test_invoke_raw_parses_untyped_parameters() {
    let operation = campaign_operation();
    let transport = RecordingTransport::new(service_response());
    let raw = RawParameters::from_json_str(
        r#"{ "CampaignId": "c-1", "Segment": "seg-1", "Limits_Total": null }"#,
    )
    .unwrap();

    let projection = Projection::new(Some("RequestId"), false).unwrap();
    assert_eq!(
        operation.invoke_raw(&transport, &raw, &projection).unwrap(),
        json!("r-42")
    );
    assert_eq!(
        transport.sent.borrow()[0].body,
        json!({ "CampaignId": "c-1", "Segments": ["seg-1"] })
    );
}

#[test]
fn test_primary_without_primary_output_returns_full_response() {
    let schema = SchemaDefinition::new("Ping")
        .with_field(FieldDefinition::new("Message", "Message", "string"))
        .compile()
        .unwrap();
    let operation = Operation::new(schema);
    let transport = RecordingTransport::new(json!({ "Pong": true }));

    let output = operation
        .invoke(&transport, &Parameters::new(), &Projection::default())
        .unwrap();
    assert_eq!(output, json!({ "Pong": true }));
    assert_eq!(transport.sent.borrow()[0].body, json!({}));
}

#[test]
fn test_prepare_builds_request_without_sending() {
    let operation = campaign_operation();
    let request = operation
        .prepare(
            &Parameters::new()
                .bind("CampaignId", "c-1")
                .bind("Limits_Daily", 0i64)
                .bind("Tag", std::collections::BTreeMap::from([(
                    "team".to_string(),
                    "growth".to_string(),
                )])),
        )
        .unwrap();

    assert_eq!(request.operation, "WriteCampaign");
    assert_eq!(
        request.body,
        json!({
            "CampaignId": "c-1",
            "Limits": { "Daily": 0 },
            "Tags": { "team": "growth" }
        })
    );
}

#[test]
fn test_operation_is_reusable_across_calls() {
    let operation = campaign_operation();
    let transport = RecordingTransport::new(service_response());

    let first = Parameters::new().bind("CampaignId", "c-1").bind("Name", "a");
    let second = Parameters::new().bind("CampaignId", "c-2");
    operation.invoke(&transport, &first, &Projection::default()).unwrap();
    operation.invoke(&transport, &second, &Projection::default()).unwrap();

    let sent = transport.sent.borrow();
    assert_eq!(sent[1].body, json!({ "CampaignId": "c-2" }));
}
