//! Unit tests for core Kumitate types.
mod common;
use common::*;
use kumitate::prelude::*;
use std::collections::BTreeMap;

#[test]
fn test_value_display() {
    assert_eq!(format!("{}", Value::Integer(42)), "42");
    assert_eq!(format!("{}", Value::Float(42.0)), "42");
    assert_eq!(format!("{}", Value::Float(0.5)), "0.5");
    assert_eq!(format!("{}", Value::Float(1e20)), "100000000000000000000");
    assert_eq!(format!("{}", Value::Float(-3.0)), "-3");
    assert_eq!(format!("{}", Value::Boolean(false)), "false");
    assert_eq!(format!("{}", Value::from("02:30")), "\"02:30\"");
    assert_eq!(
        format!("{}", Value::StringList(vec!["a".into(), "b".into()])),
        "[2 item(s)]"
    );
}

#[test]
fn test_value_emptiness_ignores_zero_and_false() {
    assert!(Value::from("").is_empty());
    assert!(Value::StringList(vec![]).is_empty());
    assert!(Value::StringMap(BTreeMap::new()).is_empty());
    assert!(!Value::Integer(0).is_empty());
    assert!(!Value::Float(0.0).is_empty());
    assert!(!Value::Boolean(false).is_empty());
}

#[test]
fn test_value_to_json() {
    assert_eq!(Value::Integer(0).to_json(), serde_json::json!(0));
    assert_eq!(Value::Boolean(false).to_json(), serde_json::json!(false));
    assert_eq!(Value::Float(f64::NAN).to_json(), serde_json::Value::Null);

    let mut tags = BTreeMap::new();
    tags.insert("team".to_string(), "growth".to_string());
    assert_eq!(
        Value::StringMap(tags).to_json(),
        serde_json::json!({ "team": "growth" })
    );
}

#[test]
fn test_slot_from_option() {
    assert_eq!(Slot::from(None::<i64>), Slot::Unbound);
    assert_eq!(Slot::from(Some(0i64)), Slot::Bound(Value::Integer(0)));
    assert!(Slot::bound(false).is_bound());
    assert!(!Slot::default().is_bound());
}

#[test]
fn test_path_parse_and_display() {
    let p = path("Schedule.QuietTime.Start");
    assert_eq!(p.len(), 3);
    assert_eq!(p.first(), "Schedule");
    assert_eq!(p.last(), "Start");
    assert_eq!(p.to_string(), "Schedule.QuietTime.Start");
    assert_eq!(p.parent(), Some(path("Schedule.QuietTime")));
    assert_eq!(path("Schedule").parent(), None);
    assert_eq!(path("Schedule").child("Frequency"), path("Schedule.Frequency"));
    assert!(p.starts_with(&path("Schedule")));
    assert!(!p.starts_with(&path("Limits")));
}

#[test]
fn test_path_rejects_empty_segments() {
    for bad in ["", ".", "a..b", ".a", "a."] {
        match Path::parse(bad) {
            Err(SchemaError::MalformedPath(text)) => assert_eq!(text, bad),
            other => panic!("expected MalformedPath for {:?}, got {:?}", bad, other),
        }
    }
}

#[test]
fn test_path_serde_uses_dotted_form() {
    let p = path("Limits.Daily");
    assert_eq!(serde_json::to_string(&p).unwrap(), "\"Limits.Daily\"");
    let back: Path = serde_json::from_str("\"Limits.Daily\"").unwrap();
    assert_eq!(back, p);
    assert!(serde_json::from_str::<Path>("\"Limits..Daily\"").is_err());
}

#[test]
fn test_leaf_kind_display() {
    assert_eq!(LeafKind::StringMap.to_string(), "string-map");
    assert_eq!(LeafKind::ObjectList.to_string(), "object-list");
}

#[test]
fn test_selector_parsing() {
    assert_eq!("*".parse::<Selector>().unwrap(), Selector::FullResponse);
    assert_eq!(
        "^CampaignId".parse::<Selector>().unwrap(),
        Selector::EchoParameter("CampaignId".to_string())
    );
    assert_eq!(
        "CampaignResponse.Id".parse::<Selector>().unwrap(),
        Selector::Field(path("CampaignResponse.Id"))
    );
    assert!(matches!(
        "^".parse::<Selector>(),
        Err(ConfigurationError::InvalidSelector { .. })
    ));
    assert!(matches!(
        "a..b".parse::<Selector>(),
        Err(ConfigurationError::InvalidSelector { .. })
    ));
}

#[test]
fn test_error_display() {
    let err = SchemaError::DuplicatePath {
        path: "Limits.Daily".to_string(),
        first: "Limits_Daily".to_string(),
        second: "DailyLimit".to_string(),
    };
    assert!(err.to_string().contains("Limits.Daily"));
    assert!(err.to_string().contains("DailyLimit"));

    let config_err = ConfigurationError::KindMismatch {
        parameter: "Limits_Daily".to_string(),
        expected: LeafKind::Integer,
        found: "string \"ten\"".to_string(),
    };
    assert!(config_err.to_string().contains("Limits_Daily"));
    assert!(config_err.to_string().contains("integer"));
    assert!(config_err.to_string().contains("ten"));

    let invoke_err: InvokeError<TransportFailure> =
        InvokeError::Transport(TransportFailure("503".to_string()));
    assert!(invoke_err.to_string().contains("503"));
}
