//! Tests for the success envelope.

use remora_core::SuccessEnvelope;
use serde_json::{Value, json};

#[test]
fn envelope_wraps_payload_with_metadata() {
    let envelope = SuccessEnvelope::new(Some("weekly-digest"), json!({"jobs": []}), 200);
    let value: Value = serde_json::from_str(&envelope.to_json()).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["workflow"], "weekly-digest");
    assert_eq!(value["result"]["jobs"], json!([]));
    assert_eq!(value["status"], 200);
}

#[test]
fn workflow_defaults_when_unset() {
    let envelope = SuccessEnvelope::new(None, json!(null), 204);
    let value: Value = serde_json::from_str(&envelope.to_json()).unwrap();
    assert_eq!(value["workflow"], "default");
}

#[test]
fn executed_at_is_rfc3339_utc() {
    let envelope = SuccessEnvelope::new(None, json!({}), 200);
    let value: Value = serde_json::from_str(&envelope.to_json()).unwrap();
    let stamp = value["executedAt"].as_str().unwrap();
    assert!(stamp.contains('T'));
    assert!(stamp.ends_with('Z'));
}
