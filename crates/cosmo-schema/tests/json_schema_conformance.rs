//! Sanitized records conform to the exported JSON Schema of their kind.

use std::sync::Arc;

use serde_json::{json, Value};

use cosmo_core::{ComponentKind, SequentialIds};
use cosmo_schema::{json_schema, sanitize_component};

fn compile(kind: ComponentKind) -> jsonschema::Validator {
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);
    opts.build(&json_schema(kind))
        .unwrap_or_else(|e| panic!("schema for {kind} does not compile: {e}"))
}

fn assert_conforms(kind: ComponentKind, instance: &Value) {
    let validator = compile(kind);
    let errors: Vec<String> = validator.iter_errors(instance).map(|e| e.to_string()).collect();
    assert!(errors.is_empty(), "{kind} record {instance} violates its schema: {errors:?}");
}

fn messy_candidates() -> Vec<Value> {
    vec![
        json!({}),
        json!("not an object"),
        json!({
            "id": "",
            "title": "t".repeat(500),
            "label": 12,
            "priority": 11,
            "value": "999",
            "size": -4,
            "variant": "rainbow",
            "color": "#12",
            "startTime": "2026-02-30T10:00:00Z",
            "actions": [{"label": "x".repeat(40)}, 5, {"action": "a"}, {}, {}],
            "items": [{"label": "Wi-Fi", "value": -1}, "bogus"],
            "rings": [{"progress": 400, "color": "#abcdef"}],
            "metadata": {"anchorType": "moon", "distance": 0.01, "extra": true},
            "bogus": [1, 2, 3]
        }),
        json!({
            "id": "fixture-1",
            "title": "Lunch",
            "content": "Table for two",
            "startTime": "2026-04-01T12:00:00+01:00",
            "endTime": "2026-04-01T13:00:00+01:00",
            "durationSeconds": 300,
            "warnAtSeconds": 30,
            "temperature": 18.5,
            "condition": "sunny",
            "direction": 270,
            "distanceMeters": 120
        }),
    ]
}

#[test]
fn every_kind_exports_a_compilable_schema() {
    for kind in ComponentKind::all() {
        compile(*kind);
    }
}

#[test]
fn sanitized_records_conform_to_their_schema() {
    for kind in ComponentKind::all() {
        for candidate in messy_candidates() {
            let record = sanitize_component(*kind, &candidate, Arc::new(SequentialIds::new()));
            assert_conforms(*kind, &serde_json::to_value(&record).unwrap());
        }
    }
}

#[test]
fn schema_rejects_what_validation_rejects() {
    let validator = compile(ComponentKind::ContextBadge);
    assert!(!validator.is_valid(&json!({"id": "b", "label": "x", "variant": "rainbow"})));
    assert!(!validator.is_valid(&json!({"id": "b", "label": "x", "contextualColor": "red"})));
    assert!(!validator.is_valid(&json!({"id": "b", "label": "x", "glow": true})));
}
