//! # JSON Schema Export
//!
//! Renders a constraint table as a JSON Schema (Draft 2020-12) describing
//! the *sanitized* form of a record: numeric windows become hard bounds,
//! unknown properties are forbidden, and every field sanitize always emits
//! is listed as required. Renderers in other languages can check records
//! against it without linking this crate.
//!
//! The tagged form (with `"type"`) conforms too; the tag is declared as an
//! optional constant.

use serde_json::{json, Map, Value};

use cosmo_core::ComponentKind;

use crate::constraints::{DefaultRule, FieldKind, FieldRule, ObjectSchema};
use crate::engine::TYPE_TAG;
use crate::tables::schema_for;

/// JSON Schema dialect of every exported document.
pub const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

const HEX_COLOR_PATTERN: &str = "^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$";

/// Export the table of `kind`.
pub fn json_schema(kind: ComponentKind) -> Value {
    let mut document = object_schema(schema_for(kind));
    if let Value::Object(doc) = &mut document {
        if let Some(Value::Object(properties)) = doc.get_mut("properties") {
            properties.insert(TYPE_TAG.to_string(), json!({ "const": kind.as_str() }));
        }
        doc.insert("$schema".into(), Value::from(DRAFT_2020_12));
        doc.insert("title".into(), Value::from(kind.display_name()));
    }
    document
}

fn object_schema(schema: &ObjectSchema) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for rule in schema.fields {
        properties.insert(rule.name.to_string(), field_schema(rule));
        if always_emitted(rule) {
            required.push(Value::from(rule.name));
        }
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

fn always_emitted(rule: &FieldRule) -> bool {
    rule.required
        || matches!(rule.kind, FieldKind::Identifier { .. })
        || !matches!(rule.default, DefaultRule::Absent)
}

fn field_schema(rule: &FieldRule) -> Value {
    let mut value = match rule.kind {
        FieldKind::Identifier { max_len, .. } => {
            json!({ "type": "string", "minLength": 1, "maxLength": max_len })
        }
        FieldKind::Text { max_len } => json!({ "type": "string", "maxLength": max_len }),
        FieldKind::Number { range, integer } => {
            let ty = if integer { "integer" } else { "number" };
            json!({ "type": ty, "minimum": range.min, "maximum": range.max })
        }
        FieldKind::Boolean => json!({ "type": "boolean" }),
        FieldKind::Choice { options, .. } => json!({ "type": "string", "enum": options }),
        FieldKind::HexColor => json!({ "type": "string", "pattern": HEX_COLOR_PATTERN }),
        // A required timestamp that could not be repaired is emitted empty.
        FieldKind::Timestamp if rule.required => json!({
            "type": "string",
            "anyOf": [{ "format": "date-time" }, { "maxLength": 0 }],
        }),
        FieldKind::Timestamp => json!({ "type": "string", "format": "date-time" }),
        FieldKind::Object(nested) => object_schema(nested),
        FieldKind::List { item, max, .. } => json!({
            "type": "array",
            "maxItems": max,
            "items": object_schema(item),
        }),
    };
    if rule.nullable {
        if let Some(ty) = value.get_mut("type") {
            *ty = json!([ty.clone(), "null"]);
        }
    }
    value
}
