//! # Table-Driven Engine
//!
//! The only code that interprets [`ObjectSchema`] tables. Two passes share
//! the same walk over the rules:
//!
//! - [`check`] reads a candidate and reports [`FieldIssue`]s. It never
//!   changes what it reports on: a clamped or defaulted value is never
//!   re-checked in place of the original.
//! - [`repair`] builds a fresh object that satisfies every rule it can:
//!   defaults filled, numbers clamped, text truncated, invalid words
//!   replaced, malformed formatted values dropped, unknown keys removed.
//!
//! Paths use dot notation for nested objects (`metadata.anchorType`) and
//! `name[i]` for list items (`actions[0].label`). The root is `""`.

use serde_json::{Map, Value};

use cosmo_core::{HexColor, IdGenerator, Timestamp};

use crate::constraints::{json_number, FieldKind, FieldRule, ObjectSchema};
use crate::issue::FieldIssue;

/// The discriminating key of tagged records. Tolerated at the root.
pub const TYPE_TAG: &str = "type";

// ─── check ───────────────────────────────────────────────────────────

/// Report every issue of `candidate` against `schema`.
pub fn check(schema: &ObjectSchema, candidate: &Value) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    match candidate.as_object() {
        Some(map) => check_object(schema, map, "", &mut issues),
        None => issues.push(FieldIssue::error(
            "",
            format!("expected a JSON object, got {}", json_type(candidate)),
        )),
    }
    issues
}

fn check_object(schema: &ObjectSchema, map: &Map<String, Value>, path: &str, out: &mut Vec<FieldIssue>) {
    for rule in schema.fields {
        let field = join(path, rule.name);
        match map.get(rule.name) {
            Some(Value::Null) if rule.nullable => {}
            None | Some(Value::Null) => {
                if rule.required {
                    out.push(FieldIssue::error(field, "is required"));
                }
            }
            Some(value) => check_value(rule, value, &field, out),
        }
    }

    for key in map.keys() {
        let tolerated = path.is_empty() && key == TYPE_TAG;
        if !tolerated && !schema.declares(key) {
            out.push(FieldIssue::warning(
                join(path, key),
                format!("is not a {} field and will be dropped", schema.name),
            ));
        }
    }

    for rule in schema.rules {
        if let Some(message) = (rule.check)(map) {
            out.push(FieldIssue {
                field: join(path, rule.field),
                message,
                severity: rule.severity,
            });
        }
    }
}

fn check_value(rule: &FieldRule, value: &Value, field: &str, out: &mut Vec<FieldIssue>) {
    let mismatch = || {
        FieldIssue::error(
            field,
            format!("expected {}, got {}", rule.kind.expected(), json_type(value)),
        )
    };

    match rule.kind {
        FieldKind::Identifier { max_len, .. } => match value.as_str() {
            Some(s) if s.trim().is_empty() => out.push(FieldIssue::error(field, "must not be empty")),
            Some(s) => check_length(s, max_len, field, out),
            None => out.push(mismatch()),
        },
        FieldKind::Text { max_len } => match value.as_str() {
            Some(s) if s.trim().is_empty() && (rule.required || rule.non_empty) => {
                out.push(FieldIssue::error(field, "must not be empty"))
            }
            Some(s) => check_length(s, max_len, field, out),
            None => out.push(mismatch()),
        },
        FieldKind::Number { range, integer } => match value.as_f64() {
            Some(n) if integer && n.fract() != 0.0 => {
                out.push(FieldIssue::error(field, format!("{n} is not a whole number")))
            }
            Some(n) if !range.contains(n) => out.push(FieldIssue::warning(
                field,
                format!("{n} is outside the recommended range {range}"),
            )),
            Some(_) => {}
            None => out.push(mismatch()),
        },
        FieldKind::Boolean => {
            if !value.is_boolean() {
                out.push(mismatch());
            }
        }
        FieldKind::Choice { vocabulary, options } => match value.as_str() {
            Some(s) if options.contains(&s) => {}
            Some(s) => out.push(FieldIssue::error(
                field,
                format!("{s:?} is not a valid {vocabulary}; expected one of: {}", options.join(", ")),
            )),
            None => out.push(mismatch()),
        },
        FieldKind::HexColor => match value.as_str() {
            Some(s) if HexColor::is_valid(s) => {}
            Some(s) => out.push(FieldIssue::error(
                field,
                format!("{s:?} is not a hex color (expected #rgb or #rrggbb)"),
            )),
            None => out.push(mismatch()),
        },
        FieldKind::Timestamp => match value.as_str() {
            Some(s) if s.trim().is_empty() && rule.required => {
                out.push(FieldIssue::error(field, "must not be empty"))
            }
            Some(s) => {
                if let Err(e) = Timestamp::parse(s) {
                    out.push(FieldIssue::error(field, e.to_string()));
                }
            }
            None => out.push(mismatch()),
        },
        FieldKind::Object(schema) => match value.as_object() {
            Some(map) => check_object(schema, map, field, out),
            None => out.push(mismatch()),
        },
        FieldKind::List { item, min, max } => match value.as_array() {
            Some(items) => {
                if items.len() > max {
                    out.push(FieldIssue::error(
                        field,
                        format!("has {} items; at most {max} allowed", items.len()),
                    ));
                } else if items.len() < min {
                    out.push(FieldIssue::error(
                        field,
                        format!("has {} items; at least {min} required", items.len()),
                    ));
                }
                for (i, entry) in items.iter().enumerate() {
                    let entry_path = format!("{field}[{i}]");
                    match entry.as_object() {
                        Some(map) => check_object(item, map, &entry_path, out),
                        None => out.push(FieldIssue::error(
                            entry_path,
                            format!("expected {} object, got {}", item.name, json_type(entry)),
                        )),
                    }
                }
            }
            None => out.push(mismatch()),
        },
    }
}

fn check_length(s: &str, max_len: usize, field: &str, out: &mut Vec<FieldIssue>) {
    let len = s.chars().count();
    if len > max_len {
        out.push(FieldIssue::error(
            field,
            format!("is {len} characters; maximum is {max_len}"),
        ));
    }
}

// ─── repair ──────────────────────────────────────────────────────────

/// Build the repaired form of `candidate`. A non-object is treated as `{}`.
///
/// `id_prefix` names the component kind for identifiers declared without a
/// prefix of their own.
pub fn repair(
    schema: &ObjectSchema,
    candidate: &Value,
    id_prefix: &str,
    ids: &dyn IdGenerator,
) -> Map<String, Value> {
    let empty = Map::new();
    let map = candidate.as_object().unwrap_or(&empty);
    repair_object(schema, map, id_prefix, ids)
}

fn repair_object(
    schema: &ObjectSchema,
    map: &Map<String, Value>,
    id_prefix: &str,
    ids: &dyn IdGenerator,
) -> Map<String, Value> {
    let mut out = Map::new();
    for rule in schema.fields {
        let repaired = match map.get(rule.name) {
            Some(Value::Null) if rule.nullable => Some(Value::Null),
            None | Some(Value::Null) => None,
            Some(value) => repair_value(rule, value, id_prefix, ids),
        };
        let value = repaired.or_else(|| fallback(rule, &out, id_prefix, ids));
        if let Some(value) = value {
            out.insert(rule.name.to_string(), value);
        }
    }
    for rule in schema.rules {
        (rule.repair)(&mut out);
    }
    out
}

fn fallback(
    rule: &FieldRule,
    siblings: &Map<String, Value>,
    id_prefix: &str,
    ids: &dyn IdGenerator,
) -> Option<Value> {
    match rule.kind {
        FieldKind::Identifier { prefix, .. } => {
            Some(Value::String(ids.next_id(prefix.unwrap_or(id_prefix))))
        }
        _ => rule.default.resolve(siblings),
    }
}

fn repair_value(rule: &FieldRule, value: &Value, id_prefix: &str, ids: &dyn IdGenerator) -> Option<Value> {
    match rule.kind {
        FieldKind::Identifier { max_len, .. } | FieldKind::Text { max_len } => {
            let s = truncate(&scalar_text(value)?, max_len);
            (!s.trim().is_empty()).then_some(Value::String(s))
        }
        FieldKind::Number { range, integer } => {
            let n = numeric(value)?;
            let n = if integer { n.round() } else { n };
            Some(json_number(range.clamp(n)))
        }
        FieldKind::Boolean => match value {
            Value::Bool(b) => Some(Value::Bool(*b)),
            Value::String(s) if s == "true" => Some(Value::Bool(true)),
            Value::String(s) if s == "false" => Some(Value::Bool(false)),
            _ => None,
        },
        FieldKind::Choice { options, .. } => value
            .as_str()
            .filter(|s| options.contains(s))
            .map(|s| Value::String(s.to_string())),
        FieldKind::HexColor => value
            .as_str()
            .filter(|s| HexColor::is_valid(s))
            .map(|s| Value::String(s.to_string())),
        FieldKind::Timestamp => value
            .as_str()
            .filter(|s| Timestamp::parse(s).is_ok())
            .map(|s| Value::String(s.to_string())),
        FieldKind::Object(schema) => value
            .as_object()
            .map(|map| Value::Object(repair_object(schema, map, id_prefix, ids))),
        FieldKind::List { item, max, .. } => value.as_array().map(|items| {
            Value::Array(
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .take(max)
                    .map(|map| Value::Object(repair_object(item, map, id_prefix, ids)))
                    .collect(),
            )
        }),
    }
}

/// Strings as is; numbers and booleans rendered; anything else rejected.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// First `max_len` characters of `s`.
pub fn truncate(s: &str, max_len: usize) -> String {
    s.chars().take(max_len).collect()
}

/// JSON type name for diagnostics.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}
