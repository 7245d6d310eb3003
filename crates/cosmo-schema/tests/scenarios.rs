//! End-to-end validate/sanitize scenarios for individual component kinds.

use std::sync::Arc;

use serde_json::{json, Value};

use cosmo_core::vocab::{BadgeIcon, CardVariant, CornerPosition, WeatherCondition};
use cosmo_core::{is_generated_id, ComponentKind, SequentialIds};
use cosmo_schema::records::{
    ActionBar, ActivityRing, ContextBadge, EventCard, HudCard, ProgressRing, QuickSettings,
    StatusIndicator, Timer, WeatherWidget,
};
use cosmo_schema::{ComponentSchema, Validator};

fn validator<R: ComponentSchema>() -> Validator<R> {
    Validator::with_id_generator(Arc::new(SequentialIds::new()))
}

fn badge() -> Value {
    json!({
        "id": "badge-1",
        "label": "Status",
        "variant": "info",
        "icon": "info",
        "position": "top-right",
        "dismissible": true,
        "pulse": false,
        "autoDismissMs": null
    })
}

fn with(mut base: Value, key: &str, value: Value) -> Value {
    base[key] = value;
    base
}

// ─── ContextBadge ────────────────────────────────────────────────────

#[test]
fn well_formed_badge_is_valid() {
    let result = validator::<ContextBadge>().validate(&badge());
    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn empty_label_is_an_error_on_label() {
    let result = validator::<ContextBadge>().validate(&with(badge(), "label", json!("")));
    assert!(!result.valid);
    assert!(result.has_error("label"));
    assert!(!result.has_error("id"));
}

#[test]
fn contextual_color_must_be_hex() {
    let v = validator::<ContextBadge>();
    let bad = v.validate(&with(badge(), "contextualColor", json!("not-a-color")));
    assert!(bad.has_error("contextualColor"));

    let good = v.validate(&with(badge(), "contextualColor", json!("#ff5500")));
    assert!(good.valid);
}

#[test]
fn sanitize_fills_badge_defaults() {
    let record = validator::<ContextBadge>().sanitize(&json!({"label": "Test"}));
    assert!(is_generated_id(&record.id, "badge"), "id {}", record.id);
    assert_eq!(record.variant, CardVariant::Neutral);
    assert_eq!(record.icon, BadgeIcon::Plain);
    assert_eq!(record.position, CornerPosition::TopRight);
    assert!(record.dismissible);
    assert!(!record.pulse);
    assert_eq!(record.auto_dismiss_ms, None);
}

#[test]
fn invalid_variant_is_rejected_then_defaulted() {
    let candidate = with(badge(), "variant", json!("not-a-real-variant"));
    let result = validator::<ContextBadge>().validate(&candidate);
    assert!(!result.valid);
    assert!(result.has_error("variant"));
    assert_eq!(result.sanitized.unwrap().variant, CardVariant::Neutral);
}

#[test]
fn malformed_color_is_dropped_by_sanitize() {
    let record = validator::<ContextBadge>().sanitize(&with(badge(), "contextualColor", json!("red")));
    assert_eq!(record.contextual_color, None);
}

// ─── ProgressRing / StatusIndicator ──────────────────────────────────

#[test]
fn ring_value_is_clamped() {
    let record = validator::<ProgressRing>().sanitize(&json!({"id": "r1", "value": 150}));
    assert!(record.value <= 100.0);
    assert_eq!(record.value, 100.0);
}

#[test]
fn out_of_range_value_warns_but_validates() {
    let result = validator::<ProgressRing>().validate(&json!({"id": "r1", "value": -5}));
    assert!(result.valid);
    assert!(result.has_warning("value"));
}

#[test]
fn indicator_pulse_follows_state() {
    let v = validator::<StatusIndicator>();
    assert!(v.sanitize(&json!({"id": "i1", "state": "loading"})).pulse);
    assert!(!v.sanitize(&json!({"id": "i1", "state": "active"})).pulse);
    assert!(!v.sanitize(&json!({"id": "i1", "state": "loading", "pulse": false})).pulse);
}

// ─── HUDCard ─────────────────────────────────────────────────────────

#[test]
fn urgent_card_cannot_be_dismissed_or_auto_hidden() {
    let candidate = json!({
        "id": "hud-9",
        "title": "Battery critical",
        "content": "Connect a charger now",
        "priority": 5,
        "dismissible": true,
        "autoHideAfterSeconds": 10
    });
    let result = validator::<HudCard>().validate(&candidate);
    assert!(result.valid);
    assert!(result.has_warning("dismissible"));
    assert!(result.has_warning("autoHideAfterSeconds"));

    let card = result.sanitized.unwrap();
    assert!(!card.dismissible);
    assert_eq!(card.auto_hide_after_seconds, None);
}

#[test]
fn urgent_card_defaults_to_pinned() {
    let card = validator::<HudCard>().sanitize(&json!({"title": "t", "content": "c", "priority": 4}));
    assert!(!card.dismissible);
    let card = validator::<HudCard>().sanitize(&json!({"title": "t", "content": "c"}));
    assert!(card.dismissible);
    assert_eq!(card.priority, 3);
}

#[test]
fn missing_content_survives_as_residual_error() {
    let v = validator::<HudCard>();
    let card = v.sanitize(&json!({"title": "Hello"}));
    assert_eq!(card.content, "");
    let again = v.validate(&serde_json::to_value(&card).unwrap());
    assert_eq!(again.errors.len(), 1);
    assert!(again.has_error("content"));
}

#[test]
fn too_many_actions_error_then_truncate() {
    let actions: Vec<Value> = (0..4)
        .map(|i| json!({"label": format!("A{i}"), "action": format!("do-{i}")}))
        .collect();
    let candidate = json!({"id": "h", "title": "t", "content": "c", "actions": actions});
    let result = validator::<HudCard>().validate(&candidate);
    assert!(result.has_error("actions"));
    let card = result.sanitized.unwrap();
    assert_eq!(card.actions.len(), 2);
    assert_eq!(card.actions[1].label, "A1");
}

#[test]
fn action_items_report_indexed_paths() {
    let candidate = json!({
        "id": "h",
        "title": "t",
        "content": "c",
        "actions": [{"label": "Open", "action": "open"}, {"label": "", "action": "close"}]
    });
    let result = validator::<HudCard>().validate(&candidate);
    assert!(result.has_error("actions[1].label"));
    assert!(!result.mentions("actions[0].label"));
}

#[test]
fn metadata_is_checked_with_dotted_paths() {
    let candidate = json!({
        "id": "h",
        "title": "t",
        "content": "c",
        "metadata": {"anchorType": "orbit", "followTarget": "", "distance": 40}
    });
    let result = validator::<HudCard>().validate(&candidate);
    assert!(result.has_error("metadata.anchorType"));
    assert!(result.has_error("metadata.followTarget"));
    assert!(result.has_warning("metadata.distance"));

    let meta = result.sanitized.unwrap().metadata.unwrap();
    assert_eq!(meta.distance, Some(10.0));
    assert_eq!(meta.follow_target, None);
}

#[test]
fn over_long_title_is_an_error_and_truncated() {
    let title = "x".repeat(75);
    let result = validator::<HudCard>().validate(&json!({"id": "h", "title": title, "content": "c"}));
    assert!(result.has_error("title"));
    assert_eq!(result.sanitized.unwrap().title.chars().count(), 60);
}

// ─── Cross-field rules on other kinds ────────────────────────────────

#[test]
fn timer_warning_cannot_exceed_duration() {
    let result = validator::<Timer>().validate(&json!({"id": "t", "durationSeconds": 60, "warnAtSeconds": 90}));
    assert!(result.valid);
    assert!(result.has_warning("warnAtSeconds"));
    assert_eq!(result.sanitized.unwrap().warn_at_seconds, Some(60.0));
}

#[test]
fn event_end_before_start_is_dropped() {
    let candidate = json!({
        "id": "e",
        "title": "Standup",
        "startTime": "2026-06-01T09:00:00Z",
        "endTime": "2026-06-01T08:45:00Z"
    });
    let result = validator::<EventCard>().validate(&candidate);
    assert!(result.valid);
    assert!(result.has_warning("endTime"));
    assert_eq!(result.sanitized.unwrap().end_time, None);
}

#[test]
fn event_timestamps_must_parse() {
    let result = validator::<EventCard>().validate(&json!({"id": "e", "title": "x", "startTime": "noon"}));
    assert!(result.has_error("startTime"));
    assert_eq!(result.sanitized.unwrap().start_time, "");
}

// ─── Required fallbacks and list items ───────────────────────────────

#[test]
fn weather_condition_falls_back_to_cloudy() {
    let record = validator::<WeatherWidget>().sanitize(&json!({"temperature": "21.5", "condition": "hail"}));
    assert_eq!(record.condition, WeatherCondition::Cloudy);
    assert_eq!(record.temperature, 21.5);
}

#[test]
fn setting_items_get_their_own_ids() {
    let record = validator::<QuickSettings>().sanitize(&json!({
        "items": [{"label": "Wi-Fi"}, {"id": "bt", "label": "Bluetooth", "kind": "slider", "value": 300}]
    }));
    assert_eq!(record.id, "settings-1");
    assert_eq!(record.items[0].id, "setting-2");
    assert_eq!(record.items[1].id, "bt");
    assert_eq!(record.items[1].value, Some(100.0));
    assert_eq!(record.columns, 3);
}

#[test]
fn ring_segments_drop_non_objects() {
    let record = validator::<ActivityRing>().sanitize(&json!({
        "rings": ["move", {"label": "Move", "progress": 120}, null]
    }));
    assert_eq!(record.rings.len(), 1);
    assert_eq!(record.rings[0].progress, 100.0);
}

#[test]
fn empty_action_bar_stays_invalid_after_sanitize() {
    let v = validator::<ActionBar>();
    let bar = v.sanitize(&json!({}));
    assert!(bar.actions.is_empty());
    let again = v.validate(&serde_json::to_value(&bar).unwrap());
    assert!(again.has_error("actions"));
}

#[test]
fn sequential_sanitize_yields_distinct_ids() {
    for kind in ComponentKind::all() {
        let ids = Arc::new(SequentialIds::new());
        let a = cosmo_schema::sanitize_component(*kind, &json!({}), ids.clone());
        let b = cosmo_schema::sanitize_component(*kind, &json!({}), ids);
        assert_ne!(a.id(), b.id());
        assert!(is_generated_id(a.id(), kind.id_prefix()));
    }
}
