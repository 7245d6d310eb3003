//! # Constraint Tables
//!
//! One static [`ObjectSchema`] per component kind, plus the shared item
//! shapes (actions, settings items, ring segments) and the AR anchoring
//! `metadata` object. Every bound, vocabulary and default the engine
//! enforces is declared here and nowhere else.
//!
//! Vocabulary options come straight from the `cosmo_core::vocab` enums, so
//! a word accepted here is always a word the typed records can hold.

use serde_json::{Map, Value};

use cosmo_core::vocab::{
    ActionStyle, AnchorType, ArrowStyle, AspectRatio, BadgeIcon, CardVariant, CornerPosition,
    Edge, IndicatorState, MediaType, MessagePriority, Orientation, PresenceStatus, ScreenPosition,
    SettingKind, SettingsLayout, TemperatureUnit, TimerMode, TooltipTrigger, WeatherCondition,
};
use cosmo_core::{ComponentKind, Timestamp, Vocabulary};

use crate::constraints::{
    choice, integer, item_id, list, number, record_id, text, CrossFieldRule, DefaultRule as D,
    FieldKind, FieldRule as F, ObjectSchema,
};
use crate::issue::Severity;

/// HUD cards at or above this priority stay on screen until resolved.
pub const URGENT_PRIORITY: f64 = 4.0;

/// Maximum length of URL-valued text fields.
const URL_MAX: usize = 2048;

macro_rules! anchor_metadata {
    () => {
        F::optional("metadata", FieldKind::Object(&ANCHOR_METADATA), D::Absent)
    };
}

// ─── Shared shapes ───────────────────────────────────────────────────

/// AR anchoring hints carried by every kind.
pub static ANCHOR_METADATA: ObjectSchema = ObjectSchema {
    name: "Metadata",
    fields: &[
        F::optional("anchorType", choice::<AnchorType>(), D::Text("screen")),
        F::optional("followTarget", text(64), D::Absent).non_empty(),
        F::optional("distance", number(0.3, 10.0), D::Absent),
    ],
    rules: &[],
};

/// A button on a card or action bar.
pub static ACTION: ObjectSchema = ObjectSchema {
    name: "Action",
    fields: &[
        F::required("label", text(20), D::Text("")),
        F::required("action", text(64), D::Text("")),
        F::optional("style", choice::<ActionStyle>(), D::Text("secondary")),
    ],
    rules: &[],
};

/// One control in a quick-settings panel.
pub static SETTING_ITEM: ObjectSchema = ObjectSchema {
    name: "SettingItem",
    fields: &[
        F::required("id", item_id("setting"), D::Absent),
        F::required("label", text(20), D::Text("")),
        F::optional("kind", choice::<SettingKind>(), D::Text("toggle")),
        F::optional("icon", text(32), D::Absent),
        F::optional("enabled", FieldKind::Boolean, D::Bool(false)),
        F::optional("value", number(0.0, 100.0), D::Null).nullable(),
    ],
    rules: &[],
};

/// One ring of an activity-ring widget.
pub static RING_SEGMENT: ObjectSchema = ObjectSchema {
    name: "RingSegment",
    fields: &[
        F::required("label", text(20), D::Text("")),
        F::required("progress", number(0.0, 100.0), D::Number(0.0)),
        F::optional("color", FieldKind::HexColor, D::Absent),
    ],
    rules: &[],
};

// ─── Component kinds ─────────────────────────────────────────────────

pub static HUD_CARD: ObjectSchema = ObjectSchema {
    name: "HUDCard",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("title", text(60), D::Text("")),
        F::required("content", text(200), D::Text("")),
        F::optional("variant", choice::<CardVariant>(), D::Text("info")),
        F::optional("priority", integer(1.0, 5.0), D::Number(3.0)),
        F::optional("position", choice::<ScreenPosition>(), D::Text("top-right")),
        F::optional("dismissible", FieldKind::Boolean, D::Derived(hud_dismissible)),
        F::optional("autoHideAfterSeconds", number(3.0, 30.0), D::Null).nullable(),
        F::optional("icon", text(32), D::Absent),
        F::optional("actions", list(&ACTION, 0, 2), D::EmptyList),
        anchor_metadata!(),
    ],
    rules: &[
        CrossFieldRule {
            field: "dismissible",
            severity: Severity::Warning,
            check: urgent_dismissible,
            repair: pin_urgent_card,
        },
        CrossFieldRule {
            field: "autoHideAfterSeconds",
            severity: Severity::Warning,
            check: urgent_auto_hide,
            repair: pin_urgent_card,
        },
    ],
};

pub static CONTEXT_BADGE: ObjectSchema = ObjectSchema {
    name: "ContextBadge",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("label", text(30), D::Text("")),
        F::optional("variant", choice::<CardVariant>(), D::Text("neutral")),
        F::optional("icon", choice::<BadgeIcon>(), D::Text("none")),
        F::optional("position", choice::<CornerPosition>(), D::Text("top-right")),
        F::optional("dismissible", FieldKind::Boolean, D::Bool(true)),
        F::optional("pulse", FieldKind::Boolean, D::Bool(false)),
        F::optional("autoDismissMs", number(1000.0, 60000.0), D::Null).nullable(),
        F::optional("contextualColor", FieldKind::HexColor, D::Absent),
        anchor_metadata!(),
    ],
    rules: &[],
};

pub static PROGRESS_RING: ObjectSchema = ObjectSchema {
    name: "ProgressRing",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("value", number(0.0, 100.0), D::Number(0.0)),
        F::optional("size", number(24.0, 200.0), D::Number(48.0)),
        F::optional("strokeWidth", number(1.0, 12.0), D::Number(4.0)),
        F::optional("variant", choice::<CardVariant>(), D::Text("info")),
        F::optional("color", FieldKind::HexColor, D::Absent),
        F::optional("label", text(30), D::Absent),
        F::optional("showValue", FieldKind::Boolean, D::Bool(true)),
        anchor_metadata!(),
    ],
    rules: &[],
};

pub static STATUS_INDICATOR: ObjectSchema = ObjectSchema {
    name: "StatusIndicator",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("state", choice::<IndicatorState>(), D::Text("idle")),
        F::optional("size", number(8.0, 32.0), D::Number(12.0)),
        F::optional("pulse", FieldKind::Boolean, D::Derived(indicator_pulse)),
        F::optional("label", text(40), D::Absent),
        F::optional("color", FieldKind::HexColor, D::Absent),
        anchor_metadata!(),
    ],
    rules: &[],
};

pub static ACTION_BAR: ObjectSchema = ObjectSchema {
    name: "ActionBar",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("actions", list(&ACTION, 1, 4), D::EmptyList),
        F::optional("position", choice::<Edge>(), D::Text("bottom")),
        F::optional("orientation", choice::<Orientation>(), D::Text("horizontal")),
        F::optional("compact", FieldKind::Boolean, D::Bool(false)),
        anchor_metadata!(),
    ],
    rules: &[],
};

pub static TOOLTIP: ObjectSchema = ObjectSchema {
    name: "Tooltip",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("content", text(150), D::Text("")),
        F::optional("trigger", choice::<TooltipTrigger>(), D::Text("hover")),
        F::optional("placement", choice::<Edge>(), D::Text("top")),
        F::optional("delayMs", number(0.0, 2000.0), D::Number(300.0)),
        F::optional("targetId", text(64), D::Absent).non_empty(),
        anchor_metadata!(),
    ],
    rules: &[],
};

pub static MEDIA_CARD: ObjectSchema = ObjectSchema {
    name: "MediaCard",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("title", text(60), D::Text("")),
        F::optional("subtitle", text(80), D::Absent),
        F::optional("mediaType", choice::<MediaType>(), D::Text("image")),
        F::optional("sourceUrl", text(URL_MAX), D::Absent),
        F::optional("aspectRatio", choice::<AspectRatio>(), D::Text("16:9")),
        F::optional("actions", list(&ACTION, 0, 2), D::EmptyList),
        anchor_metadata!(),
    ],
    rules: &[],
};

pub static MINI_PLAYER: ObjectSchema = ObjectSchema {
    name: "MiniPlayer",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("title", text(60), D::Text("")),
        F::optional("artist", text(60), D::Absent),
        F::optional("artworkUrl", text(URL_MAX), D::Absent),
        F::optional("isPlaying", FieldKind::Boolean, D::Bool(false)),
        F::optional("progress", number(0.0, 100.0), D::Number(0.0)),
        F::optional("durationSeconds", number(0.0, 86_400.0), D::Null).nullable(),
        anchor_metadata!(),
    ],
    rules: &[],
};

pub static TIMER: ObjectSchema = ObjectSchema {
    name: "Timer",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("durationSeconds", number(1.0, 86_400.0), D::Number(1.0)),
        F::optional("label", text(30), D::Absent),
        F::optional("mode", choice::<TimerMode>(), D::Text("countdown")),
        F::optional("autoStart", FieldKind::Boolean, D::Bool(false)),
        F::optional("warnAtSeconds", number(0.0, 3600.0), D::Null).nullable(),
        anchor_metadata!(),
    ],
    rules: &[CrossFieldRule {
        field: "warnAtSeconds",
        severity: Severity::Warning,
        check: warning_after_duration,
        repair: cap_warning_at_duration,
    }],
};

pub static MESSAGE_PREVIEW: ObjectSchema = ObjectSchema {
    name: "MessagePreview",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("sender", text(40), D::Text("")),
        F::required("message", text(140), D::Text("")),
        F::optional("timestamp", FieldKind::Timestamp, D::Absent),
        F::optional("avatarUrl", text(URL_MAX), D::Absent),
        F::optional("unreadCount", integer(0.0, 99.0), D::Number(0.0)),
        F::optional("priority", choice::<MessagePriority>(), D::Text("normal")),
        anchor_metadata!(),
    ],
    rules: &[],
};

pub static CONTACT_CARD: ObjectSchema = ObjectSchema {
    name: "ContactCard",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("name", text(50), D::Text("")),
        F::optional("subtitle", text(60), D::Absent),
        F::optional("avatarUrl", text(URL_MAX), D::Absent),
        F::optional("status", choice::<PresenceStatus>(), D::Text("offline")),
        F::optional("actions", list(&ACTION, 0, 3), D::EmptyList),
        anchor_metadata!(),
    ],
    rules: &[],
};

pub static EVENT_CARD: ObjectSchema = ObjectSchema {
    name: "EventCard",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("title", text(60), D::Text("")),
        F::required("startTime", FieldKind::Timestamp, D::Text("")),
        F::optional("endTime", FieldKind::Timestamp, D::Absent),
        F::optional("location", text(80), D::Absent),
        F::optional("allDay", FieldKind::Boolean, D::Bool(false)),
        F::optional("reminderMinutes", integer(0.0, 1440.0), D::Null).nullable(),
        F::optional("color", FieldKind::HexColor, D::Absent),
        anchor_metadata!(),
    ],
    rules: &[CrossFieldRule {
        field: "endTime",
        severity: Severity::Warning,
        check: end_before_start,
        repair: drop_inverted_end,
    }],
};

pub static WEATHER_WIDGET: ObjectSchema = ObjectSchema {
    name: "WeatherWidget",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("temperature", number(-100.0, 150.0), D::Number(0.0)),
        F::optional("unit", choice::<TemperatureUnit>(), D::Text("celsius")),
        F::required("condition", choice::<WeatherCondition>(), D::Text("cloudy")),
        F::optional("location", text(40), D::Absent),
        F::optional("humidity", number(0.0, 100.0), D::Null).nullable(),
        F::optional("compact", FieldKind::Boolean, D::Bool(false)),
        anchor_metadata!(),
    ],
    rules: &[],
};

pub static QUICK_SETTINGS: ObjectSchema = ObjectSchema {
    name: "QuickSettings",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("items", list(&SETTING_ITEM, 1, 8), D::EmptyList),
        F::optional("layout", choice::<SettingsLayout>(), D::Text("grid")),
        F::optional("columns", integer(2.0, 4.0), D::Number(3.0)),
        anchor_metadata!(),
    ],
    rules: &[],
};

pub static ACTIVITY_RING: ObjectSchema = ObjectSchema {
    name: "ActivityRing",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("rings", list(&RING_SEGMENT, 1, 3), D::EmptyList),
        F::optional("size", number(48.0, 240.0), D::Number(120.0)),
        F::optional("showLabels", FieldKind::Boolean, D::Bool(true)),
        anchor_metadata!(),
    ],
    rules: &[],
};

pub static DIRECTION_ARROW: ObjectSchema = ObjectSchema {
    name: "DirectionArrow",
    fields: &[
        F::required("id", record_id(), D::Absent),
        F::required("direction", number(0.0, 360.0), D::Number(0.0)),
        F::optional("distanceMeters", number(0.0, 100_000.0), D::Null).nullable(),
        F::optional("label", text(40), D::Absent),
        F::optional("style", choice::<ArrowStyle>(), D::Text("minimal")),
        F::optional("color", FieldKind::HexColor, D::Absent),
        anchor_metadata!(),
    ],
    rules: &[],
};

/// The constraint table of a component kind.
pub fn schema_for(kind: ComponentKind) -> &'static ObjectSchema {
    match kind {
        ComponentKind::HudCard => &HUD_CARD,
        ComponentKind::ContextBadge => &CONTEXT_BADGE,
        ComponentKind::ProgressRing => &PROGRESS_RING,
        ComponentKind::StatusIndicator => &STATUS_INDICATOR,
        ComponentKind::ActionBar => &ACTION_BAR,
        ComponentKind::Tooltip => &TOOLTIP,
        ComponentKind::MediaCard => &MEDIA_CARD,
        ComponentKind::MiniPlayer => &MINI_PLAYER,
        ComponentKind::Timer => &TIMER,
        ComponentKind::MessagePreview => &MESSAGE_PREVIEW,
        ComponentKind::ContactCard => &CONTACT_CARD,
        ComponentKind::EventCard => &EVENT_CARD,
        ComponentKind::WeatherWidget => &WEATHER_WIDGET,
        ComponentKind::QuickSettings => &QUICK_SETTINGS,
        ComponentKind::ActivityRing => &ACTIVITY_RING,
        ComponentKind::DirectionArrow => &DIRECTION_ARROW,
    }
}

// ─── Contextual defaults ─────────────────────────────────────────────

fn is_urgent(fields: &Map<String, Value>) -> bool {
    fields
        .get("priority")
        .and_then(Value::as_f64)
        .is_some_and(|p| p >= URGENT_PRIORITY)
}

fn hud_dismissible(fields: &Map<String, Value>) -> Value {
    Value::Bool(!is_urgent(fields))
}

fn indicator_pulse(fields: &Map<String, Value>) -> Value {
    let state = fields.get("state").and_then(Value::as_str);
    Value::Bool(state == Some(IndicatorState::Loading.as_str()))
}

// ─── Cross-field rules ───────────────────────────────────────────────

fn urgent_dismissible(fields: &Map<String, Value>) -> Option<String> {
    (is_urgent(fields) && fields.get("dismissible") == Some(&Value::Bool(true))).then(|| {
        format!("cards with priority >= {URGENT_PRIORITY} cannot be dismissed; forced to false")
    })
}

fn urgent_auto_hide(fields: &Map<String, Value>) -> Option<String> {
    let set = fields
        .get("autoHideAfterSeconds")
        .is_some_and(|v| !v.is_null());
    (is_urgent(fields) && set).then(|| {
        format!("cards with priority >= {URGENT_PRIORITY} never auto-hide; value ignored")
    })
}

fn pin_urgent_card(fields: &mut Map<String, Value>) {
    if is_urgent(fields) {
        fields.insert("dismissible".into(), Value::Bool(false));
        fields.insert("autoHideAfterSeconds".into(), Value::Null);
    }
}

fn warning_after_duration(fields: &Map<String, Value>) -> Option<String> {
    let warn = fields.get("warnAtSeconds").and_then(Value::as_f64)?;
    let duration = fields.get("durationSeconds").and_then(Value::as_f64)?;
    (warn > duration).then(|| format!("{warn} exceeds durationSeconds ({duration}); lowered to match"))
}

fn cap_warning_at_duration(fields: &mut Map<String, Value>) {
    let warn = fields.get("warnAtSeconds").and_then(Value::as_f64);
    let duration = fields.get("durationSeconds").and_then(Value::as_f64);
    if let (Some(warn), Some(duration)) = (warn, duration) {
        if warn > duration {
            fields.insert("warnAtSeconds".into(), crate::constraints::json_number(duration));
        }
    }
}

fn parsed_time(fields: &Map<String, Value>, name: &str) -> Option<Timestamp> {
    fields
        .get(name)
        .and_then(Value::as_str)
        .and_then(|s| Timestamp::parse(s).ok())
}

fn end_before_start(fields: &Map<String, Value>) -> Option<String> {
    let start = parsed_time(fields, "startTime")?;
    let end = parsed_time(fields, "endTime")?;
    (end < start).then(|| format!("ends at {end}, before startTime {start}"))
}

fn drop_inverted_end(fields: &mut Map<String, Value>) {
    if end_before_start(fields).is_some() {
        fields.remove("endTime");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tables() -> Vec<&'static ObjectSchema> {
        let mut tables: Vec<_> = ComponentKind::all().iter().map(|k| schema_for(*k)).collect();
        tables.extend([&ANCHOR_METADATA, &ACTION, &SETTING_ITEM, &RING_SEGMENT]);
        tables
    }

    #[test]
    fn every_kind_declares_id_and_metadata() {
        for kind in ComponentKind::all() {
            let schema = schema_for(*kind);
            let id = schema.field("id").unwrap();
            assert!(id.required, "{} id must be required", schema.name);
            assert!(matches!(id.kind, FieldKind::Identifier { prefix: None, .. }));
            assert!(schema.declares("metadata"), "{} lacks metadata", schema.name);
        }
    }

    #[test]
    fn table_names_match_kind_names() {
        for kind in ComponentKind::all() {
            assert_eq!(schema_for(*kind).name, kind.display_name());
        }
    }

    #[test]
    fn choice_defaults_are_in_vocabulary() {
        for table in all_tables() {
            for rule in table.fields {
                if let FieldKind::Choice { options, .. } = rule.kind {
                    match rule.default {
                        D::Text(word) => assert!(
                            options.contains(&word),
                            "{}.{} default {word:?} not in vocabulary",
                            table.name,
                            rule.name
                        ),
                        other => panic!("{}.{} has non-word default {other:?}", table.name, rule.name),
                    }
                }
            }
        }
    }

    #[test]
    fn numeric_defaults_are_in_range() {
        for table in all_tables() {
            for rule in table.fields {
                if let (FieldKind::Number { range, .. }, D::Number(n)) = (rule.kind, rule.default) {
                    assert!(range.contains(n), "{}.{} default {n} outside {range}", table.name, rule.name);
                }
            }
        }
    }

    #[test]
    fn field_names_are_unique_per_table() {
        for table in all_tables() {
            let mut names: Vec<_> = table.fields.iter().map(|r| r.name).collect();
            names.sort_unstable();
            let before = names.len();
            names.dedup();
            assert_eq!(before, names.len(), "{} declares a field twice", table.name);
        }
    }

    #[test]
    fn vocabulary_options_come_from_core_enums() {
        match HUD_CARD.field("variant").unwrap().kind {
            FieldKind::Choice { options, vocabulary } => {
                assert_eq!(options, CardVariant::VALUES);
                assert_eq!(vocabulary, "CardVariant");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn derived_defaults_read_siblings() {
        let mut fields = Map::new();
        fields.insert("priority".into(), Value::from(5));
        assert_eq!(hud_dismissible(&fields), Value::Bool(false));
        fields.insert("priority".into(), Value::from(2));
        assert_eq!(hud_dismissible(&fields), Value::Bool(true));

        let mut fields = Map::new();
        fields.insert("state".into(), Value::from("loading"));
        assert_eq!(indicator_pulse(&fields), Value::Bool(true));
        fields.insert("state".into(), Value::from("active"));
        assert_eq!(indicator_pulse(&fields), Value::Bool(false));
    }
}
