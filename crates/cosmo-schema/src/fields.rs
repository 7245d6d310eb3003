//! # Repaired-Field Accessor
//!
//! Typed records are built from the output of [`crate::engine::repair`],
//! in which every declared field already has the right JSON shape. The
//! getters here are therefore infallible: when a value is somehow missing
//! they fall back to the table's own default for that field.

use serde_json::{Map, Value};

use cosmo_core::{HexColor, Vocabulary};

use crate::constraints::{DefaultRule, ObjectSchema};

/// Read-only view of a repaired object together with its table.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    schema: &'a ObjectSchema,
}

impl<'a> Fields<'a> {
    /// Wrap a repaired object.
    pub fn new(map: &'a Map<String, Value>, schema: &'a ObjectSchema) -> Self {
        Self { map, schema }
    }

    /// The table the object was repaired against.
    pub fn schema(&self) -> &'a ObjectSchema {
        self.schema
    }

    fn value(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|v| !v.is_null())
    }

    fn default_number(&self, name: &str) -> f64 {
        match self.schema.field(name).map(|rule| rule.default) {
            Some(DefaultRule::Number(n)) => n,
            _ => 0.0,
        }
    }

    fn default_flag(&self, name: &str) -> bool {
        match self.schema.field(name).map(|rule| rule.default) {
            Some(DefaultRule::Bool(b)) => b,
            Some(DefaultRule::Derived(derive)) => derive(self.map).as_bool().unwrap_or(false),
            _ => false,
        }
    }

    /// Required text; empty if missing.
    pub fn text(&self, name: &str) -> String {
        self.opt_text(name).unwrap_or_default()
    }

    /// Optional text.
    pub fn opt_text(&self, name: &str) -> Option<String> {
        self.value(name).and_then(Value::as_str).map(str::to_string)
    }

    /// Required number.
    pub fn number(&self, name: &str) -> f64 {
        self.opt_number(name).unwrap_or_else(|| self.default_number(name))
    }

    /// Optional or nullable number.
    pub fn opt_number(&self, name: &str) -> Option<f64> {
        self.value(name).and_then(Value::as_f64)
    }

    /// Required whole number.
    pub fn whole(&self, name: &str) -> u32 {
        self.opt_whole(name)
            .unwrap_or_else(|| self.default_number(name).max(0.0) as u32)
    }

    /// Optional or nullable whole number.
    pub fn opt_whole(&self, name: &str) -> Option<u32> {
        self.opt_number(name).map(|n| n.max(0.0).round() as u32)
    }

    /// Boolean with its table default.
    pub fn flag(&self, name: &str) -> bool {
        self.value(name)
            .and_then(Value::as_bool)
            .unwrap_or_else(|| self.default_flag(name))
    }

    /// Vocabulary word; falls back to the table default, then to the first
    /// declared word.
    pub fn choice<V: Vocabulary>(&self, name: &str) -> V {
        self.value(name)
            .and_then(Value::as_str)
            .and_then(V::parse_word)
            .or_else(|| match self.schema.field(name).map(|rule| rule.default) {
                Some(DefaultRule::Text(word)) => V::parse_word(word),
                _ => None,
            })
            .unwrap_or_else(V::first)
    }

    /// Optional hex color.
    pub fn hex_color(&self, name: &str) -> Option<HexColor> {
        self.value(name)
            .and_then(Value::as_str)
            .and_then(|s| HexColor::new(s).ok())
    }

    /// Nested object, if present.
    pub fn object(&self, name: &str) -> Option<&'a Map<String, Value>> {
        self.value(name).and_then(Value::as_object)
    }

    /// Objects of a list field; empty if missing.
    pub fn list(&self, name: &str) -> impl Iterator<Item = &'a Map<String, Value>> + 'a {
        self.value(name)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{HUD_CARD, STATUS_INDICATOR};
    use cosmo_core::vocab::{CardVariant, IndicatorState, ScreenPosition};
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn getters_fall_back_to_table_defaults() {
        let m = map(json!({"title": "t"}));
        let f = Fields::new(&m, &HUD_CARD);
        assert_eq!(f.text("title"), "t");
        assert_eq!(f.text("content"), "");
        assert_eq!(f.whole("priority"), 3);
        assert_eq!(f.choice::<CardVariant>("variant"), CardVariant::Info);
        assert_eq!(f.choice::<ScreenPosition>("position"), ScreenPosition::TopRight);
        assert!(f.flag("dismissible"));
        assert_eq!(f.opt_number("autoHideAfterSeconds"), None);
        assert_eq!(f.list("actions").count(), 0);
    }

    #[test]
    fn derived_flag_default_reads_siblings() {
        let m = map(json!({"state": "loading"}));
        let f = Fields::new(&m, &STATUS_INDICATOR);
        assert_eq!(f.choice::<IndicatorState>("state"), IndicatorState::Loading);
        assert!(f.flag("pulse"));
    }

    #[test]
    fn null_reads_as_absent() {
        let m = map(json!({"icon": null, "autoHideAfterSeconds": null}));
        let f = Fields::new(&m, &HUD_CARD);
        assert_eq!(f.opt_text("icon"), None);
        assert_eq!(f.opt_number("autoHideAfterSeconds"), None);
    }
}
