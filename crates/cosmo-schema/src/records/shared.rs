//! Shapes embedded in several component records.

use serde::{Deserialize, Serialize};

use cosmo_core::vocab::{ActionStyle, AnchorType, SettingKind};
use cosmo_core::HexColor;

use crate::fields::Fields;
use crate::tables::{ACTION, ANCHOR_METADATA, RING_SEGMENT, SETTING_ITEM};

/// A button on a card or bar. `action` is an opaque command string the
/// host application interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub label: String,
    pub action: String,
    pub style: ActionStyle,
}

impl Action {
    pub(crate) fn read(fields: &Fields<'_>) -> Vec<Self> {
        fields
            .list("actions")
            .map(|map| {
                let item = Fields::new(map, &ACTION);
                Self {
                    label: item.text("label"),
                    action: item.text("action"),
                    style: item.choice("style"),
                }
            })
            .collect()
    }
}

/// AR anchoring hints. Ignored by flat-screen renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorMetadata {
    pub anchor_type: AnchorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_target: Option<String>,
    /// Metres from the viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl AnchorMetadata {
    pub(crate) fn read(fields: &Fields<'_>) -> Option<Self> {
        fields.object("metadata").map(|map| {
            let meta = Fields::new(map, &ANCHOR_METADATA);
            Self {
                anchor_type: meta.choice("anchorType"),
                follow_target: meta.opt_text("followTarget"),
                distance: meta.opt_number("distance"),
            }
        })
    }
}

/// One control of a quick-settings panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingItem {
    pub id: String,
    pub label: String,
    pub kind: SettingKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub enabled: bool,
    /// Slider position; `null` for toggles and buttons.
    #[serde(default)]
    pub value: Option<f64>,
}

impl SettingItem {
    pub(crate) fn read(fields: &Fields<'_>) -> Vec<Self> {
        fields
            .list("items")
            .map(|map| {
                let item = Fields::new(map, &SETTING_ITEM);
                Self {
                    id: item.text("id"),
                    label: item.text("label"),
                    kind: item.choice("kind"),
                    icon: item.opt_text("icon"),
                    enabled: item.flag("enabled"),
                    value: item.opt_number("value"),
                }
            })
            .collect()
    }
}

/// One ring of an activity-ring widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingSegment {
    pub label: String,
    /// Percent complete.
    pub progress: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HexColor>,
}

impl RingSegment {
    pub(crate) fn read(fields: &Fields<'_>) -> Vec<Self> {
        fields
            .list("rings")
            .map(|map| {
                let ring = Fields::new(map, &RING_SEGMENT);
                Self {
                    label: ring.text("label"),
                    progress: ring.number("progress"),
                    color: ring.hex_color("color"),
                }
            })
            .collect()
    }
}
