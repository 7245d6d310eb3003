//! Interactive controls: action bars, tooltips, playback, quick settings.

use serde::{Deserialize, Serialize};

use cosmo_core::vocab::{Edge, Orientation, SettingsLayout, TooltipTrigger};
use cosmo_core::ComponentKind;

use super::shared::{Action, AnchorMetadata, SettingItem};
use crate::fields::Fields;
use crate::validator::ComponentSchema;

/// Row or column of one to four buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionBar {
    pub id: String,
    pub actions: Vec<Action>,
    pub position: Edge,
    pub orientation: Orientation,
    pub compact: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for ActionBar {
    const KIND: ComponentKind = ComponentKind::ActionBar;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            actions: Action::read(f),
            position: f.choice("position"),
            orientation: f.choice("orientation"),
            compact: f.flag("compact"),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Hint text attached to another element, named by `target_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub id: String,
    pub content: String,
    pub trigger: TooltipTrigger,
    pub placement: Edge,
    pub delay_ms: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for Tooltip {
    const KIND: ComponentKind = ComponentKind::Tooltip;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            content: f.text("content"),
            trigger: f.choice("trigger"),
            placement: f.choice("placement"),
            delay_ms: f.number("delayMs"),
            target_id: f.opt_text("targetId"),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniPlayer {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,
    pub is_playing: bool,
    /// Percent of the track played.
    pub progress: f64,
    #[serde(default)]
    pub duration_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for MiniPlayer {
    const KIND: ComponentKind = ComponentKind::MiniPlayer;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            title: f.text("title"),
            artist: f.opt_text("artist"),
            artwork_url: f.opt_text("artworkUrl"),
            is_playing: f.flag("isPlaying"),
            progress: f.number("progress"),
            duration_seconds: f.opt_number("durationSeconds"),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Panel of device toggles, sliders and buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickSettings {
    pub id: String,
    pub items: Vec<SettingItem>,
    pub layout: SettingsLayout,
    pub columns: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for QuickSettings {
    const KIND: ComponentKind = ComponentKind::QuickSettings;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            items: SettingItem::read(f),
            layout: f.choice("layout"),
            columns: f.whole("columns"),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
