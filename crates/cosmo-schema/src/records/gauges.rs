//! Gauges and indicators: rings, status lights, timers, wayfinding arrows.

use serde::{Deserialize, Serialize};

use cosmo_core::vocab::{ArrowStyle, CardVariant, IndicatorState, TimerMode};
use cosmo_core::{ComponentKind, HexColor};

use super::shared::{AnchorMetadata, RingSegment};
use crate::fields::Fields;
use crate::validator::ComponentSchema;

/// Circular progress gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRing {
    pub id: String,
    /// Percent complete, 0 to 100.
    pub value: f64,
    /// Diameter in pixels.
    pub size: f64,
    pub stroke_width: f64,
    pub variant: CardVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub show_value: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for ProgressRing {
    const KIND: ComponentKind = ComponentKind::ProgressRing;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            value: f.number("value"),
            size: f.number("size"),
            stroke_width: f.number("strokeWidth"),
            variant: f.choice("variant"),
            color: f.hex_color("color"),
            label: f.opt_text("label"),
            show_value: f.flag("showValue"),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Dot-style state light. Pulses while loading unless told otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusIndicator {
    pub id: String,
    pub state: IndicatorState,
    pub size: f64,
    pub pulse: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for StatusIndicator {
    const KIND: ComponentKind = ComponentKind::StatusIndicator;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            state: f.choice("state"),
            size: f.number("size"),
            pulse: f.flag("pulse"),
            label: f.opt_text("label"),
            color: f.hex_color("color"),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    pub id: String,
    pub duration_seconds: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub mode: TimerMode,
    pub auto_start: bool,
    /// Seconds remaining at which the timer turns to its warning style.
    /// Never above `duration_seconds`.
    #[serde(default)]
    pub warn_at_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for Timer {
    const KIND: ComponentKind = ComponentKind::Timer;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            duration_seconds: f.number("durationSeconds"),
            label: f.opt_text("label"),
            mode: f.choice("mode"),
            auto_start: f.flag("autoStart"),
            warn_at_seconds: f.opt_number("warnAtSeconds"),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Concentric activity rings, outermost first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRing {
    pub id: String,
    pub rings: Vec<RingSegment>,
    pub size: f64,
    pub show_labels: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for ActivityRing {
    const KIND: ComponentKind = ComponentKind::ActivityRing;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            rings: RingSegment::read(f),
            size: f.number("size"),
            show_labels: f.flag("showLabels"),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Navigation arrow. `direction` is a compass bearing in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionArrow {
    pub id: String,
    pub direction: f64,
    #[serde(default)]
    pub distance_meters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub style: ArrowStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for DirectionArrow {
    const KIND: ComponentKind = ComponentKind::DirectionArrow;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            direction: f.number("direction"),
            distance_meters: f.opt_number("distanceMeters"),
            label: f.opt_text("label"),
            style: f.choice("style"),
            color: f.hex_color("color"),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
