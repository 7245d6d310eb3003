//! # Component Kinds: Single Source of Truth
//!
//! Defines `ComponentKind`, the closed set of interface card types an AI
//! adapter may ask Cosmo to render. Each kind carries its wire tag (the
//! `"type"` value on tagged records) and the prefix used when an id has to
//! be generated for it.
//!
//! | # | Kind | Wire tag | Id prefix |
//! |---|------|----------|-----------|
//! |  1 | HUDCard | `hud-card` | `hud` |
//! |  2 | ContextBadge | `context-badge` | `badge` |
//! |  3 | ProgressRing | `progress-ring` | `ring` |
//! |  4 | StatusIndicator | `status-indicator` | `indicator` |
//! |  5 | ActionBar | `action-bar` | `actionbar` |
//! |  6 | Tooltip | `tooltip` | `tooltip` |
//! |  7 | MediaCard | `media-card` | `media` |
//! |  8 | MiniPlayer | `mini-player` | `player` |
//! |  9 | Timer | `timer` | `timer` |
//! | 10 | MessagePreview | `message-preview` | `message` |
//! | 11 | ContactCard | `contact-card` | `contact` |
//! | 12 | EventCard | `event-card` | `event` |
//! | 13 | WeatherWidget | `weather-widget` | `weather` |
//! | 14 | QuickSettings | `quick-settings` | `settings` |
//! | 15 | ActivityRing | `activity-ring` | `activity` |
//! | 16 | DirectionArrow | `direction-arrow` | `arrow` |

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::error::CosmoError;

/// Every component type the validation core understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// Heads-up notification card with title, body and up to two actions.
    HudCard,
    /// Small contextual label pinned to a screen corner.
    ContextBadge,
    /// Circular progress gauge.
    ProgressRing,
    /// Dot-style state light (idle, loading, error, ...).
    StatusIndicator,
    /// Row or column of action buttons.
    ActionBar,
    /// Hint text attached to another element.
    Tooltip,
    /// Image, video or audio card.
    MediaCard,
    /// Compact now-playing control.
    MiniPlayer,
    /// Countdown or stopwatch.
    Timer,
    /// Incoming message summary.
    MessagePreview,
    /// Person card with presence.
    ContactCard,
    /// Calendar event card.
    EventCard,
    /// Current conditions widget.
    WeatherWidget,
    /// Grid or list of device toggles and sliders.
    QuickSettings,
    /// Concentric activity rings.
    ActivityRing,
    /// Navigation arrow for AR wayfinding.
    DirectionArrow,
}

/// Total number of component kinds. Used for compile-time assertions.
pub const COMPONENT_KIND_COUNT: usize = 16;

impl ComponentKind {
    /// Returns all 16 kinds in canonical order.
    pub fn all() -> &'static [ComponentKind] {
        &[
            Self::HudCard,
            Self::ContextBadge,
            Self::ProgressRing,
            Self::StatusIndicator,
            Self::ActionBar,
            Self::Tooltip,
            Self::MediaCard,
            Self::MiniPlayer,
            Self::Timer,
            Self::MessagePreview,
            Self::ContactCard,
            Self::EventCard,
            Self::WeatherWidget,
            Self::QuickSettings,
            Self::ActivityRing,
            Self::DirectionArrow,
        ]
    }

    /// The kebab-case wire tag. Matches the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HudCard => "hud-card",
            Self::ContextBadge => "context-badge",
            Self::ProgressRing => "progress-ring",
            Self::StatusIndicator => "status-indicator",
            Self::ActionBar => "action-bar",
            Self::Tooltip => "tooltip",
            Self::MediaCard => "media-card",
            Self::MiniPlayer => "mini-player",
            Self::Timer => "timer",
            Self::MessagePreview => "message-preview",
            Self::ContactCard => "contact-card",
            Self::EventCard => "event-card",
            Self::WeatherWidget => "weather-widget",
            Self::QuickSettings => "quick-settings",
            Self::ActivityRing => "activity-ring",
            Self::DirectionArrow => "direction-arrow",
        }
    }

    /// The component name as the rendering layer spells it.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HudCard => "HUDCard",
            Self::ContextBadge => "ContextBadge",
            Self::ProgressRing => "ProgressRing",
            Self::StatusIndicator => "StatusIndicator",
            Self::ActionBar => "ActionBar",
            Self::Tooltip => "Tooltip",
            Self::MediaCard => "MediaCard",
            Self::MiniPlayer => "MiniPlayer",
            Self::Timer => "Timer",
            Self::MessagePreview => "MessagePreview",
            Self::ContactCard => "ContactCard",
            Self::EventCard => "EventCard",
            Self::WeatherWidget => "WeatherWidget",
            Self::QuickSettings => "QuickSettings",
            Self::ActivityRing => "ActivityRing",
            Self::DirectionArrow => "DirectionArrow",
        }
    }

    /// Prefix of generated ids for this kind (`<prefix>-<digits>`).
    ///
    /// Prefixes are pairwise distinct so a generated id always reveals the
    /// kind it was minted for.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::HudCard => "hud",
            Self::ContextBadge => "badge",
            Self::ProgressRing => "ring",
            Self::StatusIndicator => "indicator",
            Self::ActionBar => "actionbar",
            Self::Tooltip => "tooltip",
            Self::MediaCard => "media",
            Self::MiniPlayer => "player",
            Self::Timer => "timer",
            Self::MessagePreview => "message",
            Self::ContactCard => "contact",
            Self::EventCard => "event",
            Self::WeatherWidget => "weather",
            Self::QuickSettings => "settings",
            Self::ActivityRing => "activity",
            Self::DirectionArrow => "arrow",
        }
    }

    /// Read the kind from a tagged candidate's `"type"` field.
    ///
    /// # Errors
    ///
    /// `MissingTypeTag` when the candidate is not an object or has no string
    /// tag; `UnknownKind` when the tag names no supported kind.
    pub fn from_candidate(candidate: &Value) -> Result<Self, CosmoError> {
        let tag = candidate
            .get("type")
            .and_then(Value::as_str)
            .ok_or(CosmoError::MissingTypeTag)?;
        tag.parse()
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = CosmoError;

    /// Parse a kind from its wire tag or its component name.
    ///
    /// Matching ignores ASCII case, `-` and `_`, so `hud-card`, `HUDCard`
    /// and `hud_card` all name the same kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::all()
            .iter()
            .copied()
            .find(|kind| normalize(kind.as_str()) == wanted)
            .ok_or_else(|| CosmoError::UnknownKind(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
