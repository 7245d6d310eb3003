//! Content cards: notifications, badges, media, people, events, weather.

use serde::{Deserialize, Serialize};

use cosmo_core::vocab::{
    AspectRatio, BadgeIcon, CardVariant, CornerPosition, MediaType, MessagePriority,
    PresenceStatus, ScreenPosition, TemperatureUnit, WeatherCondition,
};
use cosmo_core::{ComponentKind, HexColor};

use super::shared::{Action, AnchorMetadata};
use crate::fields::Fields;
use crate::validator::ComponentSchema;

/// Heads-up notification card.
///
/// Priority 4 and 5 cards are pinned: never dismissible, never auto-hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HudCard {
    pub id: String,
    pub title: String,
    pub content: String,
    pub variant: CardVariant,
    /// 1 (lowest) to 5 (highest).
    pub priority: u32,
    pub position: ScreenPosition,
    pub dismissible: bool,
    #[serde(default)]
    pub auto_hide_after_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for HudCard {
    const KIND: ComponentKind = ComponentKind::HudCard;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            title: f.text("title"),
            content: f.text("content"),
            variant: f.choice("variant"),
            priority: f.whole("priority"),
            position: f.choice("position"),
            dismissible: f.flag("dismissible"),
            auto_hide_after_seconds: f.opt_number("autoHideAfterSeconds"),
            icon: f.opt_text("icon"),
            actions: Action::read(f),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Small contextual label pinned to a screen corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextBadge {
    pub id: String,
    pub label: String,
    pub variant: CardVariant,
    pub icon: BadgeIcon,
    pub position: CornerPosition,
    pub dismissible: bool,
    pub pulse: bool,
    #[serde(default)]
    pub auto_dismiss_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contextual_color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for ContextBadge {
    const KIND: ComponentKind = ComponentKind::ContextBadge;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            label: f.text("label"),
            variant: f.choice("variant"),
            icon: f.choice("icon"),
            position: f.choice("position"),
            dismissible: f.flag("dismissible"),
            pulse: f.flag("pulse"),
            auto_dismiss_ms: f.opt_number("autoDismissMs"),
            contextual_color: f.hex_color("contextualColor"),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaCard {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for MediaCard {
    const KIND: ComponentKind = ComponentKind::MediaCard;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            title: f.text("title"),
            subtitle: f.opt_text("subtitle"),
            media_type: f.choice("mediaType"),
            source_url: f.opt_text("sourceUrl"),
            aspect_ratio: f.choice("aspectRatio"),
            actions: Action::read(f),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Incoming message summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePreview {
    pub id: String,
    pub sender: String,
    pub message: String,
    /// RFC 3339, as supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub unread_count: u32,
    pub priority: MessagePriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for MessagePreview {
    const KIND: ComponentKind = ComponentKind::MessagePreview;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            sender: f.text("sender"),
            message: f.text("message"),
            timestamp: f.opt_text("timestamp"),
            avatar_url: f.opt_text("avatarUrl"),
            unread_count: f.whole("unreadCount"),
            priority: f.choice("priority"),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCard {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub status: PresenceStatus,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for ContactCard {
    const KIND: ComponentKind = ComponentKind::ContactCard;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            name: f.text("name"),
            subtitle: f.opt_text("subtitle"),
            avatar_url: f.opt_text("avatarUrl"),
            status: f.choice("status"),
            actions: Action::read(f),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Calendar event card. `startTime` is empty only when the caller never
/// supplied a parseable one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub all_day: bool,
    #[serde(default)]
    pub reminder_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for EventCard {
    const KIND: ComponentKind = ComponentKind::EventCard;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            title: f.text("title"),
            start_time: f.text("startTime"),
            end_time: f.opt_text("endTime"),
            location: f.opt_text("location"),
            all_day: f.flag("allDay"),
            reminder_minutes: f.opt_whole("reminderMinutes"),
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
pub struct WeatherWidget {
    pub id: String,
    pub temperature: f64,
    pub unit: TemperatureUnit,
    pub condition: WeatherCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Relative humidity in percent.
    #[serde(default)]
    pub humidity: Option<f64>,
    pub compact: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnchorMetadata>,
}

impl ComponentSchema for WeatherWidget {
    const KIND: ComponentKind = ComponentKind::WeatherWidget;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            id: f.text("id"),
            temperature: f.number("temperature"),
            unit: f.choice("unit"),
            condition: f.choice("condition"),
            location: f.opt_text("location"),
            humidity: f.opt_number("humidity"),
            compact: f.flag("compact"),
            metadata: AnchorMetadata::read(f),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
