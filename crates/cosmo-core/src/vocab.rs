//! # Enumerated Vocabularies
//!
//! Every discrete field of a component record (variant, position, trigger,
//! anchor type, ...) draws from one of the closed vocabularies below. Each
//! vocabulary is a Rust enum whose serde spelling, [`Vocabulary::VALUES`]
//! slice and `FromStr` impl are all generated from a single declaration,
//! so the constraint tables and the typed records cannot disagree about
//! what a valid word is.

use serde::{Deserialize, Serialize};

use crate::error::CosmoError;

/// A closed set of wire words backed by a Rust enum.
pub trait Vocabulary: Sized + Copy + 'static {
    /// Vocabulary name used in diagnostics.
    const NAME: &'static str;

    /// Wire spellings in declaration order.
    const VALUES: &'static [&'static str];

    /// The wire spelling of this value.
    fn as_str(&self) -> &'static str;

    /// Parse a wire spelling. Exact match only.
    fn parse_word(word: &str) -> Option<Self>;

    /// First declared value. Only reached when a constraint table names a
    /// default outside its own vocabulary.
    fn first() -> Self;
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl Vocabulary for $name {
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [&'static str] = &[$($wire),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            fn parse_word(word: &str) -> Option<Self> {
                match word {
                    $( $wire => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn first() -> Self {
                [$(Self::$variant),+][0]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CosmoError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_word(s).ok_or_else(|| CosmoError::UnknownValue {
                    vocabulary: <Self as Vocabulary>::NAME,
                    value: s.to_string(),
                })
            }
        }
    };
}

vocabulary! {
    /// Semantic color variant shared by cards, badges and rings.
    CardVariant {
        Info => "info",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Neutral => "neutral",
    }
}

vocabulary! {
    /// Nine-slot screen placement for HUD cards.
    ScreenPosition {
        TopLeft => "top-left",
        TopCenter => "top-center",
        TopRight => "top-right",
        Center => "center",
        BottomLeft => "bottom-left",
        BottomCenter => "bottom-center",
        BottomRight => "bottom-right",
    }
}

vocabulary! {
    /// Corner placement for badges.
    CornerPosition {
        TopLeft => "top-left",
        TopRight => "top-right",
        BottomLeft => "bottom-left",
        BottomRight => "bottom-right",
    }
}

vocabulary! {
    /// Screen edge or side of a target element.
    Edge {
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
    }
}

vocabulary! {
    /// Layout axis of an action bar.
    Orientation {
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}

vocabulary! {
    /// Glyph shown inside a context badge.
    BadgeIcon {
        Plain => "none",
        Info => "info",
        Check => "check",
        Alert => "alert",
        Error => "error",
        Star => "star",
        Bell => "bell",
        Clock => "clock",
    }
}

vocabulary! {
    /// State shown by a status indicator.
    IndicatorState {
        Idle => "idle",
        Active => "active",
        Loading => "loading",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Offline => "offline",
    }
}

vocabulary! {
    /// Interaction that reveals a tooltip. `gaze` is the AR dwell trigger.
    TooltipTrigger {
        Hover => "hover",
        Focus => "focus",
        Click => "click",
        Gaze => "gaze",
    }
}

vocabulary! {
    /// Visual weight of an action button.
    ActionStyle {
        Primary => "primary",
        Secondary => "secondary",
        Destructive => "destructive",
    }
}

vocabulary! {
    /// Media carried by a media card.
    MediaType {
        Image => "image",
        Video => "video",
        Audio => "audio",
    }
}

vocabulary! {
    /// Frame ratio of a media card.
    AspectRatio {
        Square => "1:1",
        Standard => "4:3",
        Wide => "16:9",
        Portrait => "9:16",
    }
}

vocabulary! {
    /// Direction a timer counts.
    TimerMode {
        Countdown => "countdown",
        Stopwatch => "stopwatch",
    }
}

vocabulary! {
    /// Urgency of an incoming message.
    MessagePriority {
        Low => "low",
        Normal => "normal",
        High => "high",
        Urgent => "urgent",
    }
}

vocabulary! {
    /// Contact presence.
    PresenceStatus {
        Online => "online",
        Offline => "offline",
        Busy => "busy",
        Away => "away",
    }
}

vocabulary! {
    /// Unit of a weather widget temperature.
    TemperatureUnit {
        Celsius => "celsius",
        Fahrenheit => "fahrenheit",
    }
}

vocabulary! {
    /// Current weather condition.
    WeatherCondition {
        Sunny => "sunny",
        PartlyCloudy => "partly-cloudy",
        Cloudy => "cloudy",
        Rainy => "rainy",
        Stormy => "stormy",
        Snowy => "snowy",
        Foggy => "foggy",
        Windy => "windy",
    }
}

vocabulary! {
    /// Control type of a quick-settings item.
    SettingKind {
        Toggle => "toggle",
        Slider => "slider",
        Button => "button",
    }
}

vocabulary! {
    /// Arrangement of quick-settings items.
    SettingsLayout {
        Grid => "grid",
        List => "list",
    }
}

vocabulary! {
    /// Rendering style of a direction arrow.
    ArrowStyle {
        Minimal => "minimal",
        Detailed => "detailed",
    }
}

vocabulary! {
    /// Coordinate frame an AR element is anchored to.
    AnchorType {
        Screen => "screen",
        World => "world",
        Head => "head",
        Hand => "hand",
        Surface => "surface",
    }
}
