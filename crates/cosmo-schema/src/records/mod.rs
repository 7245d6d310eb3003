//! # Typed Component Records
//!
//! One struct per component kind, built only from repaired objects (see
//! [`crate::validator::Validator::sanitize`]) or deserialized from JSON
//! that already satisfies the tables. Field names serialize in camelCase.
//! Optional fields that are absent are omitted; nullable fields serialize
//! as explicit `null`.
//!
//! [`ComponentRecord`] is the tagged union over all 16 kinds, with the
//! kind's wire tag in a `"type"` field.

mod cards;
mod controls;
mod gauges;
mod shared;

pub use cards::{ContactCard, ContextBadge, EventCard, HudCard, MediaCard, MessagePreview, WeatherWidget};
pub use controls::{ActionBar, MiniPlayer, QuickSettings, Tooltip};
pub use gauges::{ActivityRing, DirectionArrow, ProgressRing, StatusIndicator, Timer};
pub use shared::{Action, AnchorMetadata, RingSegment, SettingItem};

use serde::{Deserialize, Serialize};

use cosmo_core::ComponentKind;

use crate::validator::ComponentSchema;

macro_rules! component_record {
    ($($variant:ident),+ $(,)?) => {
        /// A record of any component kind.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "type", rename_all = "kebab-case")]
        pub enum ComponentRecord {
            $( $variant($variant), )+
        }

        impl ComponentRecord {
            /// The kind of the wrapped record.
            pub fn kind(&self) -> ComponentKind {
                match self {
                    $( Self::$variant(_) => <$variant as ComponentSchema>::KIND, )+
                }
            }

            /// The record id.
            pub fn id(&self) -> &str {
                match self {
                    $( Self::$variant(record) => record.id(), )+
                }
            }

            /// Replace the record id.
            pub fn set_id(&mut self, id: String) {
                match self {
                    $( Self::$variant(record) => record.id = id, )+
                }
            }
        }

        $(
            impl From<$variant> for ComponentRecord {
                fn from(record: $variant) -> Self {
                    Self::$variant(record)
                }
            }
        )+
    };
}

component_record!(
    HudCard,
    ContextBadge,
    ProgressRing,
    StatusIndicator,
    ActionBar,
    Tooltip,
    MediaCard,
    MiniPlayer,
    Timer,
    MessagePreview,
    ContactCard,
    EventCard,
    WeatherWidget,
    QuickSettings,
    ActivityRing,
    DirectionArrow,
);
