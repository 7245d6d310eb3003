//! Dynamic dispatch by [`ComponentKind`], for callers that learn the kind
//! at runtime (a `"type"` tag, a CLI flag).

use std::sync::Arc;

use serde_json::Value;

use cosmo_core::{ComponentKind, IdGenerator};

use crate::issue::ValidationResult;
use crate::records::*;
use crate::validator::{ComponentSchema, Validator};

macro_rules! by_kind {
    ($kind:expr, $run:ident ( $($arg:expr),* )) => {
        match $kind {
            ComponentKind::HudCard => $run::<HudCard>($($arg),*),
            ComponentKind::ContextBadge => $run::<ContextBadge>($($arg),*),
            ComponentKind::ProgressRing => $run::<ProgressRing>($($arg),*),
            ComponentKind::StatusIndicator => $run::<StatusIndicator>($($arg),*),
            ComponentKind::ActionBar => $run::<ActionBar>($($arg),*),
            ComponentKind::Tooltip => $run::<Tooltip>($($arg),*),
            ComponentKind::MediaCard => $run::<MediaCard>($($arg),*),
            ComponentKind::MiniPlayer => $run::<MiniPlayer>($($arg),*),
            ComponentKind::Timer => $run::<Timer>($($arg),*),
            ComponentKind::MessagePreview => $run::<MessagePreview>($($arg),*),
            ComponentKind::ContactCard => $run::<ContactCard>($($arg),*),
            ComponentKind::EventCard => $run::<EventCard>($($arg),*),
            ComponentKind::WeatherWidget => $run::<WeatherWidget>($($arg),*),
            ComponentKind::QuickSettings => $run::<QuickSettings>($($arg),*),
            ComponentKind::ActivityRing => $run::<ActivityRing>($($arg),*),
            ComponentKind::DirectionArrow => $run::<DirectionArrow>($($arg),*),
        }
    };
}

fn validate_as<R>(candidate: &Value, ids: Arc<dyn IdGenerator>) -> ValidationResult<ComponentRecord>
where
    R: ComponentSchema + Into<ComponentRecord>,
{
    Validator::<R>::with_id_generator(ids).validate(candidate).map(Into::into)
}

fn sanitize_as<R>(candidate: &Value, ids: Arc<dyn IdGenerator>) -> ComponentRecord
where
    R: ComponentSchema + Into<ComponentRecord>,
{
    Validator::<R>::with_id_generator(ids).sanitize(candidate).into()
}

/// Validate `candidate` as a record of `kind`.
pub fn validate_component(
    kind: ComponentKind,
    candidate: &Value,
    ids: Arc<dyn IdGenerator>,
) -> ValidationResult<ComponentRecord> {
    by_kind!(kind, validate_as(candidate, ids))
}

/// Sanitize `candidate` into a record of `kind`.
pub fn sanitize_component(kind: ComponentKind, candidate: &Value, ids: Arc<dyn IdGenerator>) -> ComponentRecord {
    by_kind!(kind, sanitize_as(candidate, ids))
}
