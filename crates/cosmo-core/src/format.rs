//! # Formatted String Primitives
//!
//! Newtypes for the two string formats the constraint tables check:
//! CSS-style hex colors and RFC 3339 timestamps. Both validate at
//! construction, so a `HexColor` or `Timestamp` that exists is well formed.
//!
//! Sanitization never guesses at a malformed value of either format; the
//! field is dropped instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CosmoError;

/// A `#rgb` or `#rrggbb` color. Case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HexColor(String);

impl HexColor {
    /// Validate and wrap a hex color.
    ///
    /// # Errors
    ///
    /// `InvalidHexColor` unless the input is `#` followed by exactly 3 or 6
    /// ASCII hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, CosmoError> {
        let s = value.into();
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(CosmoError::InvalidHexColor(s))
        }
    }

    /// Check the format without constructing.
    pub fn is_valid(s: &str) -> bool {
        match s.strip_prefix('#') {
            Some(digits) => {
                matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
            }
            None => false,
        }
    }

    /// Access the color string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A UTC instant parsed from any RFC 3339 string.
///
/// Offsets are accepted and normalized to UTC. Records keep the caller's
/// original string; this type exists for checking and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parse an RFC 3339 timestamp, accepting any offset.
    ///
    /// # Errors
    ///
    /// `InvalidTimestamp` with the parser's message.
    pub fn parse(s: &str) -> Result<Self, CosmoError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| CosmoError::InvalidTimestamp {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as RFC 3339 with a `Z` suffix.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_accepts_short_and_long_forms() {
        assert!(HexColor::new("#fff").is_ok());
        assert!(HexColor::new("#ff5500").is_ok());
        assert!(HexColor::new("#FF5500").is_ok());
    }

    #[test]
    fn hex_color_rejects_malformed() {
        for bad in ["not-a-color", "ff5500", "#ff55", "#ff550", "#gg5500", "#ff5500aa", "", "#"] {
            assert!(HexColor::new(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn hex_color_deserialize_validates() {
        let ok: HexColor = serde_json::from_str("\"#abc\"").unwrap();
        assert_eq!(ok.as_str(), "#abc");
        assert!(serde_json::from_str::<HexColor>("\"red\"").is_err());
    }

    #[test]
    fn timestamp_normalizes_offsets() {
        let a = Timestamp::parse("2026-03-01T10:00:00+02:00").unwrap();
        let b = Timestamp::parse("2026-03-01T08:00:00Z").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_rfc3339(), "2026-03-01T08:00:00Z");
    }

    #[test]
    fn timestamp_rejects_garbage() {
        let err = Timestamp::parse("tomorrow at noon").unwrap_err();
        assert!(matches!(err, CosmoError::InvalidTimestamp { .. }));
    }
}
