//! Canonical translation keys.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Identifier of one UI string.
///
/// Every dictionary carries a value for every key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TranslationKey {
    /// Refresh button label.
    Refresh,
    /// Wave height layer toggle.
    WaveHeight,
    /// Wave period layer toggle.
    Period,
    /// Metric unit toggle.
    Meters,
    /// Imperial unit toggle.
    Feet,
    /// Widget title.
    Title,
    /// Popup: significant height.
    Height,
    /// Popup: maximum height.
    Hmax,
    /// Popup: swell direction.
    Direction,
    /// Footer link prefix.
    SeeMore,
    /// Footer link to the full readings page.
    ViewAllReadings,
    /// Footer attribution prefix.
    PoweredBy,
    /// Reading time could not be determined.
    TimeUnknown,
    /// Reading is less than a minute old.
    JustNow,
    /// Suffix for "N minutes ago".
    MinAgo,
    /// Hours unit.
    Hours,
    /// Minutes unit.
    Minutes,
    /// Relative-time marker ("ago", "il y a", "vor").
    Ago,
    /// Seconds unit.
    Seconds,
}

/// Error returned for a string that names no translation key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown translation key '{0}'")]
pub struct ParseKeyError(pub String);

impl TranslationKey {
    /// The canonical key set, in dictionary order.
    pub const ALL: [TranslationKey; 19] = [
        TranslationKey::Refresh,
        TranslationKey::WaveHeight,
        TranslationKey::Period,
        TranslationKey::Meters,
        TranslationKey::Feet,
        TranslationKey::Title,
        TranslationKey::Height,
        TranslationKey::Hmax,
        TranslationKey::Direction,
        TranslationKey::SeeMore,
        TranslationKey::ViewAllReadings,
        TranslationKey::PoweredBy,
        TranslationKey::TimeUnknown,
        TranslationKey::JustNow,
        TranslationKey::MinAgo,
        TranslationKey::Hours,
        TranslationKey::Minutes,
        TranslationKey::Ago,
        TranslationKey::Seconds,
    ];

    /// Stable camelCase name used by the rendering layer.
    pub const fn as_str(self) -> &'static str {
        match self {
            TranslationKey::Refresh => "refresh",
            TranslationKey::WaveHeight => "waveHeight",
            TranslationKey::Period => "period",
            TranslationKey::Meters => "meters",
            TranslationKey::Feet => "feet",
            TranslationKey::Title => "title",
            TranslationKey::Height => "height",
            TranslationKey::Hmax => "hmax",
            TranslationKey::Direction => "direction",
            TranslationKey::SeeMore => "seeMore",
            TranslationKey::ViewAllReadings => "viewAllReadings",
            TranslationKey::PoweredBy => "poweredBy",
            TranslationKey::TimeUnknown => "timeUnknown",
            TranslationKey::JustNow => "justNow",
            TranslationKey::MinAgo => "minAgo",
            TranslationKey::Hours => "hours",
            TranslationKey::Minutes => "minutes",
            TranslationKey::Ago => "ago",
            TranslationKey::Seconds => "seconds",
        }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseKeyError(s.to_string()))
    }
}
