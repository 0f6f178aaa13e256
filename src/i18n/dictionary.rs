//! The typed dictionary shared by every locale.

use std::collections::BTreeSet;

use serde::Serialize;

use super::key::TranslationKey;

/// All UI strings for one locale.
///
/// Each locale's dictionary is a `const` of this type, so leaving a field out
/// or adding one that the other locales lack does not compile. Fields mirror
/// [`TranslationKey`] one to one.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    pub refresh: &'static str,
    pub wave_height: &'static str,
    pub period: &'static str,
    pub meters: &'static str,
    pub feet: &'static str,
    pub title: &'static str,
    pub height: &'static str,
    pub hmax: &'static str,
    pub direction: &'static str,
    pub see_more: &'static str,
    pub view_all_readings: &'static str,
    pub powered_by: &'static str,
    pub time_unknown: &'static str,
    pub just_now: &'static str,
    pub min_ago: &'static str,
    pub hours: &'static str,
    pub minutes: &'static str,
    pub ago: &'static str,
    pub seconds: &'static str,
}

impl Translations {
    /// Look up a string by key.
    pub const fn get(&self, key: TranslationKey) -> &'static str {
        match key {
            TranslationKey::Refresh => self.refresh,
            TranslationKey::WaveHeight => self.wave_height,
            TranslationKey::Period => self.period,
            TranslationKey::Meters => self.meters,
            TranslationKey::Feet => self.feet,
            TranslationKey::Title => self.title,
            TranslationKey::Height => self.height,
            TranslationKey::Hmax => self.hmax,
            TranslationKey::Direction => self.direction,
            TranslationKey::SeeMore => self.see_more,
            TranslationKey::ViewAllReadings => self.view_all_readings,
            TranslationKey::PoweredBy => self.powered_by,
            TranslationKey::TimeUnknown => self.time_unknown,
            TranslationKey::JustNow => self.just_now,
            TranslationKey::MinAgo => self.min_ago,
            TranslationKey::Hours => self.hours,
            TranslationKey::Minutes => self.minutes,
            TranslationKey::Ago => self.ago,
            TranslationKey::Seconds => self.seconds,
        }
    }

    /// Iterate over `(key, value)` pairs in canonical key order.
    pub fn entries(&self) -> impl Iterator<Item = (TranslationKey, &'static str)> + '_ {
        TranslationKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    /// Names this dictionary serializes its fields under.
    ///
    /// These are the names the rendering layer reads, so they must equal
    /// the canonical key names.
    pub fn field_names(&self) -> BTreeSet<String> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(fields)) => {
                fields.into_iter().map(|(name, _)| name).collect()
            }
            _ => BTreeSet::new(),
        }
    }
}
