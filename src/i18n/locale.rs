//! Supported UI languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported UI language.
///
/// The set is closed: adding a language means adding a variant here, a
/// dictionary under `locales/`, and an entry in the built-in registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// French.
    Fr,
    /// Spanish.
    Es,
    /// German.
    De,
    /// Italian.
    It,
}

/// Error returned when a string is not the code of a supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported locale '{0}'. Supported: en, fr, es, de, it")]
pub struct ParseLocaleError(pub String);

impl Locale {
    /// The fallback locale.
    pub const DEFAULT: Locale = Locale::En;

    /// Every supported locale, in matching priority order.
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Fr, Locale::Es, Locale::De, Locale::It];

    /// Two-letter language code.
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Es => "es",
            Locale::De => "de",
            Locale::It => "it",
        }
    }

    /// Language name in English.
    pub const fn name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "French",
            Locale::Es => "Spanish",
            Locale::De => "German",
            Locale::It => "Italian",
        }
    }

    /// Language name in the language itself.
    pub const fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Es => "Español",
            Locale::De => "Deutsch",
            Locale::It => "Italiano",
        }
    }

    /// Whether this is the fallback locale.
    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    /// Parse an exact code, ignoring case and surrounding whitespace.
    ///
    /// Region-qualified tags such as `fr-CA` are not accepted here; those go
    /// through the resolver.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ParseLocaleError(s.to_string()))
    }
}
