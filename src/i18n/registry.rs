//! The locale to dictionary registry.

use std::collections::{BTreeSet, HashSet};

use thiserror::Error;

use super::locales;
use super::{Locale, TranslationKey, Translations};

/// Registry of the dictionaries compiled into the crate.
static BUILTIN: Registry = Registry::new(Locale::DEFAULT, &locales::BUILTIN);

/// A data-integrity defect in a registry.
///
/// These are caught by [`Registry::validate`] in tests and by the `check`
/// command; lookups never surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// The designated default locale has no dictionary.
    #[error("Default locale '{0}' has no dictionary")]
    MissingDefault(Locale),

    /// A locale is registered more than once.
    #[error("Locale '{0}' is registered more than once")]
    DuplicateLocale(Locale),

    /// A dictionary's field names differ from the canonical key names.
    #[error("Dictionary '{locale}' differs from the canonical key set on '{key}'")]
    KeyMismatch {
        /// Offending locale.
        locale: Locale,
        /// First name present on only one side.
        key: String,
    },

    /// A dictionary maps a key to an empty string.
    #[error("Dictionary '{locale}' has an empty value for '{key}'")]
    EmptyValue {
        /// Offending locale.
        locale: Locale,
        /// Key with the empty value.
        key: TranslationKey,
    },
}

/// Immutable mapping from locale to dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    default: Locale,
    entries: &'static [(Locale, &'static Translations)],
}

impl Registry {
    /// Build a registry over static entries.
    ///
    /// Nothing is checked here; call [`Registry::validate`] from tests.
    pub const fn new(default: Locale, entries: &'static [(Locale, &'static Translations)]) -> Self {
        Self { default, entries }
    }

    /// The registry holding every compiled-in dictionary.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// The fallback locale.
    pub fn default_locale(&self) -> Locale {
        self.default
    }

    /// Whether `locale` has its own dictionary.
    pub fn contains(&self, locale: Locale) -> bool {
        self.lookup(locale).is_some()
    }

    /// Registered locales, in registration order.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.entries.iter().map(|(locale, _)| *locale)
    }

    /// Dictionary for `locale`, or the default dictionary when `locale` has
    /// none.
    pub fn get(&self, locale: Locale) -> &'static Translations {
        match self.lookup(locale) {
            Some(translations) => translations,
            None => {
                tracing::debug!(%locale, default = %self.default, "No dictionary, using default");
                self.default_translations()
            }
        }
    }

    /// Dictionary for a raw locale code. Unsupported or malformed codes get
    /// the default dictionary.
    pub fn get_by_code(&self, code: &str) -> &'static Translations {
        match code.parse::<Locale>() {
            Ok(locale) => self.get(locale),
            Err(_) => {
                tracing::debug!(code, "Unsupported locale code, using default");
                self.default_translations()
            }
        }
    }

    /// The default locale's dictionary.
    pub fn default_translations(&self) -> &'static Translations {
        // A registry without its default is a defect `validate` reports; the
        // English table keeps lookups total regardless.
        self.lookup(self.default).unwrap_or(&locales::EN)
    }

    fn lookup(&self, locale: Locale) -> Option<&'static Translations> {
        self.entries
            .iter()
            .find(|(registered, _)| *registered == locale)
            .map(|(_, translations)| *translations)
    }

    /// Check the construction-time contract.
    ///
    /// The default locale must be registered, each locale at most once, and
    /// every dictionary must serialize exactly the canonical key names with
    /// non-blank values.
    pub fn validate(&self) -> Result<(), IntegrityError> {
        if self.lookup(self.default).is_none() {
            return Err(IntegrityError::MissingDefault(self.default));
        }

        let mut seen = HashSet::new();
        for (locale, translations) in self.entries {
            if !seen.insert(*locale) {
                return Err(IntegrityError::DuplicateLocale(*locale));
            }

            if let Some(key) = key_mismatch(&translations.field_names()) {
                return Err(IntegrityError::KeyMismatch {
                    locale: *locale,
                    key,
                });
            }

            if let Some((key, _)) = translations
                .entries()
                .find(|(_, text)| text.trim().is_empty())
            {
                return Err(IntegrityError::EmptyValue {
                    locale: *locale,
                    key,
                });
            }
        }

        Ok(())
    }
}

/// First name, in sorted order, that is in `names` or the canonical key set
/// but not both.
fn key_mismatch(names: &BTreeSet<String>) -> Option<String> {
    let canonical: BTreeSet<String> = TranslationKey::ALL
        .iter()
        .map(|key| key.as_str().to_string())
        .collect();
    canonical.symmetric_difference(names).min().cloned()
}

impl Default for Registry {
    fn default() -> Self {
        BUILTIN
    }
}
