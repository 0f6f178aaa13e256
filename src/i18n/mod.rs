//! Localization for the buoy overlay widget.
//!
//! Decides which language to show and hands back the matching dictionary of
//! UI strings. Dictionaries are compiled in as typed `const` tables, so every
//! locale is guaranteed to carry the full key set.
//!
//! # Usage
//!
//! ```rust
//! use buoy_i18n::i18n::{self, Locale, Signals};
//!
//! // Resolve from explicit signals
//! let signals = Signals::default().with_host_hint("fr-CA").with_environment("en-US");
//! let t = i18n::get_translations(None, &signals);
//! assert_eq!(t.refresh, "Actualiser les données des bouées");
//!
//! // Or force a locale
//! let t = i18n::get_translations(Some(Locale::Es), &signals);
//! assert_eq!(t.title, "La Boya");
//! ```

mod dictionary;
mod key;
mod locale;
pub mod locales;
mod registry;
mod resolver;
mod signals;

pub use dictionary::Translations;
pub use key::{ParseKeyError, TranslationKey};
pub use locale::{Locale, ParseLocaleError};
pub use registry::{IntegrityError, Registry};
pub use resolver::{Resolution, Resolver, Source, normalize_locale, primary_subtag};
pub use signals::{HOST_LOCALE_ENV, Signals};

/// Resolve a locale from `signals` with the built-in priority order.
pub fn resolve(signals: &Signals) -> Locale {
    Resolver::default().resolve(signals.host_hint(), signals.environment())
}

/// Get the dictionary to display.
///
/// An explicit locale is used as-is; otherwise the locale is resolved from
/// `signals`. Either way the lookup falls back to the default dictionary.
pub fn get_translations(explicit: Option<Locale>, signals: &Signals) -> &'static Translations {
    let locale = explicit.unwrap_or_else(|| resolve(signals));
    Registry::builtin().get(locale)
}

/// Get the dictionary to display, reading signals from the process
/// environment when no locale is given.
pub fn translations(explicit: Option<Locale>) -> &'static Translations {
    match explicit {
        Some(locale) => Registry::builtin().get(locale),
        None => get_translations(None, &Signals::from_env()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_locale_bypasses_resolution() {
        let signals = Signals::default().with_host_hint("fr-FR").with_environment("de-DE");
        let t = get_translations(Some(Locale::Es), &signals);
        assert!(std::ptr::eq(t, Registry::builtin().get(Locale::Es)));
        assert_eq!(t.refresh, "Actualizar datos de boyas");
    }

    #[test]
    fn test_resolves_from_signals() {
        let signals = Signals::default().with_host_hint("fr-CA").with_environment("en-US");
        assert_eq!(get_translations(None, &signals).see_more, "Voir plus sur");
    }

    #[test]
    fn test_no_signals_gives_default() {
        let t = get_translations(None, &Signals::default());
        assert!(std::ptr::eq(t, Registry::builtin().default_translations()));
    }

    #[test]
    fn test_same_inputs_same_reference() {
        let signals = Signals::default().with_environment("it_IT.UTF-8");
        assert!(std::ptr::eq(get_translations(None, &signals), get_translations(None, &signals)));
    }

    #[test]
    fn test_translations_with_explicit_locale() {
        assert_eq!(translations(Some(Locale::De)).direction, "Richtung");
    }
}
