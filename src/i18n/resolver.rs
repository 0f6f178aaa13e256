//! Locale resolution.
//!
//! Picks one supported locale from the host hint and the environment language
//! preference. The resolver never reads the environment itself; see
//! [`Signals`](super::Signals) for that.

use serde::Serialize;
use unic_langid::LanguageIdentifier;

use super::Locale;

/// Which signal decided a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    /// The host application's locale hint.
    HostHint,
    /// The environment language preference.
    Environment,
    /// Neither signal matched a supported locale.
    Default,
}

/// Outcome of [`Resolver::resolve_detailed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The chosen locale.
    pub locale: Locale,
    /// The tier that produced it.
    pub source: Source,
    /// Primary language subtag of the deciding signal, if any.
    pub matched_subtag: Option<String>,
}

/// Resolves ambient language signals to a supported locale.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    priority: &'a [Locale],
    default: Locale,
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(&Locale::ALL, Locale::DEFAULT)
    }
}

impl<'a> Resolver<'a> {
    /// Create a resolver over `priority`, tried in order, with `default` as the
    /// last resort.
    pub const fn new(priority: &'a [Locale], default: Locale) -> Self {
        Self { priority, default }
    }

    /// Resolve the host hint, then the environment preference, then fall back
    /// to the default locale.
    pub fn resolve(&self, host_hint: Option<&str>, environment: Option<&str>) -> Locale {
        self.resolve_detailed(host_hint, environment).locale
    }

    /// Like [`resolve`](Self::resolve), also reporting which tier decided.
    pub fn resolve_detailed(
        &self,
        host_hint: Option<&str>,
        environment: Option<&str>,
    ) -> Resolution {
        let tiers = [(Source::HostHint, host_hint), (Source::Environment, environment)];

        for (source, signal) in tiers {
            let Some(subtag) = signal.and_then(primary_subtag) else {
                continue;
            };

            match self.match_subtag(&subtag) {
                Some(locale) => {
                    tracing::debug!(?source, %locale, signal = ?signal, "Resolved locale");
                    return Resolution {
                        locale,
                        source,
                        matched_subtag: Some(subtag),
                    };
                }
                None => {
                    tracing::debug!(?source, subtag = %subtag, "No supported locale for signal");
                }
            }
        }

        tracing::debug!(locale = %self.default, "Falling back to default locale");
        Resolution {
            locale: self.default,
            source: Source::Default,
            matched_subtag: None,
        }
    }

    fn match_subtag(&self, subtag: &str) -> Option<Locale> {
        self.priority
            .iter()
            .copied()
            .find(|locale| subtag.starts_with(locale.code()))
    }
}

/// Normalize a POSIX or BCP 47 locale string to hyphenated form.
///
/// Examples:
/// - "en_US.UTF-8" -> "en-US"
/// - "`fr_FR@euro`" -> "fr-FR"
/// - " de-DE " -> "de-DE"
pub fn normalize_locale(locale: &str) -> String {
    let locale = locale.trim();

    // Drop encoding (".UTF-8") and modifier ("@euro") suffixes
    let locale = locale.split(['.', '@']).next().unwrap_or(locale);

    locale.replace('_', "-")
}

/// Extract the lowercase primary language subtag of a locale string.
///
/// Returns `None` for empty, malformed, or undetermined (`und`) input, and for
/// the POSIX `C` locale, which is not a language.
pub fn primary_subtag(locale: &str) -> Option<String> {
    let normalized = normalize_locale(locale);
    let primary = normalized.split('-').next()?;
    if primary.is_empty() {
        return None;
    }

    let langid: LanguageIdentifier = primary.parse().ok()?;
    if langid.language.is_empty() {
        return None;
    }

    Some(langid.language.as_str().to_string())
}
