//! Ambient language signals.
//!
//! Collecting signals is the only place the i18n layer reads process state.
//! Everything downstream receives them as plain values.

use serde::Serialize;

/// Environment variable a host application sets to pass its locale hint.
pub const HOST_LOCALE_ENV: &str = "BUOY_HOST_LOCALE";

/// POSIX variables consulted for the environment language preference, in order.
const LANGUAGE_ENV_VARS: [&str; 4] = ["LC_ALL", "LC_MESSAGES", "LANGUAGE", "LANG"];

/// The two optional inputs to locale resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Signals {
    /// Locale hint supplied by the host application (e.g. `fr-FR`).
    pub host_hint: Option<String>,
    /// Generic environment language preference (e.g. `de_DE.UTF-8`).
    pub environment: Option<String>,
}

impl Signals {
    /// Create signals from explicit values.
    pub fn new(host_hint: Option<String>, environment: Option<String>) -> Self {
        Self {
            host_hint,
            environment,
        }
    }

    /// Replace the host hint.
    pub fn with_host_hint(mut self, hint: impl Into<String>) -> Self {
        self.host_hint = Some(hint.into());
        self
    }

    /// Replace the environment preference.
    pub fn with_environment(mut self, preference: impl Into<String>) -> Self {
        self.environment = Some(preference.into());
        self
    }

    /// Collect signals from the process environment.
    ///
    /// The host hint comes from `BUOY_HOST_LOCALE`; the environment preference
    /// from the first usable of `LC_ALL`, `LC_MESSAGES`, `LANGUAGE`, `LANG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Collect signals through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_hint = lookup(HOST_LOCALE_ENV).filter(|hint| !hint.trim().is_empty());

        let environment = LANGUAGE_ENV_VARS.into_iter().find_map(|name| {
            let value = lookup(name)?;
            // LANGUAGE holds a colon-separated preference list
            value
                .split(':')
                .map(str::trim)
                .find(|entry| is_language(entry))
                .map(String::from)
        });

        Self {
            host_hint,
            environment,
        }
    }

    /// Host hint as a borrowed string.
    pub fn host_hint(&self) -> Option<&str> {
        self.host_hint.as_deref()
    }

    /// Environment preference as a borrowed string.
    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }
}

/// Whether a POSIX locale value names a language at all.
fn is_language(value: &str) -> bool {
    !value.is_empty() && value != "C" && value != "POSIX" && !value.starts_with("C.")
}
