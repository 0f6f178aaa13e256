//! Per-invocation context: merged configuration, collected signals, output.

use crate::config::{Config, DEFAULT_COLOR, DEFAULT_FORMAT};
use crate::error::Result;
use crate::i18n::{Locale, Resolution, Resolver, Signals};
use crate::output::Output;

/// How the active locale was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// A supported locale was requested explicitly.
    Explicit(Locale),
    /// An explicit code was requested but is not supported; the default
    /// dictionary is used.
    Unsupported(String),
    /// No explicit locale; resolved from the signals.
    Resolved(Resolution),
}

impl Choice {
    /// The locale whose dictionary ends up displayed.
    pub fn locale(&self) -> Locale {
        match self {
            Choice::Explicit(locale) => *locale,
            Choice::Unsupported(_) => Locale::DEFAULT,
            Choice::Resolved(resolution) => resolution.locale,
        }
    }
}

/// Everything a command needs.
pub struct Context {
    /// Merged configuration.
    pub config: Config,
    /// Explicit locale code, if any.
    pub explicit: Option<String>,
    /// Resolution inputs.
    pub signals: Signals,
    /// Output writer.
    pub output: Output,
}

impl Context {
    /// Create a context from CLI options layered over loaded configuration.
    pub fn new(
        explicit: Option<String>,
        host_locale: Option<String>,
        lang: Option<String>,
        output_format: Option<String>,
        color: Option<String>,
        quiet: bool,
    ) -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config, explicit, host_locale, lang, output_format, color, quiet)
    }

    /// Create a context over an already loaded configuration.
    #[allow(clippy::too_many_arguments)]
    pub fn with_config(
        config: Config,
        explicit: Option<String>,
        host_locale: Option<String>,
        lang: Option<String>,
        output_format: Option<String>,
        color: Option<String>,
        quiet: bool,
    ) -> Result<Self> {
        let format = output_format
            .or_else(|| config.output.format.clone())
            .unwrap_or_else(|| DEFAULT_FORMAT.to_string());
        let color = color
            .or_else(|| config.output.color.clone())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string());
        let output = Output::from_cli(&format, &color, quiet)?;

        let explicit = explicit.or_else(|| config.locale.clone());
        let host_hint = host_locale.or_else(|| config.host_locale.clone());
        let environment = lang.or_else(|| Signals::from_env().environment);

        Ok(Self {
            config,
            explicit,
            signals: Signals::new(host_hint, environment),
            output,
        })
    }

    /// Decide the active locale.
    pub fn choose(&self) -> Choice {
        match self.explicit.as_deref() {
            Some(code) => match code.parse::<Locale>() {
                Ok(locale) => Choice::Explicit(locale),
                Err(err) => {
                    tracing::warn!(code, "Unsupported explicit locale, using default");
                    self.output.warn(&format!("{err}; showing {}", Locale::DEFAULT.name()));
                    Choice::Unsupported(code.to_string())
                }
            },
            None => Choice::Resolved(
                Resolver::default()
                    .resolve_detailed(self.signals.host_hint(), self.signals.environment()),
            ),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::i18n::Source;
    use crate::output::OutputFormat;

    fn context(explicit: Option<&str>, host: Option<&str>, lang: Option<&str>) -> Context {
        Context::with_config(
            Config::default(),
            explicit.map(String::from),
            host.map(String::from),
            lang.map(String::from),
            None,
            Some("never".to_string()),
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_explicit_locale() {
        let ctx = context(Some("es"), Some("fr-FR"), Some("de"));
        assert_eq!(ctx.choose(), Choice::Explicit(Locale::Es));
    }

    #[test]
    fn test_unsupported_explicit_locale() {
        let choice = context(Some("xx"), Some("fr-FR"), None).choose();
        assert_eq!(choice, Choice::Unsupported("xx".to_string()));
        assert_eq!(choice.locale(), Locale::En);
    }

    #[test]
    fn test_resolved_from_signals() {
        let Choice::Resolved(resolution) = context(None, Some("fr-CA"), Some("en-US")).choose()
        else {
            panic!("expected a resolved choice");
        };
        assert_eq!(resolution.locale, Locale::Fr);
        assert_eq!(resolution.source, Source::HostHint);
    }

    #[test]
    fn test_config_values_fill_gaps() {
        let config = Config {
            locale: Some("it".into()),
            host_locale: Some("de-CH".into()),
            ..Config::default()
        };
        let ctx = Context::with_config(
            config,
            None,
            None,
            Some("fr".into()),
            None,
            None,
            true,
        )
        .unwrap();
        assert_eq!(ctx.explicit.as_deref(), Some("it"));
        assert_eq!(ctx.signals.host_hint(), Some("de-CH"));
        assert_eq!(ctx.signals.environment(), Some("fr"));
    }

    #[test]
    fn test_output_format_from_config_or_default() {
        let config: Config = serde_yaml::from_str("output:\n  format: json\n").unwrap();
        let ctx = Context::with_config(
            config,
            None,
            None,
            None,
            None,
            Some("never".into()),
            true,
        )
        .unwrap();
        assert_eq!(ctx.output.format(), OutputFormat::Json);

        let ctx = Context::with_config(
            Config::default(),
            None,
            None,
            None,
            None,
            Some("never".into()),
            true,
        )
        .unwrap();
        assert_eq!(ctx.output.format(), OutputFormat::Table);
    }
}
