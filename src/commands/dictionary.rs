//! Dictionary inspection commands: `show`, `locales`, `keys`.

use serde::Serialize;

use crate::context::{Choice, Context};
use crate::error::Result;
use crate::i18n::{self, Locale, Registry, TranslationKey, Translations};
use crate::output::{Displayable, OutputFormat};

#[derive(Debug, Clone, Serialize)]
struct Entry {
    key: TranslationKey,
    value: &'static str,
}

impl Displayable for Entry {
    fn table_row(&self) -> Vec<String> {
        vec![self.key.to_string(), self.value.to_string()]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["KEY", "VALUE"]
    }
}

#[derive(Debug, Clone, Serialize)]
struct LocaleRow {
    code: Locale,
    name: &'static str,
    native_name: &'static str,
    default: bool,
}

impl Displayable for LocaleRow {
    fn table_row(&self) -> Vec<String> {
        vec![
            self.code.to_string(),
            self.name.to_string(),
            self.native_name.to_string(),
            if self.default { "*".to_string() } else { String::new() },
        ]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["CODE", "NAME", "NATIVE", "DEFAULT"]
    }
}

fn active_translations(ctx: &Context) -> &'static Translations {
    match ctx.choose() {
        Choice::Explicit(locale) => i18n::get_translations(Some(locale), &ctx.signals),
        Choice::Unsupported(code) => Registry::builtin().get_by_code(&code),
        Choice::Resolved(resolution) => Registry::builtin().get(resolution.locale),
    }
}

/// Print the active dictionary, or a single key from it.
pub fn show(ctx: &Context, key: Option<&str>) -> Result<()> {
    let translations = active_translations(ctx);

    if let Some(key) = key {
        let key: TranslationKey = key.parse()?;
        let value = translations.get(key);
        return match ctx.output.format() {
            OutputFormat::Table => {
                ctx.output.line(value);
                Ok(())
            }
            _ => ctx.output.value(&Entry { key, value }),
        };
    }

    match ctx.output.format() {
        // The dictionary object itself is what the rendering layer consumes
        OutputFormat::Json | OutputFormat::Yaml => ctx.output.value(translations),
        _ => {
            let entries: Vec<Entry> = translations
                .entries()
                .map(|(key, value)| Entry { key, value })
                .collect();
            ctx.output.table(&entries)
        }
    }
}

/// List supported locales.
pub fn locales(ctx: &Context) -> Result<()> {
    let registry = Registry::builtin();
    let rows: Vec<LocaleRow> = registry
        .locales()
        .map(|code| LocaleRow {
            code,
            name: code.name(),
            native_name: code.native_name(),
            default: code == registry.default_locale(),
        })
        .collect();
    ctx.output.table(&rows)
}

/// List the canonical key set.
pub fn keys(ctx: &Context) -> Result<()> {
    let keys: Vec<&str> = TranslationKey::ALL
        .iter()
        .map(|key| key.as_str())
        .collect();
    match ctx.output.format() {
        OutputFormat::Table => {
            for key in keys {
                ctx.output.line(key);
            }
            Ok(())
        }
        _ => ctx.output.value(&keys),
    }
}
