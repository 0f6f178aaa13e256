//! The `check` command.

use crate::context::Context;
use crate::error::Result;
use crate::i18n::{Registry, TranslationKey};

/// Validate the built-in registry.
pub fn check(ctx: &Context) -> Result<()> {
    let registry = Registry::builtin();

    registry.validate()?;

    ctx.output.success(&format!(
        "{} locales, {} keys each, default '{}'",
        registry.locales().count(),
        TranslationKey::ALL.len(),
        registry.default_locale()
    ));
    Ok(())
}
