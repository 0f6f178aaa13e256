//! The `resolve` command.

use serde::Serialize;

use crate::context::{Choice, Context};
use crate::error::Result;
use crate::i18n::{Locale, Source};

#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    locale: Locale,
    language: &'static str,
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    explicit: Option<&'a str>,
    host_hint: Option<&'a str>,
    environment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched_subtag: Option<&'a str>,
}

/// Report the active locale and which signal decided it.
pub fn resolve(ctx: &Context) -> Result<()> {
    let choice = ctx.choose();
    let locale = choice.locale();

    let (source, matched_subtag) = match &choice {
        Choice::Explicit(_) => ("explicit", None),
        Choice::Unsupported(_) => ("fallback", None),
        Choice::Resolved(resolution) => {
            let source = match resolution.source {
                Source::HostHint => "host-hint",
                Source::Environment => "environment",
                Source::Default => "default",
            };
            (source, resolution.matched_subtag.as_deref())
        }
    };

    let report = ResolveReport {
        locale,
        language: locale.native_name(),
        source,
        explicit: ctx.explicit.as_deref(),
        host_hint: ctx.signals.host_hint(),
        environment: ctx.signals.environment(),
        matched_subtag,
    };

    ctx.output.value(&report)
}
