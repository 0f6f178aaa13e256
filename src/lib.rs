//! Buoy i18n
//!
//! Locale resolution and compiled-in UI dictionaries for the wave-buoy map
//! overlay. The [`i18n`] module is the library surface the widget uses; the
//! remaining modules back the `buoy-i18n` command-line tool.
//!
//! ## Usage
//!
//! ```bash
//! buoy-i18n resolve                          # Which locale would be shown?
//! buoy-i18n --host-locale fr-CA show         # Dictionary for a host hint
//! buoy-i18n @es show waveHeight              # One key, explicit locale
//! buoy-i18n check                            # Validate every dictionary
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod output;

pub use cli::Cli;
pub use error::{Error, Result};
pub use i18n::{Locale, Translations, get_translations};

/// Tool version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI with the given arguments.
///
/// Parses arguments and dispatches to the matching command handler.
pub fn run(args: Vec<String>) -> Result<()> {
    use clap::Parser;

    // Parse @locale prefix before clap
    let (locale_override, args) = cli::parse_locale_prefix(args);

    let mut cli_args = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            // Print clap error (includes help/version)
            e.print().ok();
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return Ok(()),
                _ => return Err(Error::invalid_arg("")),
            }
        }
    };

    if locale_override.is_some() {
        cli_args.locale = locale_override;
    }

    if cli_args.debug {
        init_logging();
    }

    let ctx = context::Context::new(
        cli_args.locale,
        cli_args.host_locale,
        cli_args.lang,
        cli_args.output,
        cli_args.color,
        cli_args.quiet,
    )?;

    commands::execute(&ctx, &cli_args.command)
}

/// Initialize tracing/logging for debug mode.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("buoy_i18n=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
