//! Command-line argument parsing and command definitions.
//!
//! Uses clap with derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand, ValueEnum};

/// Buoy widget localization - inspect locale resolution and dictionaries
#[derive(Parser, Debug)]
#[command(name = "buoy-i18n")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Explicit locale code, skipping resolution (can also use @code as first argument)
    #[arg(long, global = true, env = "BUOY_LOCALE")]
    pub locale: Option<String>,

    /// Locale hint from the host application
    #[arg(long, global = true, env = "BUOY_HOST_LOCALE")]
    pub host_locale: Option<String>,

    /// Environment language preference (defaults to LC_ALL/LC_MESSAGES/LANGUAGE/LANG)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_parser = ["table", "json", "yaml", "jsonl"])]
    pub output: Option<String>,

    /// Color output mode
    #[arg(long, global = true, value_parser = ["auto", "always", "never"])]
    pub color: Option<String>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show which locale the current signals resolve to
    Resolve,

    /// Print the dictionary for the explicit or resolved locale
    Show {
        /// Print only this key (e.g. waveHeight)
        key: Option<String>,
    },

    /// List supported locales
    Locales,

    /// List the canonical translation keys
    Keys,

    /// Validate that every dictionary carries the full key set
    Check,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shell types for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    PowerShell,
}

/// Parse a leading `@code` argument into an explicit locale.
///
/// `buoy-i18n @es show` is equivalent to `buoy-i18n --locale es show`.
pub fn parse_locale_prefix(args: Vec<String>) -> (Option<String>, Vec<String>) {
    let mut iter = args.into_iter();
    let Some(binary) = iter.next() else {
        return (None, Vec::new());
    };

    match iter.next() {
        Some(second) if second.len() > 1 && second.starts_with('@') => {
            let locale = second[1..].to_string();
            (Some(locale), std::iter::once(binary).chain(iter).collect())
        }
        Some(second) => (
            None,
            std::iter::once(binary)
                .chain(std::iter::once(second))
                .chain(iter)
                .collect(),
        ),
        None => (None, vec![binary]),
    }
}
