//! Command implementations.
//!
//! Each submodule implements a group of related commands.

mod check;
mod dictionary;
mod resolve;

pub use check::check;
pub use dictionary::{keys, locales, show};
pub use resolve::resolve;

use crate::cli::Commands;
use crate::context::Context;
use crate::error::Result;

/// Execute a command.
pub fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Resolve => resolve(ctx),
        Commands::Show { key } => show(ctx, key.as_deref()),
        Commands::Locales => locales(ctx),
        Commands::Keys => keys(ctx),
        Commands::Check => check(ctx),
        Commands::Completion { shell } => completion(*shell),
    }
}

fn completion(shell: crate::cli::Shell) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{Generator, generate};

    let mut cmd = crate::cli::Cli::command();

    fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
        let name = cmd.get_name().to_string();
        generate(generator, cmd, name, &mut std::io::stdout());
    }

    match shell {
        crate::cli::Shell::Bash => print_completions(clap_complete::shells::Bash, &mut cmd),
        crate::cli::Shell::Zsh => print_completions(clap_complete::shells::Zsh, &mut cmd),
        crate::cli::Shell::Fish => print_completions(clap_complete::shells::Fish, &mut cmd),
        crate::cli::Shell::PowerShell => {
            print_completions(clap_complete::shells::PowerShell, &mut cmd)
        }
    }

    Ok(())
}
