//! Buoy i18n CLI
//!
//! Inspect locale resolution and the compiled-in widget dictionaries.

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match buoy_i18n::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Clap already printed its own usage errors
            if !matches!(&e, buoy_i18n::Error::InvalidArgument(m) if m.is_empty()) {
                eprintln!("Error: {}", e);
            }

            ExitCode::from(e.exit_code() as u8)
        }
    }
}
