//! `byteutils` binary: encode and decode values from the command line.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout carries only command output. The
    // `log` bridge is left out because `tracing` already emits `log` records.
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("byteutils: logging disabled: {err}");
    }

    let cli = cli::Cli::parse();
    match commands::run(&cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "command failed");
            ExitCode::FAILURE
        }
    }
}
