// ============================================================================
// metaview-cli/src/main.rs
// ============================================================================
//
// METAVIEW CLI: Main Entry Point
//
// Parses the command line, installs the logger and dispatches to the
// selected command. The process exits with 0 when every requested file
// produced output and with 1 otherwise.

use clap::Parser;
use metaview_cli::{Cli, Commands, logging, run_parsers, run_show};
use owo_colors::OwoColorize;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Show(args) => run_show(args),
        Commands::Parsers => {
            run_parsers();
            Ok(true)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            if supports_color::on(supports_color::Stream::Stderr).is_some() {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
            } else {
                eprintln!("Error: {e:#}");
            }
            process::exit(1);
        }
    }
}
