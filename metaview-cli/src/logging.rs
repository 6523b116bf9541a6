// ============================================================================
// metaview-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Configuration for the CLI
//
// Retrieval diagnostics ("Metadata extraction error: ...", "Unable to
// extract metadata") are log records emitted by metaview-core. They are
// written to standard output next to the metadata itself.
//
// USAGE:
// - default: warnings and errors
// - --verbose: debug records (parser selection, file release)
// - RUST_LOG=<filter>: replaces both of the above

use log::LevelFilter;
use std::io::Write;

/// Installs the global logger.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{} {}", record.level(), record.args()))
        .filter_level(level)
        .parse_default_env()
        .init();

    log::debug!("Logger initialized with level: {}", level);
}
