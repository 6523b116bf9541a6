// metaview-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "metaview: Media metadata viewer",
    long_about = "Prints the metadata of images and audio files as plain text using the metaview-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints the metadata of one or more files
    Show(ShowArgs),
    /// Lists the available parsers
    Parsers,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Files to inspect; directories contribute their top-level files
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Priority level from 1 (essential fields) to 9 (everything)
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        default_value_t = config::DEFAULT_PRIORITY_LEVEL,
        value_parser = clap::value_parser!(u8).range(1..=9)
    )]
    pub level: u8,

    /// Print machine keys and raw values
    #[arg(long)]
    pub raw: bool,

    /// Print the "Metadata:" title line and prefix entries with "- "
    #[arg(long)]
    pub header: bool,

    /// Prefix for every entry line
    #[arg(long, value_name = "TEXT")]
    pub prefix: Option<String>,

    /// Only print the MIME type of each file
    #[arg(long, conflicts_with_all = ["file_type", "json"])]
    pub mime: bool,

    /// Only print which parser handles each file
    #[arg(long = "type", conflicts_with = "json")]
    pub file_type: bool,

    /// Use this parser instead of detecting one
    #[arg(long, value_name = "ID")]
    pub parser: Option<String>,

    /// Fall back to the external ffprobe tool for unrecognised files
    #[arg(long, env = config::FFPROBE_ENV_VAR)]
    pub ffprobe: bool,

    /// Truncate values longer than this many characters
    #[arg(long, value_name = "N", default_value_t = config::DEFAULT_MAX_VALUE_LENGTH)]
    pub max_length: usize,

    /// Print the full metadata as JSON (no level filter, no truncation)
    #[arg(long, conflicts_with_all = ["level", "raw", "header", "prefix", "max_length"])]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_defaults() {
        let cli = Cli::parse_from(["metaview", "show", "photo.jpg"]);
        assert!(!cli.verbose);

        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.paths, vec![PathBuf::from("photo.jpg")]);
                assert_eq!(args.level, 9);
                assert!(!args.raw);
                assert!(!args.header);
                assert!(args.prefix.is_none());
                assert!(args.parser.is_none());
                assert_eq!(args.max_length, 300);
            }
            Commands::Parsers => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_parse_show_options() {
        let cli = Cli::parse_from([
            "metaview", "-v", "show", "a.flac", "b.png", "--level", "3", "--raw", "--header",
            "--prefix", "> ", "--parser", "audio", "--max-length", "80",
        ]);
        assert!(cli.verbose);

        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.paths.len(), 2);
                assert_eq!(args.level, 3);
                assert!(args.raw);
                assert!(args.header);
                assert_eq!(args.prefix.as_deref(), Some("> "));
                assert_eq!(args.parser.as_deref(), Some("audio"));
                assert_eq!(args.max_length, 80);
            }
            Commands::Parsers => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_level_out_of_range() {
        assert!(Cli::try_parse_from(["metaview", "show", "a.png", "--level", "0"]).is_err());
        assert!(Cli::try_parse_from(["metaview", "show", "a.png", "--level", "10"]).is_err());
    }

    #[test]
    fn test_mime_conflicts_with_json() {
        assert!(Cli::try_parse_from(["metaview", "show", "a.png", "--mime", "--json"]).is_err());
    }

    #[test]
    fn test_json_conflicts_with_text_options() {
        for flag in [
            &["--level", "3"][..],
            &["--raw"],
            &["--header"],
            &["--prefix", "> "],
            &["--max-length", "80"],
        ] {
            let mut argv = vec!["metaview", "show", "a.png", "--json"];
            argv.extend_from_slice(flag);
            assert!(Cli::try_parse_from(argv).is_err(), "--json accepted {flag:?}");
        }
        assert!(Cli::try_parse_from(["metaview", "show", "a.png", "--json"]).is_ok());
    }

    #[test]
    fn test_parse_parsers() {
        let cli = Cli::parse_from(["metaview", "parsers"]);
        assert!(matches!(cli.command, Commands::Parsers));
    }
}
