// ============================================================================
// metaview-cli/src/commands/show.rs
// ============================================================================
//
// SHOW COMMAND: Print the Metadata of Files
//
// This module turns the `show` arguments into a CoreConfig, expands the
// given paths into files and prints each file's metadata (or only its MIME
// type or parser). A failed retrieval is logged right after that file's
// header and counted; the command reports whether every file succeeded.
//
// KEY COMPONENTS:
// - build_config: ShowArgs -> validated CoreConfig
// - run_show: Main entry point for the command

// ---- Internal crate imports ----
use crate::cli::ShowArgs;
use crate::config::PRIORITY_TOO_LOW_NOTE;
use crate::output::print_file_header;

// ---- External crate imports ----
use anyhow::{Context, Result};
use metaview_core::{
    CoreConfig, CoreConfigBuilder, CoreError, CoreResult, Metadata, PlaintextOptions, RetrieveError,
    Retriever, collect_input_files, render_json, render_with, retrieve_all,
};

// ---- Standard library imports ----
use std::path::Path;

/// Builds the core configuration selected by the arguments.
pub fn build_config(args: &ShowArgs) -> Result<CoreConfig> {
    let mut builder = CoreConfigBuilder::new()
        .priority_level(args.level)
        .human(!args.raw)
        .header(args.header)
        .enable_ffprobe(args.ffprobe)
        .max_value_length(args.max_length);
    if let Some(prefix) = &args.prefix {
        builder = builder.line_prefix(prefix.clone());
    }
    if let Some(parser) = &args.parser {
        builder = builder.forced_parser(parser.clone());
    }
    builder.build().context("Invalid options")
}

/// Runs the `show` command. Returns `Ok(false)` when at least one file
/// produced no metadata.
pub fn run_show(args: ShowArgs) -> Result<bool> {
    let config = build_config(&args)?;
    let files = collect_input_files(&args.paths).context("Invalid input path")?;
    if files.is_empty() {
        log::warn!("No files to inspect");
        return Ok(false);
    }

    let retriever = Retriever::new(&config);
    let with_headers = files.len() > 1;

    if args.mime || args.file_type {
        let mut all_ok = true;
        for path in &files {
            if with_headers {
                print_file_header(path);
            }
            all_ok &= print_identification(&retriever, path, args.mime);
        }
        return Ok(all_ok);
    }

    let options = config.plaintext_options();
    let mut all_ok = true;
    for (path, outcome) in retrieve_all(&retriever, &files) {
        if with_headers {
            print_file_header(&path);
        }
        let metadata = match outcome {
            Ok(metadata) => metadata,
            Err(err) => {
                err.log();
                all_ok = false;
                continue;
            }
        };
        let text = if args.json {
            render_json(&metadata)
        } else {
            render_filtered(&metadata, &options)
        }
        .with_context(|| format!("Cannot display metadata of {}", path.display()))?;
        println!("{text}");
    }
    Ok(all_ok)
}

/// Renders as text; metadata whose every field is above the priority
/// level becomes a short note instead of an error.
fn render_filtered(metadata: &Metadata, options: &PlaintextOptions) -> CoreResult<String> {
    match render_with(metadata, options) {
        Err(CoreError::EmptyMetadata) if !metadata.is_empty() => {
            Ok(PRIORITY_TOO_LOW_NOTE.to_string())
        }
        other => other,
    }
}

/// Prints the MIME type (or parser description) of one file.
fn print_identification(retriever: &Retriever<'_>, path: &Path, mime: bool) -> bool {
    let result = if mime {
        retriever
            .mime_type(path)
            .map(|mime| mime.unwrap_or("application/octet-stream"))
    } else {
        retriever.parser_description(path)
    };
    match result {
        Ok(text) => {
            println!("{text}");
            true
        }
        Err(err) => {
            log::error!("{}", RetrieveError::from(err));
            false
        }
    }
}
