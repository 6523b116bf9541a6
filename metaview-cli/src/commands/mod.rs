//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `parsers` command.
pub mod parsers;

/// Module containing the implementation of the `show` command.
/// This command prints the metadata of files as plain text or JSON.
pub mod show;
