//! Configuration structures and constants for the metaview-core library.
//!
//! This module provides the configuration for retrieval (which parsers may
//! run) and for rendering (level, labels, prefixes).

mod builder;

pub use builder::CoreConfigBuilder;

use crate::error::{CoreError, CoreResult};
use crate::render::{
    DEFAULT_MAX_VALUE_LENGTH, DEFAULT_PRIORITY_LEVEL, HEADER_LINE_PREFIX, PlaintextOptions,
};

/// Smallest accepted `max_value_length`.
pub const MIN_MAX_VALUE_LENGTH: usize = 10;

/// Main configuration structure for the metaview-core library.
///
/// All fields have sensible defaults; the builder provides a fluent way to
/// override them and validates the result.
///
/// # Examples
///
/// ```rust
/// use metaview_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .priority_level(5)
///     .human(false)
///     .enable_ffprobe(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.plaintext_options().priority_level, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Priority level 1..=9 (9 shows everything)
    pub priority_level: u8,

    /// Human labels and values (false prints machine keys and raw values)
    pub human: bool,

    /// Print a `<title>:` line above top-level entries
    pub header: bool,

    /// Prefix for entry lines; defaults to "- " in header mode, "" otherwise
    pub line_prefix: Option<String>,

    /// Replaces the metadata header title in header mode
    pub title: Option<String>,

    /// Allow the ffprobe backend for inputs no built-in parser claims
    pub enable_ffprobe: bool,

    /// Parser id to use instead of signature detection
    pub forced_parser: Option<String>,

    /// Values longer than this are truncated when rendered
    pub max_value_length: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            priority_level: DEFAULT_PRIORITY_LEVEL,
            human: true,
            header: false,
            line_prefix: None,
            title: None,
            enable_ffprobe: false,
            forced_parser: None,
            max_value_length: DEFAULT_MAX_VALUE_LENGTH,
        }
    }
}

impl CoreConfig {
    /// Checks value ranges.
    pub fn validate(&self) -> CoreResult<()> {
        if !(1..=9).contains(&self.priority_level) {
            return Err(CoreError::Config(format!(
                "priority level must be between 1 and 9, got {}",
                self.priority_level
            )));
        }
        if self.max_value_length < MIN_MAX_VALUE_LENGTH {
            return Err(CoreError::Config(format!(
                "max value length must be at least {MIN_MAX_VALUE_LENGTH}, got {}",
                self.max_value_length
            )));
        }
        Ok(())
    }

    /// Renderer options derived from this configuration.
    pub fn plaintext_options(&self) -> PlaintextOptions {
        let line_prefix = self.line_prefix.clone().unwrap_or_else(|| {
            if self.header {
                HEADER_LINE_PREFIX.to_string()
            } else {
                String::new()
            }
        });

        PlaintextOptions {
            priority_level: self.priority_level,
            human: self.human,
            header: self.header,
            line_prefix,
            title: self.title.clone(),
            max_value_length: self.max_value_length,
        }
    }
}
