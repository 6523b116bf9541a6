// ============================================================================
// metaview-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// This module implements the builder pattern for the CoreConfig structure,
// providing a fluent API for creating and configuring CoreConfig instances.
// `build` validates the result so an invalid level or length never reaches
// the retriever or the renderer.

// ---- Internal crate imports ----
use super::CoreConfig;
use crate::error::CoreResult;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use metaview_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .header(true)
///     .title("photo.jpg")
///     .max_value_length(120)
///     .build()
///     .unwrap();
/// assert!(config.header);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority level (1..=9).
    pub fn priority_level(mut self, level: u8) -> Self {
        self.config.priority_level = level;
        self
    }

    /// Selects human (true) or raw (false) output.
    pub fn human(mut self, human: bool) -> Self {
        self.config.human = human;
        self
    }

    /// Enables the `<title>:` line above top-level entries.
    pub fn header(mut self, header: bool) -> Self {
        self.config.header = header;
        self
    }

    /// Sets the prefix of every entry line.
    pub fn line_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.line_prefix = Some(prefix.into());
        self
    }

    /// Overrides the header title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Allows the ffprobe backend.
    pub fn enable_ffprobe(mut self, enable: bool) -> Self {
        self.config.enable_ffprobe = enable;
        self
    }

    /// Forces a parser by id instead of detecting one.
    pub fn forced_parser(mut self, id: impl Into<String>) -> Self {
        self.config.forced_parser = Some(id.into());
        self
    }

    /// Sets the maximum rendered length of a value.
    pub fn max_value_length(mut self, length: usize) -> Self {
        self.config.max_value_length = length;
        self
    }

    /// Builds and validates the CoreConfig.
    pub fn build(self) -> CoreResult<CoreConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_builder_defaults_match_config_defaults() {
        let config = CoreConfigBuilder::new().build().unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = CoreConfigBuilder::new()
            .priority_level(3)
            .human(false)
            .line_prefix("> ")
            .forced_parser("audio")
            .build()
            .unwrap();

        assert_eq!(config.priority_level, 3);
        assert!(!config.human);
        assert_eq!(config.line_prefix.as_deref(), Some("> "));
        assert_eq!(config.forced_parser.as_deref(), Some("audio"));
    }

    #[test]
    fn test_builder_validates() {
        let result = CoreConfigBuilder::new().priority_level(10).build();
        assert!(matches!(result, Err(CoreError::Config(_))));
    }
}
