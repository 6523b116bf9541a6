//! Plaintext rendering of extracted metadata.
//!
//! Rendering is a pure function of the metadata and the options: the
//! metadata exports its display lines and they are joined with newlines.
//! Nothing here logs or recovers from errors; metadata with nothing to show
//! is reported to the caller as [`CoreError::EmptyMetadata`].

use crate::error::{CoreError, CoreResult};
use crate::metadata::Metadata;

/// Default priority level: show every field.
pub const DEFAULT_PRIORITY_LEVEL: u8 = 9;

/// Default maximum number of characters printed for one value.
pub const DEFAULT_MAX_VALUE_LENGTH: usize = 300;

/// Line prefix used when the header line is enabled.
pub const HEADER_LINE_PREFIX: &str = "- ";

/// Controls how [`Metadata::export_plaintext`] formats its lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaintextOptions {
    /// 1..=9; entries above `level * 100 + 99` are hidden.
    pub priority_level: u8,
    /// Human labels and values when true, machine keys and raw values otherwise.
    pub human: bool,
    /// Emit a `<title>:` line before the top-level entries.
    pub header: bool,
    /// Prepended to every entry line.
    pub line_prefix: String,
    /// Replaces the metadata's own header title.
    pub title: Option<String>,
    /// Longer values are cut and marked with `(...)`.
    pub max_value_length: usize,
}

impl Default for PlaintextOptions {
    fn default() -> Self {
        Self {
            priority_level: DEFAULT_PRIORITY_LEVEL,
            human: true,
            header: false,
            line_prefix: String::new(),
            title: None,
            max_value_length: DEFAULT_MAX_VALUE_LENGTH,
        }
    }
}

/// Renders `metadata` with the default options.
///
/// # Examples
///
/// ```rust
/// use metaview_core::metadata::{MetaKey, MetaValue, Metadata};
///
/// let mut metadata = Metadata::new();
/// metadata.set(MetaKey::Width, MetaValue::with_unit(800, "pixels"));
/// metadata.set(MetaKey::Height, MetaValue::with_unit(600, "pixels"));
///
/// let text = metaview_core::render(&metadata).unwrap();
/// assert_eq!(text, "Image width: 800 pixels\nImage height: 600 pixels");
/// ```
pub fn render(metadata: &Metadata) -> CoreResult<String> {
    render_with(metadata, &PlaintextOptions::default())
}

/// Renders `metadata` as newline-joined display lines.
pub fn render_with(metadata: &Metadata, options: &PlaintextOptions) -> CoreResult<String> {
    metadata
        .export_plaintext(options)
        .map(|lines| lines.join("\n"))
        .ok_or(CoreError::EmptyMetadata)
}

/// Renders `metadata` as pretty-printed JSON.
pub fn render_json(metadata: &Metadata) -> CoreResult<String> {
    if metadata.is_empty() {
        return Err(CoreError::EmptyMetadata);
    }
    Ok(serde_json::to_string_pretty(metadata)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{MetaKey, MetaValue};

    #[test]
    fn test_render_joins_lines() {
        let mut metadata = Metadata::new();
        metadata.set(MetaKey::Title, "Holiday");
        metadata.set(MetaKey::Duration, MetaValue::Duration(std::time::Duration::from_secs(61)));

        assert_eq!(render(&metadata).unwrap(), "Title: Holiday\nDuration: 1 min 1 sec");
    }

    #[test]
    fn test_render_empty_metadata_is_an_error() {
        let err = render(&Metadata::new()).unwrap_err();
        assert!(matches!(err, CoreError::EmptyMetadata));
    }

    #[test]
    fn test_render_with_title_override() {
        let mut metadata = Metadata::new();
        metadata.set(MetaKey::Format, "PNG");
        let options = PlaintextOptions {
            header: true,
            title: Some("photo.png".to_string()),
            line_prefix: HEADER_LINE_PREFIX.to_string(),
            ..PlaintextOptions::default()
        };
        assert_eq!(render_with(&metadata, &options).unwrap(), "photo.png:\n- Format: PNG");
    }

    #[test]
    fn test_render_with_tiny_value_limit() {
        let mut metadata = Metadata::new();
        metadata.set(MetaKey::Title, "Holiday in the mountains");
        let options = PlaintextOptions {
            max_value_length: 3,
            ..PlaintextOptions::default()
        };
        assert_eq!(render_with(&metadata, &options).unwrap(), "Title: Hol");
    }

    #[test]
    fn test_render_json_contains_keys() {
        let mut metadata = Metadata::new();
        metadata.set(MetaKey::Width, MetaValue::with_unit(800, "pixels"));
        let json = render_json(&metadata).unwrap();
        assert!(json.contains("\"width\""));
        assert!(json.contains("800"));
        assert!(render_json(&Metadata::new()).is_err());
    }
}
