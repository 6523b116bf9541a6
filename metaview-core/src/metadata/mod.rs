// ============================================================================
// metaview-core/src/metadata/mod.rs
// ============================================================================
//
// METADATA MODEL: Ordered Key/Value Metadata Produced by Parsers
//
// This module defines the value a successful extraction yields. Parsers fill
// a Metadata in the order they discover fields; the order is preserved all
// the way to the rendered text.
//
// KEY COMPONENTS:
// - Metadata: Ordered entries plus named per-stream groups
// - MetadataEntry: One field with one or more values
// - MetaKey / MetaValue: Known fields and typed values (submodules)

mod keys;
mod value;

pub use keys::{MAX_PRIORITY, MIN_PRIORITY, MetaKey, max_priority_for_level};
pub use value::MetaValue;

use crate::render::PlaintextOptions;
use crate::utils::truncate_text;

use serde::Serialize;

/// Title used for top-level entries of single-stream metadata.
pub const DEFAULT_HEADER: &str = "Metadata";

/// Title used for top-level entries when per-stream groups exist.
pub const COMMON_HEADER: &str = "Common";

/// One metadata field and its values, in the order they were added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataEntry {
    pub key: MetaKey,
    pub values: Vec<MetaValue>,
}

impl MetadataEntry {
    /// Label shown for this entry.
    pub fn title(&self, human: bool) -> &'static str {
        if human { self.key.label() } else { self.key.name() }
    }
}

/// A named block of metadata, typically one media stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataGroup {
    pub title: String,
    pub metadata: Metadata,
}

/// Metadata extracted from one file.
///
/// Entries keep insertion order. Setting a key that already exists appends
/// the value to the existing entry instead of creating a second one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    header: String,
    entries: Vec<MetadataEntry>,
    groups: Vec<MetadataGroup>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

impl Metadata {
    pub fn new() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            entries: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Title printed above the top-level entries in header mode.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn entries(&self) -> &[MetadataEntry] {
        &self.entries
    }

    pub fn groups(&self) -> &[MetadataGroup] {
        &self.groups
    }

    /// Adds a value for `key`. Blank text values are ignored.
    pub fn set(&mut self, key: MetaKey, value: impl Into<MetaValue>) {
        let value = value.into();
        if value.is_blank() {
            return;
        }
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => {
                if !entry.values.contains(&value) {
                    entry.values.push(value);
                }
            }
            None => self.entries.push(MetadataEntry {
                key,
                values: vec![value],
            }),
        }
    }

    /// Adds a value for `key` when one is present.
    pub fn set_opt<V: Into<MetaValue>>(&mut self, key: MetaKey, value: Option<V>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    /// Appends a named group. Empty groups are dropped.
    ///
    /// The first group switches the top-level header to [`COMMON_HEADER`].
    pub fn add_group(&mut self, title: impl Into<String>, metadata: Metadata) {
        if metadata.is_empty() {
            return;
        }
        if self.groups.is_empty() && self.header == DEFAULT_HEADER {
            self.header = COMMON_HEADER.to_string();
        }
        self.groups.push(MetadataGroup {
            title: title.into(),
            metadata,
        });
    }

    /// Moves the entries and groups of `other` into `self`, keeping order.
    pub fn merge(&mut self, other: Metadata) {
        for entry in other.entries {
            for value in entry.values {
                self.set(entry.key, value);
            }
        }
        for group in other.groups {
            self.add_group(group.title, group.metadata);
        }
    }

    /// Returns the entry stored for `key`.
    pub fn get(&self, key: MetaKey) -> Option<&MetadataEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Returns the first value stored for `key`.
    pub fn first(&self, key: MetaKey) -> Option<&MetaValue> {
        self.get(key).and_then(|entry| entry.values.first())
    }

    pub fn has(&self, key: MetaKey) -> bool {
        self.get(key).is_some()
    }

    /// True when neither the top level nor any group holds a value.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.groups.iter().all(|group| group.metadata.is_empty())
    }

    /// Exports the metadata as display lines.
    ///
    /// Lines appear in insertion order: top-level entries first, then each
    /// group introduced by a `<title>:` line. Returns `None` when nothing
    /// passes the priority filter.
    pub fn export_plaintext(&self, options: &PlaintextOptions) -> Option<Vec<String>> {
        let mut lines = Vec::new();

        let own_lines = self.entry_lines(options);
        if !own_lines.is_empty() {
            if options.header {
                let title = options.title.as_deref().unwrap_or(&self.header);
                lines.push(format!("{title}:"));
            }
            lines.extend(own_lines);
        }

        for group in &self.groups {
            let group_lines = group.metadata.entry_lines(options);
            if group_lines.is_empty() {
                continue;
            }
            lines.push(format!("{}:", group.title));
            lines.extend(group_lines);
        }

        if lines.is_empty() { None } else { Some(lines) }
    }

    fn entry_lines(&self, options: &PlaintextOptions) -> Vec<String> {
        let max_priority = max_priority_for_level(options.priority_level);
        self.entries
            .iter()
            .filter(|entry| entry.key.priority() <= max_priority)
            .flat_map(|entry| {
                let title = entry.title(options.human);
                entry.values.iter().map(move |value| {
                    let text = if options.human { value.human() } else { value.raw() };
                    format!(
                        "{}{}: {}",
                        options.line_prefix,
                        title,
                        truncate_text(&text, options.max_value_length)
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_metadata() -> Metadata {
        let mut metadata = Metadata::new();
        metadata.set(MetaKey::Width, MetaValue::with_unit(800, "pixels"));
        metadata.set(MetaKey::Height, MetaValue::with_unit(600, "pixels"));
        metadata.set(MetaKey::MimeType, "image/jpeg");
        metadata
    }

    #[test]
    fn test_export_keeps_insertion_order() {
        let mut metadata = Metadata::new();
        metadata.set(MetaKey::MimeType, "image/png");
        metadata.set(MetaKey::Width, MetaValue::with_unit(1, "pixels"));

        let lines = metadata.export_plaintext(&PlaintextOptions::default()).unwrap();
        assert_eq!(lines, vec!["MIME type: image/png", "Image width: 1 pixels"]);
    }

    #[test]
    fn test_export_header_mode() {
        let options = PlaintextOptions {
            header: true,
            line_prefix: "- ".to_string(),
            ..PlaintextOptions::default()
        };
        let lines = image_metadata().export_plaintext(&options).unwrap();
        assert_eq!(lines[0], "Metadata:");
        assert_eq!(lines[1], "- Image width: 800 pixels");
    }

    #[test]
    fn test_export_raw_mode() {
        let options = PlaintextOptions {
            human: false,
            ..PlaintextOptions::default()
        };
        let lines = image_metadata().export_plaintext(&options).unwrap();
        assert_eq!(lines[0], "width: 800");
        assert_eq!(lines[2], "mime_type: image/jpeg");
    }

    #[test]
    fn test_priority_level_filters_entries() {
        let options = PlaintextOptions {
            priority_level: 2,
            ..PlaintextOptions::default()
        };
        let lines = image_metadata().export_plaintext(&options).unwrap();
        assert_eq!(lines.len(), 2);

        let options = PlaintextOptions {
            priority_level: 1,
            ..PlaintextOptions::default()
        };
        assert!(image_metadata().export_plaintext(&options).is_none());
    }

    #[test]
    fn test_repeated_key_appends_values() {
        let mut metadata = Metadata::new();
        metadata.set(MetaKey::Artist, "First");
        metadata.set(MetaKey::Artist, "Second");
        metadata.set(MetaKey::Artist, "First");
        metadata.set(MetaKey::Comment, "  ");

        assert_eq!(metadata.entries().len(), 1);
        assert_eq!(metadata.get(MetaKey::Artist).unwrap().values.len(), 2);
        let lines = metadata.export_plaintext(&PlaintextOptions::default()).unwrap();
        assert_eq!(lines, vec!["Artist: First", "Artist: Second"]);
    }

    #[test]
    fn test_groups_follow_common_entries() {
        let mut metadata = Metadata::new();
        metadata.set(MetaKey::Title, "Song");

        let mut stream = Metadata::new();
        stream.set(MetaKey::Channels, MetaValue::from(2u32));
        metadata.add_group("Audio stream #1", stream);
        metadata.add_group("Audio stream #2", Metadata::new());

        assert_eq!(metadata.header(), COMMON_HEADER);
        assert_eq!(metadata.groups().len(), 1);
        let lines = metadata.export_plaintext(&PlaintextOptions::default()).unwrap();
        assert_eq!(lines, vec!["Title: Song", "Audio stream #1:", "Channel: 2"]);
    }

    #[test]
    fn test_merge_appends_after_existing_entries() {
        let mut metadata = Metadata::new();
        metadata.set(MetaKey::Title, "Song");

        let mut stream = Metadata::new();
        stream.set(MetaKey::Duration, MetaValue::from(std::time::Duration::from_secs(3)));
        stream.set(MetaKey::Title, "Song");
        metadata.merge(stream);

        assert_eq!(metadata.header(), DEFAULT_HEADER);
        assert_eq!(metadata.entries().len(), 2);
        assert_eq!(metadata.entries()[1].key, MetaKey::Duration);
    }

    #[test]
    fn test_long_values_are_truncated() {
        let mut metadata = Metadata::new();
        metadata.set(MetaKey::Comment, "x".repeat(50));
        let options = PlaintextOptions {
            max_value_length: 20,
            ..PlaintextOptions::default()
        };
        let lines = metadata.export_plaintext(&options).unwrap();
        assert_eq!(lines[0], format!("Comment: {}(...)", "x".repeat(15)));
    }

    #[test]
    fn test_empty_metadata() {
        let metadata = Metadata::new();
        assert!(metadata.is_empty());
        assert!(metadata.export_plaintext(&PlaintextOptions::default()).is_none());
    }
}
