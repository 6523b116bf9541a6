// ============================================================================
// metaview-core/src/parser/mod.rs
// ============================================================================
//
// PARSERS: Format Detection and Metadata Extraction Backends
//
// This module is the extraction capability the retriever depends on. It
// opens the input, picks a parser for it and runs the extraction through
// ecosystem crates (image, kamadak-exif, symphonia, ffprobe).
//
// KEY COMPONENTS:
// - MetadataParser: Trait implemented by every backend
// - ParserRegistry: Ordered set of parsers, first match wins
// - ParserHandle: Scoped pairing of an open input with its parser
// - create_parser / extract_metadata: The two calls the retriever makes
//
// DESIGN PHILOSOPHY:
// Backends are trait objects so callers can build their own registry, e.g.
// to add a format or to substitute a parser in tests. The default registry
// is built once and shared.

// ---- Internal crate imports ----
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::metadata::Metadata;

// ---- External crate imports ----
use once_cell::sync::Lazy;

// ---- Standard library imports ----
use std::fmt;
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Audio containers probed with symphonia
pub mod audio;

/// External ffprobe tool, off unless configured
pub mod ffprobe;

/// Still images: headers via `image`, EXIF via kamadak-exif
pub mod image;

/// The open input file
pub mod source;

pub use audio::AudioParser;
pub use ffprobe::FfprobeParser;
pub use image::ImageParser;
pub use source::InputSource;

// ============================================================================
// PARSER TRAIT
// ============================================================================

/// A metadata extraction backend.
pub trait MetadataParser: Send + Sync {
    /// Short identifier, used to force a parser.
    fn id(&self) -> &'static str;

    /// One-line description shown in parser listings.
    fn description(&self) -> &'static str;

    /// Whether this parser recognises the input.
    fn matches(&self, source: &InputSource) -> bool;

    /// MIME type of a recognised input, when known without parsing.
    fn mime_type(&self, _source: &InputSource) -> Option<&'static str> {
        None
    }

    /// Parsers that shell out to an external tool are skipped during
    /// detection unless the configuration enables them.
    fn requires_external_tool(&self) -> bool {
        false
    }

    /// Reads the metadata of a recognised input.
    fn extract(&self, source: &mut InputSource, config: &CoreConfig) -> CoreResult<Metadata>;
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Ordered collection of parsers.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn MetadataParser>>,
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.parsers.iter().map(|parser| parser.id()))
            .finish()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ParserRegistry {
    /// A registry without parsers.
    pub fn empty() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// The built-in parsers in detection order: image, audio, ffprobe.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(ImageParser));
        registry.register(Box::new(AudioParser));
        registry.register(Box::new(FfprobeParser));
        registry
    }

    /// Appends a parser; earlier parsers win detection.
    pub fn register(&mut self, parser: Box<dyn MetadataParser>) {
        self.parsers.push(parser);
    }

    pub fn by_id(&self, id: &str) -> Option<&dyn MetadataParser> {
        self.parsers
            .iter()
            .find(|parser| parser.id() == id)
            .map(|parser| parser.as_ref())
    }

    /// First parser recognising `source`.
    pub fn detect(&self, source: &InputSource, config: &CoreConfig) -> Option<&dyn MetadataParser> {
        self.parsers
            .iter()
            .filter(|parser| config.enable_ffprobe || !parser.requires_external_tool())
            .find(|parser| parser.matches(source))
            .map(|parser| parser.as_ref())
    }

    /// `(id, description)` of every parser, in detection order.
    pub fn describe(&self) -> Vec<(&'static str, &'static str)> {
        self.parsers
            .iter()
            .map(|parser| (parser.id(), parser.description()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

static DEFAULT_REGISTRY: Lazy<ParserRegistry> = Lazy::new(ParserRegistry::with_defaults);

/// The shared registry of built-in parsers.
pub fn default_registry() -> &'static ParserRegistry {
    &DEFAULT_REGISTRY
}

// ============================================================================
// SCOPED HANDLE
// ============================================================================

/// An open input bound to the parser selected for it.
///
/// The file stays open exactly as long as the handle lives.
pub struct ParserHandle<'r> {
    source: InputSource,
    parser: &'r dyn MetadataParser,
}

impl fmt::Debug for ParserHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserHandle")
            .field("path", &self.source.path())
            .field("parser", &self.parser.id())
            .finish()
    }
}

impl ParserHandle<'_> {
    pub fn parser_id(&self) -> &'static str {
        self.parser.id()
    }

    pub fn parser_description(&self) -> &'static str {
        self.parser.description()
    }

    pub fn mime_type(&self) -> Option<&'static str> {
        self.parser.mime_type(&self.source)
    }

    pub fn source(&self) -> &InputSource {
        &self.source
    }
}

/// Opens `path` and selects its parser.
///
/// A parser forced through the configuration is used without detection.
pub fn create_parser<'r>(
    path: &Path,
    registry: &'r ParserRegistry,
    config: &CoreConfig,
) -> CoreResult<ParserHandle<'r>> {
    let source = InputSource::open(path)?;

    let parser = match config.forced_parser.as_deref() {
        Some(id) => registry
            .by_id(id)
            .ok_or_else(|| CoreError::UnknownParser(id.to_string()))?,
        None => registry
            .detect(&source, config)
            .ok_or_else(|| CoreError::UnsupportedFormat(path.to_path_buf()))?,
    };

    log::debug!("Using {} parser for {}", parser.id(), path.display());
    Ok(ParserHandle { source, parser })
}

/// Runs the handle's parser. `Ok(None)` means the input parsed but held no
/// metadata.
pub fn extract_metadata(
    handle: &mut ParserHandle<'_>,
    config: &CoreConfig,
) -> CoreResult<Option<Metadata>> {
    let metadata = handle.parser.extract(&mut handle.source, config)?;
    if metadata.is_empty() {
        Ok(None)
    } else {
        Ok(Some(metadata))
    }
}
