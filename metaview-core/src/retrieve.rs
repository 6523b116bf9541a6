// ============================================================================
// metaview-core/src/retrieve.rs
// ============================================================================
//
// METADATA RETRIEVAL: Path In, Metadata Or Nothing Out
//
// This module runs one extraction for one file. It acquires a scoped parser
// handle, extracts while the handle is alive and releases it on every exit
// path. Failures never escape `retrieve`; they are logged and turned into
// `None`.
//
// KEY COMPONENTS:
// - Retriever: Configuration plus the registry to select parsers from
// - RetrieveError: The two ways a retrieval yields nothing
// - retrieve: Convenience call with the default configuration
//
// DESIGN PHILOSOPHY:
// `try_retrieve` keeps the failure kind as a value for callers that need it;
// `retrieve` is that call with the diagnostic logged and the kind dropped.

// ---- Internal crate imports ----
use crate::config::CoreConfig;
use crate::error::CoreError;
use crate::metadata::Metadata;
use crate::parser::{ParserRegistry, create_parser, default_registry, extract_metadata};

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::path::Path;

/// Why a retrieval produced no metadata.
#[derive(Error, Debug)]
pub enum RetrieveError {
    /// Opening, detecting or parsing failed.
    #[error("Metadata extraction error: {0}")]
    Extraction(#[from] CoreError),

    /// The file parsed but held no metadata.
    #[error("Unable to extract metadata")]
    NoData,
}

impl RetrieveError {
    /// Emits the diagnostic for this failure: `error` for extraction
    /// failures, `warn` when the file held nothing.
    pub fn log(&self) {
        match self {
            RetrieveError::Extraction(_) => log::error!("{self}"),
            RetrieveError::NoData => log::warn!("{self}"),
        }
    }
}

/// Extracts metadata from files with a fixed configuration.
///
/// A `Retriever` holds no per-file state, so one instance can serve any
/// number of calls, including concurrent ones.
///
/// # Examples
///
/// ```rust,no_run
/// use metaview_core::{CoreConfig, Retriever};
/// use std::path::Path;
///
/// let config = CoreConfig::default();
/// let retriever = Retriever::new(&config);
/// if let Some(metadata) = retriever.retrieve(Path::new("photo.jpg")) {
///     println!("{}", metaview_core::render(&metadata).unwrap());
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Retriever<'r> {
    config: &'r CoreConfig,
    registry: &'r ParserRegistry,
}

impl<'r> Retriever<'r> {
    /// A retriever using the built-in parsers.
    pub fn new(config: &'r CoreConfig) -> Self {
        Self::with_registry(config, default_registry())
    }

    /// A retriever selecting parsers from `registry`.
    pub fn with_registry(config: &'r CoreConfig, registry: &'r ParserRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &CoreConfig {
        self.config
    }

    /// Retrieves metadata, reporting why none was produced.
    pub fn try_retrieve(&self, path: &Path) -> Result<Metadata, RetrieveError> {
        let extracted = {
            let mut handle = create_parser(path, self.registry, self.config)?;
            extract_metadata(&mut handle, self.config)?
        };
        extracted.ok_or(RetrieveError::NoData)
    }

    /// Retrieves metadata, or logs the reason and returns `None`.
    pub fn retrieve(&self, path: &Path) -> Option<Metadata> {
        self.try_retrieve(path).map_err(|err| err.log()).ok()
    }

    /// MIME type of the file as reported by its parser, without extracting.
    pub fn mime_type(&self, path: &Path) -> Result<Option<&'static str>, CoreError> {
        let handle = create_parser(path, self.registry, self.config)?;
        Ok(handle.mime_type())
    }

    /// Description of the parser that would handle the file.
    pub fn parser_description(&self, path: &Path) -> Result<&'static str, CoreError> {
        let handle = create_parser(path, self.registry, self.config)?;
        Ok(handle.parser_description())
    }
}

/// Retrieves metadata from `path` with the default configuration.
pub fn retrieve(path: &Path) -> Option<Metadata> {
    let config = CoreConfig::default();
    Retriever::new(&config).retrieve(path)
}
