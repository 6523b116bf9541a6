//! Core library for retrieving media file metadata and rendering it as text.
//!
//! This crate opens a file, selects a parser by signature, extracts the
//! metadata fields the parser understands and renders them as plain text,
//! one `Label: value` line per field.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use metaview_core::{CoreConfigBuilder, Retriever, render_with};
//! use std::path::Path;
//!
//! let config = CoreConfigBuilder::new()
//!     .header(true)
//!     .priority_level(5)
//!     .build()
//!     .unwrap();
//!
//! let retriever = Retriever::new(&config);
//! if let Some(metadata) = retriever.retrieve(Path::new("/path/to/photo.jpg")) {
//!     let text = render_with(&metadata, &config.plaintext_options()).unwrap();
//!     println!("{text}");
//! }
//! ```

pub mod batch;
pub mod config;
pub mod discovery;
pub mod error;
pub mod metadata;
pub mod parser;
pub mod render;
pub mod retrieve;
pub mod utils;

// Re-exports for public API
pub use batch::retrieve_all;
pub use config::{CoreConfig, CoreConfigBuilder};
pub use discovery::collect_input_files;
pub use error::{CoreError, CoreResult};
pub use metadata::{MetaKey, MetaValue, Metadata};
pub use parser::{
    MetadataParser, ParserHandle, ParserRegistry, create_parser, default_registry,
    extract_metadata,
};
pub use render::{PlaintextOptions, render, render_json, render_with};
pub use retrieve::{RetrieveError, Retriever, retrieve};
pub use utils::{format_bytes, format_duration};
