//! Retrieval over many files.
//!
//! Each file is an independent retrieval with its own parser handle, so
//! the work is spread over rayon's thread pool. Results come back in input
//! order regardless of which file finished first.
//!
//! Failures are returned rather than logged, so a caller printing results
//! file by file can emit each diagnostic next to the file it belongs to.

use crate::metadata::Metadata;
use crate::retrieve::{RetrieveError, Retriever};

use rayon::prelude::*;

use std::path::PathBuf;

/// Retrieves every file in `paths`, pairing each path with its outcome.
pub fn retrieve_all(
    retriever: &Retriever<'_>,
    paths: &[PathBuf],
) -> Vec<(PathBuf, Result<Metadata, RetrieveError>)> {
    log::debug!("Retrieving metadata for {} files", paths.len());
    paths
        .par_iter()
        .map(|path| (path.clone(), retriever.try_retrieve(path)))
        .collect()
}
