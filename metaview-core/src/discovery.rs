//! Input discovery: expands the paths given by the caller into files.
//!
//! Files are taken as they are. A directory contributes the regular files in
//! its top level, sorted by name; subdirectories are not searched.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Expands `paths` into the list of files to inspect.
///
/// Order follows `paths`; each directory's files are inserted where the
/// directory appeared. A path that does not exist is an error.
///
/// # Examples
///
/// ```rust,no_run
/// use metaview_core::collect_input_files;
/// use std::path::PathBuf;
///
/// let files = collect_input_files(&[PathBuf::from("/path/to/photos")]).unwrap();
/// for file in files {
///     println!("{}", file.display());
/// }
/// ```
pub fn collect_input_files(paths: &[PathBuf]) -> CoreResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(directory_files(path)?);
        } else if path.exists() {
            files.push(path.clone());
        } else {
            return Err(CoreError::PathError(format!(
                "{} does not exist",
                path.display()
            )));
        }
    }
    Ok(files)
}

fn directory_files(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.is_file().then_some(path)
        })
        .collect();
    files.sort();
    log::debug!("Found {} files in {}", files.len(), dir.display());
    Ok(files)
}
