//! The open input file a parser reads from.
//!
//! An [`InputSource`] owns the file handle for the duration of one
//! extraction. Dropping it closes the file, so whoever holds it controls
//! the lifetime of the underlying resource.

use crate::error::{CoreError, CoreResult};
use crate::utils::lowercase_extension;

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

/// Number of leading bytes kept for signature detection.
pub const SIGNATURE_LEN: usize = 64;

/// An opened, non-empty input file.
#[derive(Debug)]
pub struct InputSource {
    path: PathBuf,
    reader: BufReader<File>,
    size: u64,
    signature: Vec<u8>,
}

impl InputSource {
    /// Opens `path` and reads its signature.
    ///
    /// Fails for directories and zero-byte files.
    pub fn open(path: &Path) -> CoreResult<Self> {
        let file = File::open(path)?;
        let fs_metadata = file.metadata()?;
        if fs_metadata.is_dir() {
            return Err(CoreError::PathError(format!(
                "{} is a directory",
                path.display()
            )));
        }
        let size = fs_metadata.len();
        if size == 0 {
            return Err(CoreError::EmptyInput(path.to_path_buf()));
        }

        let mut reader = BufReader::new(file);
        let mut signature = Vec::with_capacity(SIGNATURE_LEN);
        reader
            .by_ref()
            .take(SIGNATURE_LEN as u64)
            .read_to_end(&mut signature)?;
        reader.rewind()?;

        log::debug!("Opened {} ({} bytes)", path.display(), size);
        Ok(Self {
            path: path.to_path_buf(),
            reader,
            size,
            signature,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Up to [`SIGNATURE_LEN`] leading bytes of the file.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Lowercased file extension, used as a format hint.
    pub fn extension(&self) -> Option<String> {
        lowercase_extension(&self.path)
    }

    /// Buffered reader positioned at the start of the file.
    pub fn reader(&mut self) -> CoreResult<&mut BufReader<File>> {
        self.reader.rewind()?;
        Ok(&mut self.reader)
    }

    /// A second handle to the same open file, positioned at the start.
    ///
    /// Backends that need an owned reader use this; the clone shares the
    /// file offset with the source and is closed when the backend drops it.
    pub fn file_handle(&mut self) -> CoreResult<File> {
        self.reader.rewind()?;
        Ok(self.reader.get_ref().try_clone()?)
    }
}

impl Drop for InputSource {
    fn drop(&mut self) {
        log::debug!("Released {}", self.path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_reads_signature() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"fLaC and then some bytes")?;

        let mut source = InputSource::open(file.path())?;
        assert_eq!(source.size(), 24);
        assert!(source.signature().starts_with(b"fLaC"));

        let mut contents = String::new();
        source.reader()?.read_to_string(&mut contents)?;
        assert_eq!(contents, "fLaC and then some bytes");
        Ok(())
    }

    #[test]
    fn test_open_rejects_empty_file() -> Result<(), Box<dyn std::error::Error>> {
        let file = tempfile::NamedTempFile::new()?;
        let err = InputSource::open(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::EmptyInput(_)));
        Ok(())
    }

    #[test]
    fn test_open_rejects_directory() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        assert!(InputSource::open(dir.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let err = InputSource::open(Path::new("surely/this/does/not/exist.jpg")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
