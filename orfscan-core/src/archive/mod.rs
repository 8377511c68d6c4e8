//! Persistent archive of the record store.
//!
//! The archive is a UTF-8 JSON array (see [`serialize`] for the schema).
//! It is read once when a session starts and rewritten in full on save,
//! replacing the previous file content.
//!
//! ## Fallback path
//!
//! When the configured archive path cannot be opened, [`Archive`] retries
//! with its fallback path (by default `orf_history.json` in the working
//! directory) before reporting an error. A primary file that does not exist
//! yet in an existing directory is a fresh archive: it loads as an empty
//! store and the fallback is not read. An empty archive file also loads
//! empty.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use orfscan_core::archive::Archive;
//! use orfscan_core::OrfScanner;
//!
//! let archive = Archive::new("history.json");
//! let mut history = archive.load()?;
//!
//! let mut turn = OrfScanner::default().scan("AUGCCCUAA")?.into_store()?;
//! history.merge(&mut turn)?;
//! archive.save(&history)?;
//! # Ok::<(), orfscan_core::types::OrfScanError>(())
//! ```

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::constants::DEFAULT_ARCHIVE_PATH;
use crate::store::RecordStore;
use crate::types::OrfScanError;

mod codec;

pub use codec::{deserialize, serialize};

/// Location of an archive file plus the path tried when it cannot be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    path: PathBuf,
    fallback_path: PathBuf,
}

impl Archive {
    /// Archive at `path`, falling back to the default archive path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_fallback(path, DEFAULT_ARCHIVE_PATH)
    }

    pub fn with_fallback<P: Into<PathBuf>, F: Into<PathBuf>>(path: P, fallback_path: F) -> Self {
        Self {
            path: path.into(),
            fallback_path: fallback_path.into(),
        }
    }

    /// Archive described by the session configuration
    #[must_use]
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::with_fallback(
            config.archive_path.clone(),
            config.fallback_archive_path.clone(),
        )
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn fallback_path(&self) -> &Path {
        &self.fallback_path
    }

    /// Reads the archive into a store.
    ///
    /// # Errors
    ///
    /// - [`OrfScanError::IoError`] if neither path can be read for a reason
    ///   other than the file not existing.
    /// - [`OrfScanError::ParseError`] / [`OrfScanError::ValidationError`] if
    ///   the content is not a valid archive.
    pub fn load(&self) -> Result<RecordStore, OrfScanError> {
        let Some(mut file) = self.open_with_fallback(|path| File::open(path))? else {
            debug!(path = %self.path.display(), "no archive found, starting empty");
            return Ok(RecordStore::new());
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| OrfScanError::ParseError(format!("archive is not UTF-8: {}", e)))?;
        let store = deserialize(&text)?;
        debug!(records = store.len(), "loaded archive");
        Ok(store)
    }

    /// Overwrites the archive with the full content of `store`.
    ///
    /// The store is encoded before any file is touched, so an encoding
    /// failure leaves the previous archive intact. Returns the path that
    /// was written.
    ///
    /// # Errors
    ///
    /// - [`OrfScanError::ValidationError`] if the store cannot be encoded.
    /// - [`OrfScanError::IoError`] if neither path can be written.
    pub fn save(&self, store: &RecordStore) -> Result<PathBuf, OrfScanError> {
        let text = serialize(store)?;

        let (file, written_path) = match File::create(&self.path) {
            Ok(file) => (file, self.path.clone()),
            Err(error) if self.fallback_path != self.path => {
                warn!(
                    path = %self.path.display(),
                    fallback = %self.fallback_path.display(),
                    %error,
                    "cannot open archive for writing, using fallback path"
                );
                (File::create(&self.fallback_path)?, self.fallback_path.clone())
            }
            Err(error) => return Err(error.into()),
        };

        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        debug!(path = %written_path.display(), records = store.len(), "saved archive");
        Ok(written_path)
    }

    /// Opens the primary path, then the fallback. `Ok(None)` means there is
    /// no archive yet.
    ///
    /// A primary file that is merely absent from an existing directory is a
    /// fresh archive and never reads the fallback.
    fn open_with_fallback<F>(&self, open: F) -> Result<Option<File>, OrfScanError>
    where
        F: Fn(&Path) -> std::io::Result<File>,
    {
        let primary_error = match open(&self.path) {
            Ok(file) => return Ok(Some(file)),
            Err(error) => error,
        };

        if primary_error.kind() == ErrorKind::NotFound && parent_exists(&self.path) {
            return Ok(None);
        }

        if self.fallback_path == self.path {
            return missing_as_none(primary_error);
        }

        warn!(
            path = %self.path.display(),
            fallback = %self.fallback_path.display(),
            error = %primary_error,
            "cannot open archive, trying fallback path"
        );

        match open(&self.fallback_path) {
            Ok(file) => Ok(Some(file)),
            Err(fallback_error) if fallback_error.kind() == ErrorKind::NotFound => {
                missing_as_none(primary_error)
            }
            Err(fallback_error) => Err(fallback_error.into()),
        }
    }
}

impl Default for Archive {
    fn default() -> Self {
        Self::new(DEFAULT_ARCHIVE_PATH)
    }
}

fn parent_exists(path: &Path) -> bool {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
        _ => true,
    }
}

fn missing_as_none(error: std::io::Error) -> Result<Option<File>, OrfScanError> {
    if error.kind() == ErrorKind::NotFound {
        Ok(None)
    } else {
        Err(error.into())
    }
}
