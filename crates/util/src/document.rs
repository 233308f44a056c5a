//! Source documents loaded for splitting.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::unit_split::{Unit, count_words, split_into_units, unit_count};

/// Error surfaced when a document cannot be loaded.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// I/O failure while reading the document.
    #[error("failed to read document '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid UTF-8 text.
    #[error("document '{path}' is not valid UTF-8 text")]
    NotUtf8 { path: PathBuf },
}

/// A plain-text document and its word count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Display name (file name, or `<stdin>`).
    pub name: String,
    /// Full document text.
    pub text: String,
    /// Number of whitespace-separated words in `text`.
    pub total_words: usize,
}

impl Document {
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let total_words = count_words(&text);
        Self {
            name: name.into(),
            text,
            total_words,
        }
    }

    /// Reads a UTF-8 document from disk.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let bytes = fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| DocumentError::NotUtf8 { path: path.to_path_buf() })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let document = Self::from_text(name, text);
        debug!(path = %path.display(), total_words = document.total_words, "Loaded document");
        Ok(document)
    }

    /// Reads a UTF-8 document from any reader, e.g. stdin.
    pub fn from_reader(name: &str, mut reader: impl Read) -> Result<Self, DocumentError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|source| DocumentError::Read {
            path: PathBuf::from(name),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| DocumentError::NotUtf8 { path: PathBuf::from(name) })?;
        Ok(Self::from_text(name, text))
    }

    pub fn unit_count(&self, unit_size: usize) -> usize {
        unit_count(self.total_words, unit_size)
    }

    pub fn units(&self, unit_size: usize) -> Vec<Unit> {
        split_into_units(&self.text, unit_size)
    }
}
