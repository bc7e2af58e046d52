//! Reading input documents.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors raised while reading an input document.
#[derive(Debug, Error)]
pub enum TermsError {
    /// The document could not be opened or read.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path of the document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Reads a document fully and decodes it as UTF-8.
///
/// Invalid byte sequences are dropped rather than replaced, so a stray Latin-1 byte in an
/// exported résumé never produces a term of its own.
pub fn read_text(path: &Path) -> Result<String, TermsError> {
    let mut bytes = Vec::new();
    fs::File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(|source| TermsError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(decode_lossy(&bytes))
}

/// Decodes UTF-8, skipping invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
