// Rust guideline compliant 2026-10-14

//! Source identifiers and line readers.
//!
//! A source is any named text origin. The coordinator never interprets a
//! [`SourceId`]; only the [`SourceReader`] in use decides what it refers to.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque handle naming one source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Creates a new source identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets the identifier as a filesystem path.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl TryFrom<&Path> for SourceId {
    type Error = Error;

    /// Converts a filesystem path into an identifier.
    ///
    /// Fails with [`Error::SourceUnavailable`] (cause kind `InvalidInput`) if
    /// the path is not valid UTF-8, rather than naming a different file.
    fn try_from(path: &Path) -> Result<Self> {
        match path.to_str() {
            Some(id) => Ok(Self::new(id)),
            None => Err(Error::SourceUnavailable {
                source_id: Self(path.to_string_lossy().into_owned()),
                cause: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "source path is not valid UTF-8",
                ),
            }),
        }
    }
}

impl TryFrom<PathBuf> for SourceId {
    type Error = Error;

    fn try_from(path: PathBuf) -> Result<Self> {
        Self::try_from(path.as_path())
    }
}

/// Reads one source into its ordered lines.
///
/// Implementations must not keep per-call state: a single reader serves every
/// concurrent read of a merge.
pub trait SourceReader: Send + Sync {
    /// Reads the full content of `source_id` and splits it into lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the source cannot be opened,
    /// read, or decoded.
    fn read(&self, source_id: &SourceId) -> Result<Vec<String>>;
}

impl<R: SourceReader + ?Sized> SourceReader for &R {
    fn read(&self, source_id: &SourceId) -> Result<Vec<String>> {
        (**self).read(source_id)
    }
}

impl<R: SourceReader + ?Sized> SourceReader for Box<R> {
    fn read(&self, source_id: &SourceId) -> Result<Vec<String>> {
        (**self).read(source_id)
    }
}

/// Reads sources from the local filesystem as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl FileSource {
    /// Creates a new file-backed reader.
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for FileSource {
    fn read(&self, source_id: &SourceId) -> Result<Vec<String>> {
        let unavailable = |cause: std::io::Error| Error::SourceUnavailable {
            source_id: source_id.clone(),
            cause,
        };

        let bytes = std::fs::read(source_id.as_path()).map_err(unavailable)?;
        let content = String::from_utf8(bytes).map_err(|e| {
            unavailable(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(split_lines(&content))
    }
}

/// Splits text into lines without their terminators.
///
/// Lines end at `\n`, optionally preceded by `\r`. Empty lines are kept, and a
/// final terminator does not produce a trailing empty line.
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_owned).collect()
}
