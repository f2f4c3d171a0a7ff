// Rust guideline compliant 2026-10-14

//! Destination module for writing merged lines.
//!
//! A destination is replaced as a whole: lines are written to a uniquely named
//! sibling temporary file which is synced and renamed over the target, so
//! readers only ever observe the previous contents or one complete new
//! contents, even when several merges target the same path.

use crate::{Error, Result};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Line terminator appended after every written line.
pub const LINE_TERMINATOR: &str = "\n";

/// Single writable sink receiving merged output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Path of the destination file.
    path: PathBuf,
}

impl Destination {
    /// Creates a new Destination for the given path.
    ///
    /// The file does not need to exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns a reference to the destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates a uniquely named temporary file next to the destination.
    ///
    /// Every call gets its own file, so concurrent writers never share one.
    fn create_temp(&self) -> std::io::Result<NamedTempFile> {
        let file_name = self.path.file_name().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Destination path has no file name",
            )
        })?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut prefix = std::ffi::OsString::from(".");
        prefix.push(file_name);
        prefix.push(".");

        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix).suffix(".tmp");

        // Same mode a plain file create gets, before umask.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }

        builder.tempfile_in(parent)
    }

    fn write_failed(&self, cause: std::io::Error) -> Error {
        Error::DestinationWriteFailed {
            path: self.path.clone(),
            cause,
        }
    }

    /// Replaces the destination contents with `lines`.
    ///
    /// Each line is followed by [`LINE_TERMINATOR`]. An empty slice produces a
    /// zero-byte file. An existing destination keeps its permissions.
    ///
    /// # Returns
    ///
    /// The number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DestinationWriteFailed`] if:
    /// - The destination path has no file name
    /// - The temporary file cannot be created or written
    /// - The rename over the destination fails
    ///
    /// On error the destination keeps its previous contents and the temporary
    /// file is removed.
    pub fn replace_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<u64> {
        self.try_replace(lines).map_err(|cause| self.write_failed(cause))
    }

    fn try_replace<S: AsRef<str>>(&self, lines: &[S]) -> std::io::Result<u64> {
        let mut temp = self.create_temp()?;
        let written = write_lines(&mut temp, lines)?;
        temp.as_file().sync_all()?;

        if let Ok(metadata) = std::fs::metadata(&self.path) {
            if metadata.is_file() {
                temp.as_file().set_permissions(metadata.permissions())?;
            }
        }

        // Dropping the temp file on a failed persist removes it.
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(written)
    }
}

fn write_lines<S: AsRef<str>>(temp: &mut NamedTempFile, lines: &[S]) -> std::io::Result<u64> {
    let mut writer = BufWriter::new(temp);
    let mut written = 0u64;

    for line in lines {
        let line = line.as_ref();
        writer.write_all(line.as_bytes())?;
        writer.write_all(LINE_TERMINATOR.as_bytes())?;
        written += (line.len() + LINE_TERMINATOR.len()) as u64;
    }

    writer.flush()?;
    Ok(written)
}

impl From<&Path> for Destination {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for Destination {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}
