//! Whole-file replacement of the destination.
//!
//! The payload is written to a temp file next to the destination and renamed
//! over it in [`AtomicFile::commit`]. Dropping an uncommitted `AtomicFile`
//! deletes the temp file, so readers only ever see the old file or the
//! complete new one.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{FetchError, Result};

pub struct AtomicFile {
    target: PathBuf,
    temp: NamedTempFile,
}

impl AtomicFile {
    /// Creates the temp file in the destination's directory. The directory
    /// must already exist.
    pub fn create(target: &Path) -> Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp = tempfile::Builder::new()
            .prefix(".nba-elo-fetch-")
            .suffix(".part")
            .tempfile_in(dir)
            .map_err(|e| FetchError::storage(target, e))?;

        // NamedTempFile is created 0600; the finished file should read like
        // any other output file.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))
                .map_err(|e| FetchError::storage(target, e))?;
        }

        log::debug!("Writing {:?} via temp file {:?}", target, temp.path());

        Ok(Self {
            target: target.to_path_buf(),
            temp,
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }

    /// Syncs the temp file and renames it over the destination, replacing
    /// any existing file.
    pub fn commit(mut self) -> Result<()> {
        self.temp
            .flush()
            .map_err(|e| FetchError::storage(&self.target, e))?;
        self.temp
            .as_file()
            .sync_all()
            .map_err(|e| FetchError::storage(&self.target, e))?;

        let target = self.target;
        self.temp
            .persist(&target)
            .map_err(|e| FetchError::storage(&target, e.error))?;

        log::info!("Replaced {:?}", target);
        Ok(())
    }
}

impl Write for AtomicFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.temp.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.temp.flush()
    }
}
