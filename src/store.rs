//! Document storage abstraction for reading and writing input files.
//!
//! Lets the update command read the changelog and descriptor and write the
//! patched descriptor without coupling it to the filesystem, so tests can
//! assert exactly which writes happen.
use color_eyre::eyre::WrapErr;
use log::*;
use std::{fs, path::Path};

use crate::Result;

/// Abstraction for whole-document reads and writes.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentStore {
    /// Read the full UTF-8 content of the document at `path`.
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace the document at `path` with `content`.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// Filesystem backed [`DocumentStore`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl DocumentStore for FsStore {
    fn read(&self, path: &Path) -> Result<String> {
        debug!("reading {}", path.display());

        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;

        Ok(content)
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        debug!("writing {} bytes to {}", content.len(), path.display());

        fs::write(path, content)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;

        Ok(())
    }
}
