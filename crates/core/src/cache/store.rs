//! Writing assets into the cache directory.

use super::naming::file_name_for;
use crate::Error;
use std::path::{Path, PathBuf};

/// Cache directory handle.
#[derive(Clone, Debug)]
pub struct SvgCache {
    dir: PathBuf,
}

impl SvgCache {
    /// Create a handle for the given directory.
    ///
    /// Nothing touches the filesystem until the first [`SvgCache::store`].
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the cached files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the asset for `title` is (or would be) stored at.
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.dir.join(file_name_for(title))
    }

    /// Write `bytes` for `title`, creating the directory if needed.
    ///
    /// Returns the path written. An existing file is overwritten.
    pub async fn store(&self, title: &str, bytes: &[u8]) -> Result<PathBuf, Error> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Error::cache(&self.dir, e))?;

        let path = self.path_for(title);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| Error::cache(&path, e))?;

        tracing::debug!("cached {} bytes at {}", bytes.len(), path.display());

        Ok(path)
    }
}
