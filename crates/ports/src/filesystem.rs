// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use sanctuary_stats_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// DTO representing a regular file discovered under a group root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntryDto {
    pub path: PathBuf,
    pub name: String,
    pub ext: String,
}

impl FileEntryDto {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let ext = path.extension().map(|e| e.to_string_lossy().into_owned()).unwrap_or_default();
        Self { path, name, ext }
    }

    /// Case-sensitive suffix match on the file name; `ext` is given without
    /// the dot. A file named exactly `.sol` matches `sol`.
    pub fn has_extension(&self, ext: &str) -> bool {
        self.name.strip_suffix(ext).is_some_and(|stem| stem.ends_with('.'))
    }
}


/// Port for listing every regular file beneath a root, at any depth.
pub trait FileEnumerator {
    fn collect(&self, root: &Path) -> Result<Vec<FileEntryDto>>;
}
