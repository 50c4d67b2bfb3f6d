// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use log::{debug, warn};
use sanctuary_stats_ports::filesystem::{FileEntryDto, FileEnumerator};
use sanctuary_stats_shared_kernel::{InfrastructureError, Result};

/// Filesystem adapter implementing the `FileEnumerator` port.
///
/// This is a plain recursive listing: hidden files, `.gitignore` and friends
/// get no special treatment. Symlinks are followed, so a linked file counts
/// as a file and a linked directory is descended into; link cycles are
/// skipped with a warning.
#[derive(Debug, Default)]
pub struct WalkFileEnumerator;

impl WalkFileEnumerator {
    pub fn new() -> Self {
        Self
    }

    pub fn enumerate(root: &Path) -> Result<Vec<FileEntryDto>> {
        ensure_root(root)?;

        let mut builder = WalkBuilder::new(root);
        builder.standard_filters(false);
        builder.follow_links(true);

        let mut entries = Vec::new();
        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) if is_loop(&err) => {
                    warn!("skipping symlink cycle under {}: {err}", root.display());
                    continue;
                }
                Err(err) => return Err(walk_error(root, err)),
            };
            if entry.file_type().is_some_and(|ft| ft.is_file()) {
                entries.push(FileEntryDto::from_path(entry.into_path()));
            }
        }
        // Directory iteration order is platform-dependent; sort for
        // reproducible output.
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        debug!("enumerated {} file(s) under {}", entries.len(), root.display());
        Ok(entries)
    }
}

impl FileEnumerator for WalkFileEnumerator {
    fn collect(&self, root: &Path) -> Result<Vec<FileEntryDto>> {
        Self::enumerate(root)
    }
}

fn ensure_root(root: &Path) -> Result<()> {
    match std::fs::metadata(root) {
        Ok(md) if md.is_dir() => Ok(()),
        Ok(_) => Err(InfrastructureError::NotReadable {
            path: root.to_path_buf(),
            source: std::io::Error::other("not a directory"),
        }
        .into()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(InfrastructureError::PathNotFound { path: root.to_path_buf() }.into())
        }
        Err(source) => Err(InfrastructureError::NotReadable { path: root.to_path_buf(), source }.into()),
    }
}

fn walk_error(root: &Path, err: ignore::Error) -> sanctuary_stats_shared_kernel::StatsError {
    let path = failing_path(&err).unwrap_or_else(|| root.to_path_buf());
    match err.into_io_error() {
        Some(source) => InfrastructureError::NotReadable { path, source }.into(),
        None => InfrastructureError::WalkFailed { root: root.to_path_buf(), details: path.display().to_string() }.into(),
    }
}

fn is_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_loop(err),
        _ => false,
    }
}

fn failing_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => failing_path(err),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use sanctuary_stats_shared_kernel::StatsError;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn lists_files_at_every_depth() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("0x/ab/cd")).unwrap();
        fs::write(dir.path().join("top.sol"), "").unwrap();
        fs::write(dir.path().join("0x/ab/Token.sol"), "").unwrap();
        fs::write(dir.path().join("0x/ab/cd/Deep.sol"), "").unwrap();
        fs::write(dir.path().join("contracts.json"), "").unwrap();

        let entries = WalkFileEnumerator::enumerate(dir.path()).unwrap();
        let mut names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, ["Deep.sol", "Token.sol", "contracts.json", "top.sol"]);
        assert_eq!(entries.iter().filter(|e| e.has_extension("sol")).count(), 3);
    }

    #[test]
    fn hidden_and_ignored_files_are_listed() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.sol\n").unwrap();
        fs::write(dir.path().join(".Hidden.sol"), "").unwrap();
        fs::write(dir.path().join("Ignored.sol"), "").unwrap();

        let entries = WalkFileEnumerator::enumerate(dir.path()).unwrap();
        assert_eq!(entries.iter().filter(|e| e.has_extension("sol")).count(), 2);
    }

    #[test]
    fn directories_are_not_entries() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("empty.sol")).unwrap();
        let entries = WalkFileEnumerator::new().collect(dir.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_and_directories_are_followed() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real");
        fs::create_dir_all(&real).unwrap();
        fs::write(real.join("Token.sol"), "").unwrap();
        let group = dir.path().join("group");
        fs::create_dir_all(&group).unwrap();
        std::os::unix::fs::symlink(real.join("Token.sol"), group.join("Link.sol")).unwrap();
        std::os::unix::fs::symlink(&real, group.join("linked")).unwrap();

        let entries = WalkFileEnumerator::enumerate(&group).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Link.sol", "Token.sol"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_cycle_is_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("a/One.sol"), "").unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("a/back")).unwrap();

        let entries = WalkFileEnumerator::enumerate(dir.path()).unwrap();
        assert_eq!(entries.iter().filter(|e| e.has_extension("sol")).count(), 1);
    }

    #[test]
    fn missing_root_is_path_not_found() {
        let dir = tempdir().unwrap();
        let err = WalkFileEnumerator::enumerate(&dir.path().join("ropsten")).unwrap_err();
        assert!(matches!(err, StatsError::Infrastructure(InfrastructureError::PathNotFound { .. })));
    }

    #[test]
    fn file_root_is_not_readable() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("contracts.json");
        fs::write(&file, "").unwrap();
        let err = WalkFileEnumerator::enumerate(&file).unwrap_err();
        assert!(matches!(err, StatsError::Infrastructure(InfrastructureError::NotReadable { .. })));
    }
}
