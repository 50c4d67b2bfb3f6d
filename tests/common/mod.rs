// tests/common/mod.rs
//! Shared fixtures: a throwaway sanctuary tree and a plan file pointing at it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

#[derive(Debug)]
pub struct SanctuaryFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl SanctuaryFixture {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create `rel` (and parents) with `contents`.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Create an empty group directory with an empty log.
    pub fn empty_group(&self, rel: &str) {
        self.write(&format!("{rel}/contracts.json"), "");
    }

    /// Write a YAML plan with one network and the given `(group, path)` pairs.
    pub fn plan(&self, network: &str, groups: &[(&str, &str)]) -> PathBuf {
        let mut yaml = format!("networks:\n  - name: {network}\n    groups:\n");
        for (name, path) in groups {
            yaml.push_str(&format!("      - name: {name}\n        path: {path}\n"));
        }
        self.write("plan.yaml", &yaml)
    }
}
