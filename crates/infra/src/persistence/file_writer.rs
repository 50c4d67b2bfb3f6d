// crates/infra/src/persistence/file_writer.rs
use std::{fs, fs::File, io::BufWriter, path::Path};

use sanctuary_stats_shared_kernel::{InfrastructureError, Result};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`, creating parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| InfrastructureError::FileWrite { path: parent.to_path_buf(), source })?;
        }
        File::create(path)
            .map(BufWriter::new)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source }.into())
    }
}
