// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use sanctuary_stats_shared_kernel::{InfrastructureError, Result};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> Result<File> {
        File::open(path).map_err(|source| read_error(path, source))
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the file line by line, yielding `(1-based line number, line)`.
    ///
    /// A UTF-8 BOM on the first line is stripped, as is a trailing `\r`.
    pub fn lines(path: &Path) -> Result<Vec<(usize, String)>> {
        let reader = Self::open_buffered(path)?;
        let mut lines = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| read_error(path, source))?;
            let line = if idx == 0 { line.strip_prefix('\u{feff}').map(str::to_owned).unwrap_or(line) } else { line };
            lines.push((idx + 1, line.trim_end_matches('\r').to_owned()));
        }
        Ok(lines)
    }
}

fn read_error(path: &Path, source: std::io::Error) -> sanctuary_stats_shared_kernel::StatsError {
    if source.kind() == std::io::ErrorKind::NotFound {
        InfrastructureError::PathNotFound { path: path.to_path_buf() }.into()
    } else {
        InfrastructureError::FileRead { path: path.to_path_buf(), source }.into()
    }
}
