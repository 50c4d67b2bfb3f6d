// crates/infra/src/records.rs
use std::path::Path;

use log::debug;
use sanctuary_stats_domain::model::SubmissionRecord;
use sanctuary_stats_ports::records::RecordReader;
use sanctuary_stats_shared_kernel::{InfrastructureError, Result};
use serde_json::Value;

use crate::persistence::FileReader;

/// Reads a JSON-lines log: one JSON object per non-blank line.
#[derive(Debug, Default)]
pub struct JsonLinesReader;

impl JsonLinesReader {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_lines<I>(path: &Path, lines: I) -> Result<Vec<SubmissionRecord>>
    where
        I: IntoIterator<Item = (usize, String)>,
    {
        let mut records = Vec::new();
        for (line_no, line) in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let malformed = |details: String| InfrastructureError::MalformedRecord {
                path: path.to_path_buf(),
                line: line_no,
                details,
            };
            let value: Value = serde_json::from_str(line).map_err(|err| malformed(err.to_string()))?;
            let Value::Object(object) = value else {
                return Err(malformed("expected a JSON object".to_string()).into());
            };
            records.push(SubmissionRecord::from_object(&object));
        }
        debug!("decoded {} record(s) from {}", records.len(), path.display());
        Ok(records)
    }
}

impl RecordReader for JsonLinesReader {
    fn read(&self, path: &Path) -> Result<Vec<SubmissionRecord>> {
        Self::parse_lines(path, FileReader::lines(path)?)
    }
}
