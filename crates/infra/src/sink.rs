// crates/infra/src/sink.rs
use std::io::Write;

use sanctuary_stats_ports::report::ReportSink;
use sanctuary_stats_shared_kernel::{InfrastructureError, Result};

/// Report sink over any `Write` (stdout, a buffered file, a `Vec<u8>`).
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriterSink<std::io::BufWriter<std::io::Stdout>> {
    pub fn stdout() -> Self {
        Self::new(std::io::BufWriter::new(std::io::stdout()))
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn emit(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).map_err(output_error)?;
        // Sections stream out as soon as they are complete.
        self.out.flush().map_err(output_error)
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush().map_err(output_error)
    }
}

fn output_error(err: std::io::Error) -> sanctuary_stats_shared_kernel::StatsError {
    InfrastructureError::OutputError { message: "failed to write report".to_string(), source: Some(Box::new(err)) }
        .into()
}
