// crates/ports/src/report.rs
use sanctuary_stats_shared_kernel::Result;

/// Port receiving rendered report text, in emission order.
pub trait ReportSink {
    fn emit(&mut self, text: &str) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl ReportSink for String {
    fn emit(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}
