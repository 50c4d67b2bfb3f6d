// src/cli/value_enum.rs
use clap::ValueEnum;
use sanctuary_stats_usecase::{JsonlFormatter, MarkdownFormatter, ReportFormatter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    #[default]
    Markdown,
    Jsonl,
}

impl CliOutputFormat {
    pub fn formatter(self) -> &'static dyn ReportFormatter {
        match self {
            Self::Markdown => &MarkdownFormatter,
            Self::Jsonl => &JsonlFormatter,
        }
    }
}
