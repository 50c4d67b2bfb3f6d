// src/main.rs
#![allow(clippy::multiple_crate_versions)]

mod cli;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use log::info;
use sanctuary_stats_infra::{JsonLinesReader, WalkFileEnumerator, WriterSink, persistence::FileWriter};
use sanctuary_stats_ports::report::ReportSink;
use sanctuary_stats_usecase::RunOrchestrator;

use crate::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let plan = config::build_plan(args)?;
    let enumerator = WalkFileEnumerator::new();
    let reader = JsonLinesReader::new();
    let orchestrator = RunOrchestrator::new(&enumerator, &reader, args.format.formatter(), &plan);

    let mut sink: Box<dyn ReportSink> = match &args.output {
        Some(path) => Box::new(WriterSink::new(FileWriter::create(path)?)),
        None => Box::new(WriterSink::stdout()),
    };

    let results = orchestrator.run_plan(&plan, &Local::now(), sink.as_mut())?;
    for result in &results {
        info!(
            "{}: {} source unit(s), {} unique name(s)",
            result.network, result.totals.file_count, result.totals.unique_name_count
        );
    }
    Ok(())
}
