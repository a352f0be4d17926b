//! hashbench - rolling hash benchmark tools
//!
//! Drives external `hash_<name>` executables to count digest collisions,
//! collect and summarize timing runs, and check that lines sharing a suffix
//! key always hash identically.

mod cli;
mod config;
mod core;
mod error;
mod export;
mod hasher;
mod tools;

use clap::Parser;
use cli::{Cli, Task};
use config::Config;
use error::Result;
use export::{create_exporter, get_output_writer, Exporter};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    // Convert to config
    let (config, task) = match cli.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    match run(&config, task) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Run one task and map its outcome to an exit code
fn run(config: &Config, task: Task) -> Result<ExitCode> {
    // Progress callback for logging
    let progress = |msg: &str| {
        tracing::info!("{}", msg);
    };

    let exporter = create_exporter(config.output_format);

    match task {
        Task::Distcomp { input, hash } => {
            let names = match hash {
                Some(h) => vec![h],
                None => config.hashes.clone(),
            };
            let hashes = hasher::external_hashes(config, &names)?;
            let report = tools::distcomp::run(config, &input, &hashes, progress)?;
            write_report(config, &*exporter, |e, w| e.export_collisions(&report, w))?;
            Ok(ExitCode::SUCCESS)
        }
        Task::Timecomp { input } => {
            let hashes = hasher::external_hashes(config, &config.hashes)?;
            let runs = tools::timecomp::run(config, &input, &hashes, progress)?;
            for r in &runs {
                if r.discard_failed {
                    tracing::warn!("hash_{}: discarded first run exited with an error", r.hash);
                }
                if r.failed > 0 {
                    tracing::warn!(
                        "hash_{}: {} of {} timing runs exited with an error",
                        r.hash,
                        r.failed,
                        r.recorded
                    );
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Task::Timesummary => {
            let report = tools::timesummary::run(config, progress)?;
            write_report(config, &*exporter, |e, w| e.export_throughput(&report, w))?;
            Ok(ExitCode::SUCCESS)
        }
        Task::Validate { inputs } => {
            let lines = core::load_text_lines(&inputs)?;
            let hashes = hasher::external_hashes(config, &config.hashes)?;
            let report = tools::validate::run(config, lines, &hashes, progress)?;
            write_report(config, &*exporter, |e, w| e.export_validation(&report, w))?;

            if report.mismatch_count() > 0 {
                Ok(ExitCode::from(1)) // Mismatches found
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn write_report(
    config: &Config,
    exporter: &dyn Exporter,
    export: impl FnOnce(&dyn Exporter, &mut dyn Write) -> Result<()>,
) -> Result<()> {
    let mut writer = get_output_writer(&config.output_filename)?;
    export(exporter, &mut *writer)?;
    writer.flush()?;
    Ok(())
}
