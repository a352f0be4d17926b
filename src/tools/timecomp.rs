//! Timing harness
//!
//! Primes the OS cache, then runs every hash in timing mode and appends its
//! self-reported timing output to `time_<hash>` logs.

use crate::config::Config;
use crate::error::{BenchError, Result};
use crate::hasher::HashFunction;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// What the harness recorded for one hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessRun {
    pub hash: String,
    /// Runs appended to the log
    pub recorded: usize,
    /// Recorded runs that exited non-zero
    pub failed: usize,
    /// The discarded first run exited non-zero
    pub discard_failed: bool,
}

/// Read the whole input to prime the page cache
fn warm_up(input: &Path, reads: usize) -> Result<()> {
    for _ in 0..reads {
        let mut file = File::open(input).map_err(|e| BenchError::input_not_found(input, e))?;
        io::copy(&mut file, &mut io::sink())?;
    }
    Ok(())
}

/// Run the harness. Hashes run one after another so their timings do not
/// interfere.
pub fn run(
    config: &Config,
    input: &Path,
    hashes: &[Box<dyn HashFunction>],
    progress: impl Fn(&str),
) -> Result<Vec<HarnessRun>> {
    warm_up(input, config.warmup_reads)?;

    if !config.log_dir.as_os_str().is_empty() && !config.log_dir.exists() {
        std::fs::create_dir_all(&config.log_dir)?;
    }

    let mut runs = Vec::with_capacity(hashes.len());
    for hash in hashes {
        let log_path = config.timing_log(hash.name());
        progress(&format!(
            "Timing hash_{} ({} runs) -> {}",
            hash.name(),
            config.timing_runs,
            log_path.display()
        ));

        // First run is discarded
        let discard_failed = !hash.time_file(input)?.success;

        let mut log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let mut failed = 0;
        for i in 0..config.timing_runs {
            let output = hash.time_file(input)?;
            if !output.success {
                failed += 1;
                tracing::debug!(
                    hash = hash.name(),
                    run = i + 1,
                    exit_code = ?output.exit_code,
                    "timing run failed"
                );
            }
            log.write_all(&output.stdout)?;
        }
        log.flush()?;

        runs.push(HarnessRun {
            hash: hash.name().to_string(),
            recorded: config.timing_runs,
            failed,
            discard_failed,
        });
    }

    Ok(runs)
}
