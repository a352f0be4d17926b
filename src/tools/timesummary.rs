//! Timing summarizer: turns `time_<hash>` logs into average throughput

use crate::config::Config;
use crate::core::{summarize_log, TimingTotals};
use crate::error::{BenchError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;

/// Average throughput for one hash function
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HashThroughput {
    pub hash: String,
    pub total_bytes: f64,
    pub total_seconds: f64,
    pub samples: usize,
    pub mib_per_sec: f64,
}

/// Throughput of every configured hash function
#[derive(Debug, Clone, Serialize)]
pub struct ThroughputReport {
    pub results: Vec<HashThroughput>,
}

/// Summarize the timing log of one hash
pub fn summarize_hash(config: &Config, hash: &str) -> Result<HashThroughput> {
    let path = config.timing_log(hash);
    let file = File::open(&path).map_err(|e| BenchError::input_not_found(&path, e))?;
    let totals: TimingTotals = summarize_log(BufReader::new(file))?;
    let mib_per_sec = totals.throughput_mib_per_sec(hash)?;

    Ok(HashThroughput {
        hash: hash.to_string(),
        total_bytes: totals.bytes,
        total_seconds: totals.seconds,
        samples: totals.samples,
        mib_per_sec,
    })
}

/// Summarize the logs of every hash in `config.hashes`
pub fn run(config: &Config, progress: impl Fn(&str)) -> Result<ThroughputReport> {
    let mut results = Vec::with_capacity(config.hashes.len());
    for hash in &config.hashes {
        let summary = summarize_hash(config, hash)?;
        progress(&format!(
            "{}: {} samples from {}",
            hash,
            summary.samples,
            config.timing_log(hash).display()
        ));
        results.push(summary);
    }
    Ok(ThroughputReport { results })
}
