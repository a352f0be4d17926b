//! Consistency validator
//!
//! Orders the input by suffix so that lines sharing their last `key_len`
//! characters sit next to each other, then checks every hash gives such
//! neighbours the same digest.

use crate::config::Config;
use crate::core::{sort_by_suffix, write_temp_lines, DigestRecord, Mismatch, SuffixChecker};
use crate::error::Result;
use crate::hasher::HashFunction;
use crate::tools::for_each_hash;
use serde::Serialize;
use std::path::Path;

/// Validation outcome for one hash function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashValidation {
    pub hash: String,
    pub records: usize,
    pub mismatches: Vec<Mismatch>,
}

/// Validation outcome for every hash function
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub key_len: usize,
    pub lines: usize,
    pub results: Vec<HashValidation>,
}

impl ValidationReport {
    /// Total mismatches across all hashes
    pub fn mismatch_count(&self) -> usize {
        self.results.iter().map(|r| r.mismatches.len()).sum()
    }
}

/// Run one hash over the suffix-sorted file and fold the adjacent-key check
pub fn check_hash(
    hash: &dyn HashFunction,
    sorted_file: &Path,
    config: &Config,
) -> Result<HashValidation> {
    let mut checker = SuffixChecker::new(config.key_len);
    let mut records = 0;
    let mut mismatches = Vec::new();

    for line in hash.hash_lines(sorted_file)? {
        let record = DigestRecord::parse(&line, config.separator)?;
        records += 1;
        if let Some(mismatch) = checker.check(&line, &record) {
            tracing::debug!(hash = hash.name(), key = %mismatch.key, "hash mismatch");
            mismatches.push(mismatch);
        }
    }

    Ok(HashValidation {
        hash: hash.name().to_string(),
        records,
        mismatches,
    })
}

/// Validate `lines` against every hash in `hashes`
pub fn run(
    config: &Config,
    lines: Vec<String>,
    hashes: &[Box<dyn HashFunction>],
    progress: impl Fn(&str) + Send + Sync,
) -> Result<ValidationReport> {
    let line_count = lines.len();
    let sorted = sort_by_suffix(lines);
    let sorted_file = write_temp_lines(&sorted)?;
    progress(&format!("Sorted {} lines by suffix", line_count));

    let results = for_each_hash(hashes, config.num_threads, |hash| {
        check_hash(hash, sorted_file.path(), config)
    })?;

    Ok(ValidationReport {
        key_len: config.key_len,
        lines: line_count,
        results,
    })
}
