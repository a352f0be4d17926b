//! Configuration types for hashbench

use crate::core::Separator;
use crate::error::{BenchError, Result};
use std::path::PathBuf;

/// Hash families shipped with the rolling hash benchmark
pub const DEFAULT_HASHES: &[&str] = &["adler", "null", "rk", "rk_static", "rp_table", "shift_xor"];

/// Key length used for prefix deduplication and suffix comparison
pub const DEFAULT_KEY_LEN: usize = 19;

/// Executable name prefix for external hash tools
pub const HASH_EXECUTABLE_PREFIX: &str = "hash_";

/// Timing log name prefix
pub const TIMING_LOG_PREFIX: &str = "time_";

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text, one line per hash function
    #[default]
    Console,
    /// JSON document
    Json,
}

/// Configuration shared by every subcommand
#[derive(Debug, Clone)]
pub struct Config {
    /// Hash function names, in report order (default: [`DEFAULT_HASHES`])
    pub hashes: Vec<String>,

    /// Prefix/suffix key length in bytes or characters (default: 19)
    pub key_len: usize,

    /// Field separator between digest and word in hash output
    pub separator: Separator,

    /// Directory holding the `hash_<name>` executables
    pub hash_dir: PathBuf,

    /// Directory holding the `time_<name>` logs
    pub log_dir: PathBuf,

    /// Number of recorded runs per hash in the timing harness (default: 10)
    pub timing_runs: usize,

    /// Number of cache-priming reads before timing (default: 2)
    pub warmup_reads: usize,

    /// Number of hash functions run concurrently (default: 1)
    pub num_threads: usize,

    /// Number of most frequent colliding digests to list per hash (0 = none)
    pub top_collisions: usize,

    /// Output format (console or json)
    pub output_format: OutputFormat,

    /// Path to output file (or "-" for stdout)
    pub output_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hashes: DEFAULT_HASHES.iter().map(|h| h.to_string()).collect(),
            key_len: DEFAULT_KEY_LEN,
            separator: Separator::Whitespace,
            hash_dir: PathBuf::from("."),
            log_dir: PathBuf::from("."),
            timing_runs: 10,
            warmup_reads: 2,
            num_threads: 1,
            top_collisions: 0,
            output_format: OutputFormat::Console,
            output_filename: String::from("-"),
        }
    }
}

impl Config {
    /// Path of the executable for the given hash name
    pub fn hash_executable(&self, hash: &str) -> PathBuf {
        self.hash_dir
            .join(format!("{}{}", HASH_EXECUTABLE_PREFIX, hash))
    }

    /// Path of the timing log for the given hash name
    pub fn timing_log(&self, hash: &str) -> PathBuf {
        self.log_dir.join(format!("{}{}", TIMING_LOG_PREFIX, hash))
    }

    /// Check values that clap cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if self.key_len == 0 {
            return Err(BenchError::InvalidConfig(
                "key length must be at least 1".to_string(),
            ));
        }
        if self.hashes.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one hash function is required".to_string(),
            ));
        }
        for hash in &self.hashes {
            validate_hash_name(hash)?;
        }
        if self.num_threads == 0 {
            return Err(BenchError::InvalidConfig(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Reject names that would escape the hash directory or are empty
pub fn validate_hash_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name == ".." {
        return Err(BenchError::InvalidConfig(format!(
            "invalid hash name '{}'",
            name
        )));
    }
    Ok(())
}
