//! CLI argument parsing using clap

use crate::config::{Config, OutputFormat, DEFAULT_HASHES, DEFAULT_KEY_LEN};
use crate::core::Separator;
use crate::error::{BenchError, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Rolling hash benchmark tools
#[derive(Parser, Debug)]
#[command(name = "hashbench")]
#[command(version)]
#[command(
    about = "Collision, throughput and consistency benchmarks for external hash executables",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Comma-separated hash function names (executables are hash_<name>)
    #[arg(
        long = "hashes",
        value_name = "NAMES",
        value_delimiter = ',',
        global = true,
        default_values_t = DEFAULT_HASHES.iter().map(|h| h.to_string()).collect::<Vec<_>>()
    )]
    pub hashes: Vec<String>,

    /// Key length: prefix bytes for distcomp, suffix characters for validate
    #[arg(short = 'k', long = "key-len", value_name = "N", global = true, default_value_t = DEFAULT_KEY_LEN)]
    pub key_len: usize,

    /// Separator between digest and word in hash output ("whitespace" or one character)
    #[arg(short = 's', long = "separator", value_name = "SEP", global = true, default_value = "whitespace")]
    pub separator: String,

    /// Directory containing the hash_<name> executables
    #[arg(long = "hash-dir", value_name = "DIR", global = true, default_value = ".")]
    pub hash_dir: PathBuf,

    /// Directory for time_<name> logs
    #[arg(long = "log-dir", value_name = "DIR", global = true, default_value = ".")]
    pub log_dir: PathBuf,

    /// Number of hash functions to run concurrently (0 = one per CPU)
    #[arg(short = 'j', long = "threads", value_name = "N", global = true, default_value_t = 1)]
    pub threads: usize,

    /// Output in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Output file for reports (use "-" for stdout)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT", global = true, default_value = "-")]
    pub output: String,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long = "log-level", value_name = "LEVEL", global = true, default_value = "info")]
    pub log_level: String,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count digest collisions over deduplicated line prefixes
    Distcomp {
        /// Run only this hash function
        #[arg(short = 'H', long = "hash", value_name = "HASH")]
        hash: Option<String>,

        /// List the N most frequent colliding digests per hash
        #[arg(long = "top", value_name = "N", default_value_t = 0)]
        top: usize,

        /// Input file of lines to hash
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Run each hash in timing mode and append results to time_<name> logs
    Timecomp {
        /// Recorded runs per hash
        #[arg(long = "runs", value_name = "N", default_value_t = 10)]
        runs: usize,

        /// Cache-priming reads of the input before timing
        #[arg(long = "warmups", value_name = "N", default_value_t = 2)]
        warmups: usize,

        /// Input file to hash
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Report average throughput (MiB/s) from time_<name> logs
    Timesummary,

    /// Check that lines sharing a suffix key hash identically
    Validate {
        /// Input files (stdin when omitted)
        #[arg(value_name = "INPUT")]
        inputs: Vec<PathBuf>,
    },
}

/// Subcommand inputs once the shared options are folded into [`Config`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Distcomp {
        input: PathBuf,
        hash: Option<String>,
    },
    Timecomp {
        input: PathBuf,
    },
    Timesummary,
    Validate {
        inputs: Vec<PathBuf>,
    },
}

impl Cli {
    /// Effective tracing filter directive
    pub fn log_filter(&self) -> &str {
        if self.global.quiet {
            "warn"
        } else {
            &self.global.log_level
        }
    }

    /// Parse command line arguments into a Config and the task to run
    pub fn into_config(self) -> Result<(Config, Task)> {
        let global = self.global;
        let separator: Separator = global.separator.parse()?;

        let num_threads = if global.threads == 0 {
            num_cpus::get()
        } else {
            global.threads
        };

        let hashes: Vec<String> = global
            .hashes
            .into_iter()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .collect();

        let mut config = Config {
            hashes,
            key_len: global.key_len,
            separator,
            hash_dir: global.hash_dir,
            log_dir: global.log_dir,
            num_threads,
            output_format: if global.json {
                OutputFormat::Json
            } else {
                OutputFormat::Console
            },
            output_filename: global.output,
            ..Config::default()
        };

        let task = match self.command {
            Command::Distcomp { hash, top, input } => {
                config.top_collisions = top;
                Task::Distcomp { input, hash }
            }
            Command::Timecomp {
                runs,
                warmups,
                input,
            } => {
                if runs == 0 {
                    return Err(BenchError::InvalidConfig(
                        "--runs must be at least 1".to_string(),
                    ));
                }
                config.timing_runs = runs;
                config.warmup_reads = warmups;
                Task::Timecomp { input }
            }
            Command::Timesummary => Task::Timesummary,
            Command::Validate { inputs } => Task::Validate { inputs },
        };

        config.validate()?;
        if let Task::Distcomp {
            hash: Some(name), ..
        } = &task
        {
            crate::config::validate_hash_name(name)?;
        }

        Ok((config, task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["hashbench", "distcomp", "words.txt"]);
        let (config, task) = cli.into_config().unwrap();

        assert_eq!(config.key_len, 19);
        assert_eq!(config.separator, Separator::Whitespace);
        assert_eq!(config.num_threads, 1);
        assert_eq!(config.hashes.len(), DEFAULT_HASHES.len());
        assert_eq!(config.output_format, OutputFormat::Console);
        assert_eq!(
            task,
            Task::Distcomp {
                input: PathBuf::from("words.txt"),
                hash: None
            }
        );
    }

    #[test]
    fn test_cli_single_hash() {
        let cli = Cli::parse_from(["hashbench", "distcomp", "-H", "rk", "--top", "5", "in.txt"]);
        let (config, task) = cli.into_config().unwrap();

        assert_eq!(config.top_collisions, 5);
        assert_eq!(
            task,
            Task::Distcomp {
                input: PathBuf::from("in.txt"),
                hash: Some("rk".to_string())
            }
        );
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "hashbench",
            "validate",
            "--hashes",
            "rk,adler",
            "-k",
            "8",
            "-s",
            ":",
            "-j",
            "4",
            "--json",
            "a.txt",
            "b.txt",
        ]);
        let (config, task) = cli.into_config().unwrap();

        assert_eq!(config.hashes, vec!["rk", "adler"]);
        assert_eq!(config.key_len, 8);
        assert_eq!(config.separator, Separator::Char(':'));
        assert_eq!(config.num_threads, 4);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(
            task,
            Task::Validate {
                inputs: vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
            }
        );
    }

    #[test]
    fn test_cli_timecomp_options() {
        let cli = Cli::parse_from([
            "hashbench",
            "--log-dir",
            "logs",
            "timecomp",
            "--runs",
            "3",
            "--warmups",
            "0",
            "big.txt",
        ]);
        let (config, task) = cli.into_config().unwrap();

        assert_eq!(config.timing_runs, 3);
        assert_eq!(config.warmup_reads, 0);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(
            task,
            Task::Timecomp {
                input: PathBuf::from("big.txt")
            }
        );
    }

    #[test]
    fn test_cli_threads_zero_uses_cpus() {
        let cli = Cli::parse_from(["hashbench", "-j", "0", "timesummary"]);
        let (config, task) = cli.into_config().unwrap();
        assert!(config.num_threads >= 1);
        assert_eq!(task, Task::Timesummary);
    }

    #[test]
    fn test_cli_rejects_zero_key_len() {
        let cli = Cli::parse_from(["hashbench", "-k", "0", "distcomp", "in.txt"]);
        assert!(matches!(
            cli.into_config(),
            Err(BenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_cli_rejects_bad_separator() {
        let cli = Cli::parse_from(["hashbench", "-s", "ab", "validate"]);
        assert!(cli.into_config().is_err());
    }

    #[test]
    fn test_cli_rejects_path_in_hash_name() {
        let cli = Cli::parse_from(["hashbench", "distcomp", "-H", "../sh", "in.txt"]);
        assert!(cli.into_config().is_err());
    }

    #[test]
    fn test_cli_quiet_lowers_log_level() {
        let cli = Cli::parse_from(["hashbench", "-q", "timesummary"]);
        assert_eq!(cli.log_filter(), "warn");

        let cli = Cli::parse_from(["hashbench", "timesummary"]);
        assert_eq!(cli.log_filter(), "info");
    }
}
