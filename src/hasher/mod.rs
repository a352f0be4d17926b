//! Hash function abstraction
//!
//! The tools never compute digests themselves. Every hash is a black box
//! behind [`HashFunction`]; production runs use [`ExternalHash`] executables,
//! tests plug in deterministic stubs.

mod external;

pub use external::ExternalHash;

use crate::config::{validate_hash_name, Config};
use crate::error::Result;
use std::path::Path;

/// Captured result of a timing-mode run
#[derive(Debug, Clone, Default)]
pub struct RunOutput {
    /// Everything the hash printed on stdout
    pub stdout: Vec<u8>,
    /// Exit code, `None` when terminated by a signal
    pub exit_code: Option<i32>,
    /// Whether the run exited successfully
    pub success: bool,
}

/// A named hash function that can digest a file of lines
pub trait HashFunction: Send + Sync {
    /// Name used in reports and log file names
    fn name(&self) -> &str;

    /// Hash each line of `input`; returns one `<digest><sep><word>` line per
    /// input line
    fn hash_lines(&self, input: &Path) -> Result<Vec<String>>;

    /// Hash the whole file in timing mode and return its self-reported timing
    fn time_file(&self, input: &Path) -> Result<RunOutput>;
}

/// Build external hash functions for the given names
pub fn external_hashes(config: &Config, names: &[String]) -> Result<Vec<Box<dyn HashFunction>>> {
    names
        .iter()
        .map(|name| {
            validate_hash_name(name)?;
            Ok(Box::new(ExternalHash::new(name.clone(), config.hash_executable(name)))
                as Box<dyn HashFunction>)
        })
        .collect()
}
