//! External `hash_<name>` executables invoked as subprocesses

use crate::error::{BenchError, Result};
use crate::hasher::{HashFunction, RunOutput};
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// A hash function implemented by an external executable
///
/// `hash_<name> <file>` prints one `<digest> <word>` line per input line;
/// `hash_<name> -f <file>` prints a timing report.
#[derive(Debug, Clone)]
pub struct ExternalHash {
    name: String,
    executable: PathBuf,
}

impl ExternalHash {
    pub fn new(name: impl Into<String>, executable: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            executable: executable.into(),
        }
    }

    fn run(&self, args: &[&OsStr]) -> Result<Output> {
        tracing::debug!(
            "running {} {:?}",
            self.executable.display(),
            args
        );

        Command::new(&self.executable)
            .args(args)
            .output()
            .map_err(|e| {
                let reason = if e.kind() == ErrorKind::NotFound {
                    format!("executable '{}' not found", self.executable.display())
                } else {
                    format!("failed to run '{}': {}", self.executable.display(), e)
                };
                BenchError::ExternalToolFailure {
                    name: self.name.clone(),
                    exit_code: None,
                    reason,
                }
            })
    }
}

impl HashFunction for ExternalHash {
    fn name(&self) -> &str {
        &self.name
    }

    fn hash_lines(&self, input: &Path) -> Result<Vec<String>> {
        let output = self.run(&[input.as_os_str()])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BenchError::ExternalToolFailure {
                name: self.name.clone(),
                exit_code: output.status.code(),
                reason: format!("{} ({})", output.status, stderr.trim()),
            });
        }

        let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|l| l.to_string())
            .collect();

        Ok(lines)
    }

    fn time_file(&self, input: &Path) -> Result<RunOutput> {
        let output = self.run(&[OsStr::new("-f"), input.as_os_str()])?;

        Ok(RunOutput {
            stdout: output.stdout,
            exit_code: output.status.code(),
            success: output.status.success(),
        })
    }
}
