//! CLI integration tests for hashbench

use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hashbench"))
}

mod cli_behavior {
    use super::*;

    #[test]
    fn test_help_flag() {
        let output = binary().arg("--help").output().expect("Failed to run binary");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("distcomp"));
        assert!(stdout.contains("timecomp"));
        assert!(stdout.contains("timesummary"));
        assert!(stdout.contains("validate"));
        assert!(stdout.contains("--hashes"));
    }

    #[test]
    fn test_version_flag() {
        let output = binary()
            .arg("--version")
            .output()
            .expect("Failed to run binary");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("hashbench"));
    }

    #[test]
    fn test_missing_subcommand() {
        let output = binary().output().expect("Failed to run binary");

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Usage") || stderr.contains("subcommand"));
    }

    #[test]
    fn test_distcomp_requires_input() {
        let output = binary()
            .arg("distcomp")
            .output()
            .expect("Failed to run binary");

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("INPUT") || stderr.contains("required"));
    }

    #[test]
    fn test_invalid_key_len_exit_code() {
        let output = binary()
            .args(["-k", "0", "timesummary"])
            .output()
            .expect("Failed to run binary");

        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid configuration"));
    }

    #[test]
    fn test_invalid_separator_exit_code() {
        let output = binary()
            .args(["--separator", "::", "timesummary"])
            .output()
            .expect("Failed to run binary");

        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("separator"));
    }
}
