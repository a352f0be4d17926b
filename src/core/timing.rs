//! Timing samples and throughput aggregation

use crate::error::{BenchError, Result};
use std::io::BufRead;

/// Bytes per mebibyte
pub const MIB: f64 = 1024.0 * 1024.0;

/// One `(bytes, seconds)` sample from a timing log
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    pub bytes: f64,
    pub seconds: f64,
}

impl TimingSample {
    /// Parse a log line. Lines that do not start with an ASCII digit are not
    /// samples and yield `Ok(None)`; a digit-leading line must hold exactly
    /// two numbers.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        if !line.starts_with(|c: char| c.is_ascii_digit()) {
            return Ok(None);
        }

        let malformed = || BenchError::MalformedRecord {
            line: line.trim_end().to_string(),
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [bytes, seconds] = fields.as_slice() else {
            return Err(malformed());
        };
        let bytes: f64 = bytes.parse().map_err(|_| malformed())?;
        let seconds: f64 = seconds.parse().map_err(|_| malformed())?;
        if !bytes.is_finite() || !seconds.is_finite() {
            return Err(malformed());
        }

        Ok(Some(Self { bytes, seconds }))
    }
}

/// Summed samples for one hash function
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimingTotals {
    pub bytes: f64,
    pub seconds: f64,
    pub samples: usize,
}

impl TimingTotals {
    pub fn add(&mut self, sample: TimingSample) {
        self.bytes += sample.bytes;
        self.seconds += sample.seconds;
        self.samples += 1;
    }

    /// Average throughput in MiB/s
    ///
    /// Fails with `NoTimingSamples` when no time was recorded, instead of
    /// producing an infinite or NaN rate.
    pub fn throughput_mib_per_sec(&self, hash_name: &str) -> Result<f64> {
        if self.samples == 0 || self.seconds <= 0.0 {
            return Err(BenchError::NoTimingSamples {
                hash_name: hash_name.to_string(),
            });
        }
        Ok((self.bytes / self.seconds) / MIB)
    }
}

/// Accumulate every sample line of a timing log
pub fn summarize_log(reader: impl BufRead) -> Result<TimingTotals> {
    let mut totals = TimingTotals::default();
    for line in reader.lines() {
        if let Some(sample) = TimingSample::parse(&line?)? {
            totals.add(sample);
        }
    }
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LOG: &str = "\
# hashbench.c Mon Jan  1 00:00:00 2024
# hashfn: hash_rk
# input file: words.txt
#
# bytes     execution time (seconds)
2097152 0.500
2097152 1.500
";

    #[test]
    fn test_parse_sample_line() {
        let sample = TimingSample::parse("1048576 0.250").unwrap().unwrap();
        assert_eq!(sample.bytes, 1_048_576.0);
        assert_eq!(sample.seconds, 0.25);
    }

    #[test]
    fn test_parse_skips_non_samples() {
        assert_eq!(TimingSample::parse("# bytes time").unwrap(), None);
        assert_eq!(TimingSample::parse("").unwrap(), None);
        assert_eq!(TimingSample::parse(" 12 3").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert!(matches!(
            TimingSample::parse("12"),
            Err(BenchError::MalformedRecord { .. })
        ));
        assert!(TimingSample::parse("12 3 4").is_err());
        assert!(TimingSample::parse("12 abc").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite_values() {
        for line in ["1 nan", "1 inf", "1 -inf", "1e400 0.5"] {
            assert!(
                matches!(
                    TimingSample::parse(line),
                    Err(BenchError::MalformedRecord { .. })
                ),
                "accepted '{}'",
                line
            );
        }
    }

    #[test]
    fn test_summarize_log() {
        let totals = summarize_log(LOG.as_bytes()).unwrap();
        assert_eq!(totals.samples, 2);
        assert_eq!(totals.bytes, 4_194_304.0);
        assert_eq!(totals.seconds, 2.0);
        assert_eq!(totals.throughput_mib_per_sec("rk").unwrap(), 2.0);
    }

    #[test]
    fn test_no_samples_is_an_error() {
        let totals = summarize_log("# header only\n".as_bytes()).unwrap();
        let err = totals.throughput_mib_per_sec("rk").unwrap_err();
        assert!(matches!(err, BenchError::NoTimingSamples { hash_name } if hash_name == "rk"));
    }

    #[test]
    fn test_zero_elapsed_time_is_an_error() {
        let totals = summarize_log("100 0\n".as_bytes()).unwrap();
        assert!(totals.throughput_mib_per_sec("null").is_err());
    }

    proptest! {
        #[test]
        fn prop_throughput_ignores_noise(
            samples in prop::collection::vec((1u32..1_000_000, 1u32..10_000), 1..20),
            noise in prop::collection::vec("# [a-z ]{0,12}", 0..5),
        ) {
            let mut log = String::new();
            for (i, (bytes, millis)) in samples.iter().enumerate() {
                if let Some(n) = noise.get(i) {
                    log.push_str(n);
                    log.push('\n');
                }
                log.push_str(&format!("{} {}\n", bytes, *millis as f64 / 1000.0));
            }

            let totals = summarize_log(log.as_bytes()).unwrap();
            let bytes: f64 = samples.iter().map(|(b, _)| *b as f64).sum();
            let seconds: f64 = samples.iter().map(|(_, m)| *m as f64 / 1000.0).sum();
            let expected = bytes / seconds / MIB;
            let actual = totals.throughput_mib_per_sec("p").unwrap();

            prop_assert_eq!(totals.samples, samples.len());
            prop_assert!((actual - expected).abs() <= expected * 1e-9);
        }
    }
}
