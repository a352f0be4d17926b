//! Digest records printed by external hash executables

use crate::error::{BenchError, Result};
use std::str::FromStr;

/// Field separator between the digest and the echoed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// One whitespace character after the digest; leading whitespace before
    /// the digest is skipped and the word is kept as printed
    #[default]
    Whitespace,
    /// A single literal character
    Char(char),
}

impl FromStr for Separator {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("whitespace") || s.eq_ignore_ascii_case("ws") {
            return Ok(Separator::Whitespace);
        }
        if s == "\\t" {
            return Ok(Separator::Char('\t'));
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Separator::Char(c)),
            _ => Err(BenchError::InvalidConfig(format!(
                "separator must be 'whitespace' or a single character, got '{}'",
                s
            ))),
        }
    }
}

/// One `(digest, word)` pair printed by a hash executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestRecord {
    /// Digest as printed (hex for the bundled hashes, but treated opaquely)
    pub digest: String,
    /// The hashed line as echoed back by the executable
    pub word: String,
}

impl DigestRecord {
    /// Parse one output line into at most two fields
    ///
    /// A line without the separator is malformed. The word may be empty
    /// (an empty input line hashes to `"<digest> "`).
    pub fn parse(line: &str, separator: Separator) -> Result<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let split = match separator {
            Separator::Whitespace => {
                let trimmed = line.trim_start();
                trimmed
                    .char_indices()
                    .find(|(_, c)| c.is_whitespace())
                    .map(|(idx, c)| (&trimmed[..idx], &trimmed[idx + c.len_utf8()..]))
            }
            Separator::Char(c) => line.split_once(c),
        };

        match split {
            Some((digest, word)) if !digest.is_empty() => Ok(Self {
                digest: digest.to_string(),
                word: word.to_string(),
            }),
            _ => Err(BenchError::MalformedRecord {
                line: line.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whitespace_record() {
        let rec = DigestRecord::parse("1f3a apple pie\n", Separator::Whitespace).unwrap();
        assert_eq!(rec.digest, "1f3a");
        assert_eq!(rec.word, "apple pie");
    }

    #[test]
    fn test_parse_skips_leading_whitespace() {
        let rec = DigestRecord::parse("  ff word", Separator::Whitespace).unwrap();
        assert_eq!(rec.digest, "ff");
        assert_eq!(rec.word, "word");
    }

    #[test]
    fn test_parse_keeps_word_whitespace() {
        let rec = DigestRecord::parse("ff   ab ", Separator::Whitespace).unwrap();
        assert_eq!(rec.digest, "ff");
        assert_eq!(rec.word, "  ab ");

        let rec = DigestRecord::parse("ff\t\tword", Separator::Whitespace).unwrap();
        assert_eq!(rec.word, "\tword");
    }

    #[test]
    fn test_parse_empty_word() {
        let rec = DigestRecord::parse("0 ", Separator::Whitespace).unwrap();
        assert_eq!(rec.digest, "0");
        assert_eq!(rec.word, "");
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = DigestRecord::parse("deadbeef", Separator::Whitespace).unwrap_err();
        assert!(matches!(err, BenchError::MalformedRecord { line } if line == "deadbeef"));

        assert!(DigestRecord::parse("", Separator::Whitespace).is_err());
    }

    #[test]
    fn test_parse_char_separator() {
        let rec = DigestRecord::parse("abc:x:y", Separator::Char(':')).unwrap();
        assert_eq!(rec.digest, "abc");
        assert_eq!(rec.word, "x:y");

        assert!(DigestRecord::parse("abc x", Separator::Char(':')).is_err());
    }

    #[test]
    fn test_separator_from_str() {
        assert_eq!("whitespace".parse::<Separator>().unwrap(), Separator::Whitespace);
        assert_eq!(",".parse::<Separator>().unwrap(), Separator::Char(','));
        assert_eq!("\\t".parse::<Separator>().unwrap(), Separator::Char('\t'));
        assert!("::".parse::<Separator>().is_err());
        assert!("".parse::<Separator>().is_err());
    }
}
