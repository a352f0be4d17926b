//! Suffix ordering and the adjacent-key consistency check

use crate::core::DigestRecord;
use serde::Serialize;
use std::fmt;

/// Sort lines by their reversed character sequence, so lines sharing a
/// suffix end up adjacent
pub fn sort_by_suffix(lines: Vec<String>) -> Vec<String> {
    let mut reversed: Vec<String> = lines
        .into_iter()
        .map(|l| l.chars().rev().collect())
        .collect();
    reversed.sort();
    reversed
        .into_iter()
        .map(|l| l.chars().rev().collect())
        .collect()
}

/// Last `len` characters of `word`, or the whole word when not longer
pub fn truncated_key(word: &str, len: usize) -> &str {
    let count = word.chars().count();
    if count <= len {
        return word;
    }
    match word.char_indices().nth(count - len) {
        Some((idx, _)) => &word[idx..],
        None => word,
    }
}

/// Two adjacent records share a truncated key but hash differently
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Raw output line of the second record
    pub line: String,
    /// Shared truncated key
    pub key: String,
    pub previous_digest: String,
    pub digest: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hash mismatch: {} {} - {} {}",
            self.line, self.key, self.previous_digest, self.digest
        )
    }
}

/// Carries the previous truncated key and digest across consecutive records
#[derive(Debug)]
pub struct SuffixChecker {
    key_len: usize,
    previous: Option<(String, String)>,
}

impl SuffixChecker {
    pub fn new(key_len: usize) -> Self {
        Self {
            key_len,
            previous: None,
        }
    }

    /// Feed the next record; returns a mismatch when its key matches the
    /// previous record's key but the digest does not
    pub fn check(&mut self, line: &str, record: &DigestRecord) -> Option<Mismatch> {
        let key = truncated_key(&record.word, self.key_len);

        let mismatch = match &self.previous {
            Some((prev_key, prev_digest)) if prev_key == key && *prev_digest != record.digest => {
                Some(Mismatch {
                    line: line.to_string(),
                    key: key.to_string(),
                    previous_digest: prev_digest.clone(),
                    digest: record.digest.clone(),
                })
            }
            _ => None,
        };

        self.previous = Some((key.to_string(), record.digest.clone()));
        mismatch
    }
}
