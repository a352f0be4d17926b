//! Collision counter
//!
//! Truncates every input line to a fixed-length prefix, deduplicates the
//! prefixes, runs each hash over the distinct prefixes and counts how many
//! of them land on an already-seen digest.

use crate::config::Config;
use crate::core::{dedup_prefixes, load_byte_lines, write_temp_lines, CollisionTally, DigestRecord};
use crate::error::Result;
use crate::hasher::HashFunction;
use crate::tools::{current_user, for_each_hash, now_timestamp};
use serde::Serialize;
use std::path::Path;

/// A digest shared by several distinct prefixes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestCount {
    pub digest: String,
    pub count: usize,
}

/// Collision statistics for one hash function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashCollisions {
    pub hash: String,
    pub collisions: usize,
    pub distinct_digests: usize,
    /// Most frequent colliding digests (only with `--top`)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top: Vec<DigestCount>,
}

/// Full collision counter report
#[derive(Debug, Clone, Serialize)]
pub struct CollisionReport {
    pub timestamp: String,
    pub user: String,
    pub input_file: String,
    pub key_len: usize,
    /// Number of distinct prefixes that were hashed
    pub lines: usize,
    pub results: Vec<HashCollisions>,
}

/// Hash the deduplicated prefix file with one hash and tally its digests
pub fn count_collisions(
    hash: &dyn HashFunction,
    prefix_file: &Path,
    config: &Config,
) -> Result<HashCollisions> {
    let mut tally = CollisionTally::new();
    for line in hash.hash_lines(prefix_file)? {
        let record = DigestRecord::parse(&line, config.separator)?;
        tally.add(&record.digest);
    }
    tracing::debug!(
        hash = hash.name(),
        records = tally.total(),
        distinct = tally.distinct(),
        "tally complete"
    );

    Ok(HashCollisions {
        hash: hash.name().to_string(),
        collisions: tally.collisions(),
        distinct_digests: tally.distinct(),
        top: tally
            .top_collisions(config.top_collisions)
            .into_iter()
            .map(|(digest, count)| DigestCount { digest, count })
            .collect(),
    })
}

/// Run the collision counter over `input` with every hash in `hashes`
pub fn run(
    config: &Config,
    input: &Path,
    hashes: &[Box<dyn HashFunction>],
    progress: impl Fn(&str) + Send + Sync,
) -> Result<CollisionReport> {
    let lines = load_byte_lines(input)?;
    let prefixes = dedup_prefixes(&lines, config.key_len);
    progress(&format!(
        "Deduplicated {} lines to {} prefixes of {} bytes",
        lines.len(),
        prefixes.len(),
        config.key_len
    ));

    let prefix_file = write_temp_lines(&prefixes)?;

    let results = for_each_hash(hashes, config.num_threads, |hash| {
        progress(&format!("Running hash_{}", hash.name()));
        let result = count_collisions(hash, prefix_file.path(), config)?;
        tracing::debug!(
            hash = hash.name(),
            collisions = result.collisions,
            "collision count finished"
        );
        Ok(result)
    })?;

    Ok(CollisionReport {
        timestamp: now_timestamp(),
        user: current_user(),
        input_file: input.display().to_string(),
        key_len: config.key_len,
        lines: prefixes.len(),
        results,
    })
}
