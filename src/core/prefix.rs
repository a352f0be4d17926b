//! Fixed-length prefix deduplication for the collision counter

use std::collections::BTreeSet;

/// First `len` bytes of a line (the whole line when shorter)
#[inline]
pub fn truncate_prefix(line: &[u8], len: usize) -> &[u8] {
    &line[..line.len().min(len)]
}

/// Truncate every line to `len` bytes and return the distinct prefixes in
/// byte order
pub fn dedup_prefixes<I, L>(lines: I, len: usize) -> Vec<Vec<u8>>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let set: BTreeSet<Vec<u8>> = lines
        .into_iter()
        .map(|l| truncate_prefix(l.as_ref(), len).to_vec())
        .collect();
    set.into_iter().collect()
}
