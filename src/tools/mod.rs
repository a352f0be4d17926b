//! The four benchmark tools: collision counter, timing harness, timing
//! summarizer and consistency validator

pub mod distcomp;
pub mod timecomp;
pub mod timesummary;
pub mod validate;

pub use distcomp::CollisionReport;
pub use timesummary::ThroughputReport;
pub use validate::ValidationReport;

use crate::error::{BenchError, Result};
use crate::hasher::HashFunction;
use rayon::prelude::*;

/// Run `f` once per hash on a pool of `num_threads` workers, keeping results
/// in hash order. The first error aborts the whole run.
pub(crate) fn for_each_hash<T, F>(
    hashes: &[Box<dyn HashFunction>],
    num_threads: usize,
    f: F,
) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&dyn HashFunction) -> Result<T> + Send + Sync,
{
    if num_threads <= 1 {
        return hashes.iter().map(|h| f(&**h)).collect();
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads.min(hashes.len().max(1)))
        .build()
        .map_err(|e| BenchError::Other(format!("Failed to create thread pool: {}", e)))?;

    pool.install(|| hashes.par_iter().map(|h| f(&**h)).collect())
}

/// Invoking user for report headers, empty when `USER` is unset
pub fn current_user() -> String {
    std::env::var("USER").unwrap_or_default()
}

/// Current local time for report headers
pub fn now_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S %z")
        .to_string()
}
