//! Core data structures: digest records, tallies, timing samples and the
//! suffix consistency check

pub mod input;
pub mod prefix;
pub mod record;
pub mod suffix;
pub mod tally;
pub mod timing;

pub use input::{load_byte_lines, load_text_lines, write_temp_lines};
pub use prefix::dedup_prefixes;
pub use record::{DigestRecord, Separator};
pub use suffix::{sort_by_suffix, Mismatch, SuffixChecker};
pub use tally::CollisionTally;
pub use timing::{summarize_log, TimingTotals};
