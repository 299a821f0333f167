pub mod patterns;
pub mod preservation;
pub mod types;

pub use patterns::{
    analyze_normalization_patterns, normalization_patterns_with_seed, PatternDetector,
};
pub use preservation::{analyze_script_preservation, script_preservation_with_seed};
pub use types::{OverallEntry, Pattern, PatternStats, ScriptEntry, ScriptStats};

use crate::loader::Record;

/// Draws at most `sample_size` records. Small inputs are used whole; larger ones are
/// shuffled with a fixed-seed RNG and truncated. Input order is kept either way.
pub fn sample_records(records: &[Record], sample_size: usize, seed: u64) -> Vec<&Record> {
    if records.len() <= sample_size {
        return records.iter().collect();
    }

    let mut rng = fastrand::Rng::with_seed(seed);
    let mut indices: Vec<usize> = (0..records.len()).collect();
    rng.shuffle(&mut indices);
    indices.truncate(sample_size);
    indices.sort_unstable();

    indices.into_iter().map(|i| &records[i]).collect()
}

/// The raw text of a row worth analyzing: present and not blank.
pub fn analyzable_raw(record: &Record) -> Option<&str> {
    record
        .raw
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
}
