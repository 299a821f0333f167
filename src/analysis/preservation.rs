use super::types::{OverallEntry, ScriptEntry, ScriptStats};
use super::{analyzable_raw, sample_records};
use crate::config::DEFAULT_SEED;
use crate::loader::Record;
use crate::script::{scripts_in_text, Script};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Running counts for one pass over the sample.
#[derive(Debug, Default)]
struct PreservationTally {
    scripts: BTreeMap<Script, ScriptEntry>,
    non_latin_rows: usize,
    preserved_rows: usize,
    skipped: usize,
}

impl PreservationTally {
    fn observe(&mut self, record: &Record) {
        let Some(raw) = analyzable_raw(record) else {
            self.skipped += 1;
            return;
        };

        let raw_scripts = scripts_in_text(raw);
        let clean_scripts = scripts_in_text(&record.clean);

        if !raw_scripts.is_empty() {
            self.non_latin_rows += 1;
            if !clean_scripts.is_empty() {
                self.preserved_rows += 1;
            }
        }

        for script in raw_scripts {
            let kept = clean_scripts.contains(&script);
            self.scripts.entry(script).or_default().record(kept);
        }
    }

    fn finish(self) -> ScriptStats {
        debug!(
            "   Script preservation: {} non-Latin rows, {} preserved, {} skipped.",
            self.non_latin_rows, self.preserved_rows, self.skipped
        );
        ScriptStats {
            scripts: self.scripts,
            overall: OverallEntry::new(self.non_latin_rows, self.preserved_rows),
        }
    }
}

pub fn analyze_script_preservation(records: &[Record], sample_size: usize) -> ScriptStats {
    script_preservation_with_seed(records, sample_size, DEFAULT_SEED)
}

pub fn script_preservation_with_seed(
    records: &[Record],
    sample_size: usize,
    seed: u64,
) -> ScriptStats {
    info!("🔤 Analyzing script preservation...");

    let sample = sample_records(records, sample_size, seed);
    let mut tally = PreservationTally::default();
    for record in sample {
        tally.observe(record);
    }
    tally.finish()
}
