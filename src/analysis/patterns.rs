use super::types::{Pattern, PatternStats};
use super::{analyzable_raw, sample_records};
use crate::config::DEFAULT_SEED;
use crate::error::AuditResult;
use crate::loader::Record;
use crate::script::has_non_ascii_script;
use regex::{Regex, RegexBuilder};
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

const PUBLISHING_TERMS: &str = r"PUBLISHING|COPYRIGHT|RIGHTS|ADMIN|STUDIO|MUSIC|ENTERTAINMENT";
const BUSINESS_ENTITIES: &str =
    r"LIMITED|LTD|LLC|INC|CORP|GMBH|PTY|S\.A\.|N\.V\.|CO\.|ASSOCIATES";

/// Heuristic detectors for the rewrites a normalizer commonly applies.
pub struct PatternDetector {
    publishing: Regex,
    business: Regex,
}

impl PatternDetector {
    pub fn new() -> AuditResult<Self> {
        Ok(Self {
            publishing: case_insensitive(PUBLISHING_TERMS)?,
            business: case_insensitive(BUSINESS_ENTITIES)?,
        })
    }

    pub fn detects(&self, pattern: Pattern, raw: &str, clean: &str) -> bool {
        match pattern {
            Pattern::PublishingTermsRemoved => removed(&self.publishing, raw, clean),
            Pattern::BusinessEntitiesRemoved => removed(&self.business, raw, clean),
            Pattern::NonLatinRowsEmpty => clean.is_empty() && has_non_ascii_script(raw),
            Pattern::NameStructureChanged => is_name_inversion(raw, clean),
        }
    }
}

fn case_insensitive(pattern: &str) -> AuditResult<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

fn removed(re: &Regex, raw: &str, clean: &str) -> bool {
    re.is_match(raw) && !re.is_match(clean)
}

/// "Last, First" rewritten to exactly "First Last".
pub fn is_name_inversion(raw: &str, clean: &str) -> bool {
    if !raw.contains(',') || clean.contains(',') {
        return false;
    }

    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [last, first] => clean == format!("{} {}", first, last),
        _ => false,
    }
}

pub fn analyze_normalization_patterns(
    records: &[Record],
    sample_size: usize,
) -> AuditResult<PatternStats> {
    normalization_patterns_with_seed(records, sample_size, DEFAULT_SEED)
}

pub fn normalization_patterns_with_seed(
    records: &[Record],
    sample_size: usize,
    seed: u64,
) -> AuditResult<PatternStats> {
    info!("🧩 Analyzing normalization patterns...");

    let detector = PatternDetector::new()?;
    let sample = sample_records(records, sample_size, seed);

    let mut stats = PatternStats {
        total_analyzed: sample.len(),
        ..Default::default()
    };
    if sample.is_empty() {
        warn!("⚠️  No rows to analyze.");
    }

    let mut skipped = 0;
    for record in sample {
        let Some(raw) = analyzable_raw(record) else {
            skipped += 1;
            continue;
        };
        for pattern in Pattern::iter() {
            if detector.detects(pattern, raw, &record.clean) {
                stats.increment(pattern);
            }
        }
    }

    debug!(
        "   Pattern analysis: {} rows sampled, {} skipped.",
        stats.total_analyzed, skipped
    );
    Ok(stats)
}
