use crate::script::Script;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

/// Per-script tally: rows whose raw text had the script, and how many kept it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub total: usize,
    pub preserved: usize,
    /// preserved / total, in [0, 1].
    pub rate: f64,
}

impl ScriptEntry {
    pub fn record(&mut self, preserved: bool) {
        self.total += 1;
        if preserved {
            self.preserved += 1;
        }
        self.rate = fraction(self.preserved, self.total);
    }

    pub fn percentage(&self) -> f64 {
        fraction(self.preserved, self.total) * 100.0
    }
}

/// Row-level tally over every row that had any non-ASCII script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallEntry {
    pub total: usize,
    pub preserved: usize,
    /// preserved / total as a percentage, in [0, 100].
    pub rate: f64,
}

impl OverallEntry {
    pub fn new(total: usize, preserved: usize) -> Self {
        Self {
            total,
            preserved,
            rate: fraction(preserved, total) * 100.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptStats {
    #[serde(flatten)]
    pub scripts: BTreeMap<Script, ScriptEntry>,
    pub overall: OverallEntry,
}

impl ScriptStats {
    pub fn get(&self, script: &Script) -> Option<&ScriptEntry> {
        self.scripts.get(script)
    }

    /// Entries by descending preservation rate, ties broken by label.
    pub fn ranked(&self) -> Vec<(&Script, &ScriptEntry)> {
        let mut entries: Vec<_> = self.scripts.iter().collect();
        entries.sort_by(|a, b| b.1.rate.total_cmp(&a.1.rate).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Pattern {
    PublishingTermsRemoved,
    BusinessEntitiesRemoved,
    NonLatinRowsEmpty,
    NameStructureChanged,
}

impl Pattern {
    pub fn description(&self) -> &'static str {
        match self {
            Self::PublishingTermsRemoved => "Publishing terms removed",
            Self::BusinessEntitiesRemoved => "Business entities removed",
            Self::NonLatinRowsEmpty => "Non-Latin rows normalized to empty",
            Self::NameStructureChanged => "Name structure changed",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Self::PublishingTermsRemoved => "Publishing terms",
            Self::BusinessEntitiesRemoved => "Business entities",
            Self::NonLatinRowsEmpty => "Non-Latin to empty",
            Self::NameStructureChanged => "Name structure",
        }
    }
}

/// Independent counters, one per `Pattern`, over a sample of `total_analyzed` rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternStats {
    pub publishing_terms_removed: usize,
    pub business_entities_removed: usize,
    pub non_latin_rows_empty: usize,
    pub name_structure_changed: usize,
    pub total_analyzed: usize,
}

impl PatternStats {
    pub fn count(&self, pattern: Pattern) -> usize {
        match pattern {
            Pattern::PublishingTermsRemoved => self.publishing_terms_removed,
            Pattern::BusinessEntitiesRemoved => self.business_entities_removed,
            Pattern::NonLatinRowsEmpty => self.non_latin_rows_empty,
            Pattern::NameStructureChanged => self.name_structure_changed,
        }
    }

    pub fn increment(&mut self, pattern: Pattern) {
        let slot = match pattern {
            Pattern::PublishingTermsRemoved => &mut self.publishing_terms_removed,
            Pattern::BusinessEntitiesRemoved => &mut self.business_entities_removed,
            Pattern::NonLatinRowsEmpty => &mut self.non_latin_rows_empty,
            Pattern::NameStructureChanged => &mut self.name_structure_changed,
        };
        *slot += 1;
    }

    /// Share of analyzed rows showing `pattern`, in percent; 0 for an empty sample.
    pub fn percentage(&self, pattern: Pattern) -> f64 {
        fraction(self.count(pattern), self.total_analyzed) * 100.0
    }
}

fn fraction(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
