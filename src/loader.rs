use crate::config::DatasetConfig;
use crate::error::{AuditError, AuditResult};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Cell values read as missing, on top of the empty cell.
pub const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One (raw, clean) pair. `raw` is `None` when the cell was missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub raw: Option<String>,
    pub clean: String,
}

impl Record {
    pub fn new(raw: impl Into<String>, clean: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            clean: clean.into(),
        }
    }
}

pub fn load_records<P: AsRef<Path>>(path: P, cfg: &DatasetConfig) -> AuditResult<Vec<Record>> {
    let path = path.as_ref();
    info!("📂 Loading dataset from {}", path.display());

    let file = File::open(path)?;
    read_records(file, cfg).map_err(|e| match e {
        AuditError::MissingColumn { column, .. } => AuditError::MissingColumn {
            column,
            path: path.display().to_string(),
        },
        other => other,
    })
}

pub fn read_records<R: Read>(reader: R, cfg: &DatasetConfig) -> AuditResult<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let raw_idx = column_index(&headers, &cfg.raw_column, "raw")?;
    let clean_idx = column_index(&headers, &cfg.clean_column, "clean")?;

    let mut records = Vec::new();
    let mut missing_raw = 0usize;

    for result in rdr.records() {
        let rec = result?;
        let raw = cell(&rec, raw_idx);
        if raw.is_none() {
            missing_raw += 1;
        }
        records.push(Record {
            raw,
            clean: cell(&rec, clean_idx).unwrap_or_default(),
        });
    }

    info!("Dataset shape: ({}, {})", records.len(), headers.len());
    if missing_raw > 0 {
        debug!("   {} rows have no raw value.", missing_raw);
    }

    Ok(records)
}

fn column_index(headers: &StringRecord, wanted: &str, fallback: &str) -> AuditResult<usize> {
    headers
        .iter()
        .position(|h| h == wanted)
        .or_else(|| headers.iter().position(|h| h == fallback))
        .ok_or_else(|| AuditError::MissingColumn {
            column: wanted.to_string(),
            path: "<input>".to_string(),
        })
}

fn cell(rec: &StringRecord, idx: usize) -> Option<String> {
    rec.get(idx)
        .filter(|v| !v.is_empty() && !MISSING_MARKERS.contains(v))
        .map(str::to_string)
}
