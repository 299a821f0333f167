use crate::error::AuditResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writes `value` as JSON indented by four spaces.
pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> AuditResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut ser)?;
    writer.flush()?;

    info!("💾 Wrote {}", path.display());
    Ok(())
}

pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> AuditResult<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
