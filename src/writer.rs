use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::SpeciesRecord;

/// Serialize the full record set as a pretty-printed JSON array,
/// replacing any previous file outright.
pub fn write_database(path: &Path, records: &[SpeciesRecord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, records)
        .context("Failed to serialize records")?;
    writer.flush().context("Failed to flush output file")?;

    Ok(())
}
