use crate::weirs::WeirFeature;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub fn write_weirs_json(path: &Path, weirs: &[WeirFeature]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create JSON file: {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, weirs)
        .with_context(|| format!("Failed to serialize weirs to {:?}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {:?}", path))?;
    Ok(())
}

/// Read a weir array back, rejecting any feature with inconsistent shapes.
pub fn read_weirs_json(path: &Path) -> Result<Vec<WeirFeature>> {
    let file = File::open(path).with_context(|| format!("Failed to open JSON file: {:?}", path))?;
    let weirs: Vec<WeirFeature> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse weirs from {:?}", path))?;
    for weir in &weirs {
        weir.validate()?;
    }
    Ok(weirs)
}
