use crate::grid::GridSample;
use crate::weirs::WeirFeature;
use anyhow::{Context, Result};
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::path::Path;

// One crest vertex of a weir
#[derive(Debug, Serialize)]
struct WeirVertexRecord<'a> {
    weir: &'a str,
    vertex: usize,
    x: f64,
    y: f64,
    z: f64,
    par1: f64,
}

fn create_csv_writer(path: &Path) -> Result<Writer<File>> {
    WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create CSV file: {:?}", path))
}

/// One row per crest vertex, uniform elevations repeated on every row.
pub fn write_weirs_csv(path: &Path, weirs: &[WeirFeature]) -> Result<usize> {
    for weir in weirs {
        weir.validate()?;
    }
    let mut wtr = create_csv_writer(path)?;
    wtr.write_record(["weir", "vertex", "x", "y", "z", "par1"])?;

    let mut rows = 0;
    for (index, weir) in weirs.iter().enumerate() {
        let label = weir.label(index);
        let levels = weir.crest_levels();
        for (vertex, ((&x, &y), &z)) in weir.x.iter().zip(&weir.y).zip(&levels).enumerate() {
            wtr.serialize(WeirVertexRecord {
                weir: &label,
                vertex,
                x,
                y,
                z,
                par1: weir.par1,
            })
            .with_context(|| format!("Failed to write vertex {} of {}", vertex, label))?;
            rows += 1;
        }
    }

    wtr.flush().context("Failed to flush CSV writer")?;
    Ok(rows)
}

/// One row per grid node, row-major, headed `row,col,x,y,<value name>`.
pub fn write_grid_csv<G: GridSample>(path: &Path, sample: &G) -> Result<usize> {
    sample.check_shape()?;
    let mut wtr = create_csv_writer(path)?;
    wtr.write_record(["row", "col", "x", "y", sample.value_name()])?;

    let (xi, yi) = (sample.xi(), sample.yi());
    for ((r, c), &value) in sample.values().indexed_iter() {
        wtr.serialize((r, c, xi[[r, c]], yi[[r, c]], value))?;
    }

    wtr.flush().context("Failed to flush CSV writer")?;
    Ok(sample.values().len())
}
