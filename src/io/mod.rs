pub mod csv;
pub mod json;
pub mod netcdf;

use crate::config::{Dataset, FixtureConfig, OutputFormat};
use crate::grid::GridSample;
use crate::weirs::sample_weirs;
use crate::{elevation_from, manning_from};
use anyhow::{Result, bail};
use chrono::Utc;
use std::path::Path;

/// Build one dataset from `config` and write it to `path` in `format`.
///
/// Fails on `All` selections and on pairs the format cannot encode
/// (JSON grids, NetCDF weirs).
pub fn write_dataset(
    config: &FixtureConfig,
    dataset: Dataset,
    format: OutputFormat,
    path: &Path,
) -> Result<()> {
    if !format.supports(dataset) || format == OutputFormat::All {
        bail!("{} cannot be written as {:?}", dataset.name(), format);
    }
    match dataset {
        Dataset::Weirs => {
            let weirs = sample_weirs();
            match format {
                OutputFormat::Csv => csv::write_weirs_csv(path, &weirs).map(|_| ()),
                OutputFormat::Json => json::write_weirs_json(path, &weirs),
                OutputFormat::NetCdf | OutputFormat::All => {
                    bail!("weirs cannot be written as {:?}", format)
                }
            }
        }
        Dataset::Elevation => write_grid(&elevation_from(&config.grid)?, format, path),
        Dataset::Manning => write_grid(&manning_from(&config.grid)?, format, path),
        Dataset::All => bail!("dataset selection must be expanded before writing"),
    }
}

fn write_grid<G: GridSample>(sample: &G, format: OutputFormat, path: &Path) -> Result<()> {
    match format {
        OutputFormat::Csv => csv::write_grid_csv(path, sample).map(|_| ()),
        OutputFormat::NetCdf => netcdf::write_grid_netcdf(path, sample, &Utc::now().naive_utc()),
        OutputFormat::Json | OutputFormat::All => {
            bail!("{} grid cannot be written as {:?}", sample.value_name(), format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSpec;

    fn config(dir: &Path) -> FixtureConfig {
        FixtureConfig {
            dataset: Dataset::All,
            format: OutputFormat::All,
            output_dir: dir.to_path_buf(),
            grid: GridSpec::default(),
        }
    }

    #[test]
    fn weirs_as_json_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let path = cfg.output_path(Dataset::Weirs, OutputFormat::Json);
        write_dataset(&cfg, Dataset::Weirs, OutputFormat::Json, &path).unwrap();
        assert_eq!(json::read_weirs_json(&path).unwrap(), sample_weirs());
    }

    #[test]
    fn grid_as_csv_has_one_row_per_node() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let path = cfg.output_path(Dataset::Manning, OutputFormat::Csv);
        write_dataset(&cfg, Dataset::Manning, OutputFormat::Csv, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 122);
        assert!(text.starts_with("row,col,x,y,manning"));
    }

    #[test]
    fn unsupported_pairs_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        for (dataset, format) in [
            (Dataset::Weirs, OutputFormat::NetCdf),
            (Dataset::Elevation, OutputFormat::Json),
            (Dataset::Manning, OutputFormat::All),
            (Dataset::All, OutputFormat::Csv),
        ] {
            let path = cfg.output_path(dataset, format);
            assert!(write_dataset(&cfg, dataset, format, &path).is_err());
            assert!(!path.exists(), "{:?} was created", path);
        }
    }
}
