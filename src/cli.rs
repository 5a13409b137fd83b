use crate::config::{Dataset, FixtureConfig, OutputFormat};
use crate::grid::GridSpec;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Write sample weir, elevation and Manning roughness datasets
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory the sample files are written to
    pub output_dir: PathBuf,

    /// Dataset to generate
    #[arg(short, long, value_enum, default_value_t = Dataset::All)]
    pub dataset: Dataset,

    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Grid points along x
    #[arg(long, default_value_t = 11)]
    pub nx: usize,

    /// Grid points along y
    #[arg(long, default_value_t = 11)]
    pub ny: usize,

    /// Shift applied to the y axis
    #[arg(long, default_value_t = 10.0)]
    pub y_offset: f64,
}

impl Args {
    pub fn into_config(self) -> Result<FixtureConfig> {
        let grid = GridSpec {
            nx: self.nx,
            ny: self.ny,
            y_offset: self.y_offset,
            ..GridSpec::default()
        };
        grid.validate().context("Invalid grid arguments")?;

        Ok(FixtureConfig {
            dataset: self.dataset,
            format: self.format,
            output_dir: self.output_dir,
            grid,
        })
    }
}

pub fn get_args() -> Result<FixtureConfig> {
    let config = Args::parse().into_config()?;
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", config.output_dir))?;
    Ok(config)
}
