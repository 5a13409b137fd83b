use crate::grid::GridSpec;
use clap::ValueEnum;
use std::path::PathBuf;

// Which sample datasets to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    Weirs,
    Elevation,
    Manning,
    All,
}

impl Dataset {
    pub fn expand(self) -> Vec<Dataset> {
        match self {
            Dataset::All => vec![Dataset::Weirs, Dataset::Elevation, Dataset::Manning],
            single => vec![single],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dataset::Weirs => "weirs",
            Dataset::Elevation => "elevation",
            Dataset::Manning => "manning",
            Dataset::All => "all",
        }
    }

    pub fn is_grid(self) -> bool {
        matches!(self, Dataset::Elevation | Dataset::Manning)
    }
}

// Output format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
    #[value(name = "netcdf")]
    NetCdf,
    All,
}

impl OutputFormat {
    pub fn expand(self) -> Vec<OutputFormat> {
        match self {
            OutputFormat::All => vec![OutputFormat::Csv, OutputFormat::Json, OutputFormat::NetCdf],
            single => vec![single],
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::NetCdf => "nc",
            OutputFormat::All => "",
        }
    }

    /// Weirs are vector features, grids are rasters; each only has some encodings.
    pub fn supports(self, dataset: Dataset) -> bool {
        match self {
            OutputFormat::Csv | OutputFormat::All => true,
            OutputFormat::Json => dataset == Dataset::Weirs,
            OutputFormat::NetCdf => dataset.is_grid(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FixtureConfig {
    pub dataset: Dataset,
    pub format: OutputFormat,
    pub output_dir: PathBuf,
    pub grid: GridSpec,
}

impl FixtureConfig {
    /// Every (dataset, format) pair to write, in a stable order.
    pub fn jobs(&self) -> Vec<(Dataset, OutputFormat)> {
        let formats = self.format.expand();
        self.dataset
            .expand()
            .into_iter()
            .flat_map(|d| formats.iter().map(move |&f| (d, f)))
            .collect()
    }

    pub fn output_path(&self, dataset: Dataset, format: OutputFormat) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", dataset.name(), format.extension()))
    }
}
