//! Sample hydraulic datasets for model tests.
//!
//! ```text
//! hydro_fixtures
//! ├── grid       linspace / meshgrid helpers and the GridSample trait
//! ├── weirs      weir crest polylines
//! ├── elevation  trigonometric bed-level grid
//! ├── manning    linear Manning roughness grid
//! ├── config     dataset / output format selection
//! ├── cli        command-line arguments
//! └── io         CSV, JSON and NetCDF export
//! ```

pub mod cli;
pub mod config;
pub mod elevation;
pub mod grid;
pub mod io;
pub mod manning;
pub mod weirs;

pub use elevation::{ElevationSample, elevation_data, elevation_from};
pub use grid::{GridSample, GridSpec};
pub use manning::{ManningSample, manning_data, manning_from};
pub use weirs::{Elevation, WeirFeature, sample_weirs};
