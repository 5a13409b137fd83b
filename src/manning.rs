use crate::grid::{GridSample, GridSpec};
use anyhow::Result;
use ndarray::{Array2, Zip};
use tracing::debug;

// Roughness gradient: rises with x, falls with y
const BASE_ROUGHNESS: f64 = 0.07;
const X_SCALE: f64 = 7000.0;
const Y_SCALE: f64 = 8000.0;

/// Manning roughness coefficients over a regular grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ManningSample {
    pub xi: Array2<f64>,
    pub yi: Array2<f64>,
    pub manning: Array2<f64>,
}

impl GridSample for ManningSample {
    fn xi(&self) -> &Array2<f64> {
        &self.xi
    }

    fn yi(&self) -> &Array2<f64> {
        &self.yi
    }

    fn values(&self) -> &Array2<f64> {
        &self.manning
    }

    fn value_name(&self) -> &'static str {
        "manning"
    }

    fn units(&self) -> &'static str {
        "s m-1/3"
    }
}

pub fn manning_data() -> ManningSample {
    let (xi, yi) = GridSpec::default().coordinates();
    let manning = roughness(&xi, &yi);
    ManningSample { xi, yi, manning }
}

pub fn manning_from(spec: &GridSpec) -> Result<ManningSample> {
    spec.validate()?;
    let (xi, yi) = spec.coordinates();
    let manning = roughness(&xi, &yi);
    debug!(shape = ?manning.dim(), "built manning sample");
    let sample = ManningSample { xi, yi, manning };
    sample.check_shape()?;
    Ok(sample)
}

fn roughness(xi: &Array2<f64>, yi: &Array2<f64>) -> Array2<f64> {
    Zip::from(xi)
        .and(yi)
        .map_collect(|&x, &y| BASE_ROUGHNESS + x / X_SCALE - y / Y_SCALE)
}
