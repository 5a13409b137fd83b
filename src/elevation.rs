use crate::grid::{GridSample, GridSpec, normalize_to};
use anyhow::Result;
use ndarray::{Array2, Zip};
use std::f64::consts::PI;
use tracing::debug;

/// Synthetic bed levels over a regular grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationSample {
    pub xi: Array2<f64>,
    pub yi: Array2<f64>,
    pub elevation: Array2<f64>,
}

impl GridSample for ElevationSample {
    fn xi(&self) -> &Array2<f64> {
        &self.xi
    }

    fn yi(&self) -> &Array2<f64> {
        &self.yi
    }

    fn values(&self) -> &Array2<f64> {
        &self.elevation
    }

    fn value_name(&self) -> &'static str {
        "elevation"
    }

    fn units(&self) -> &'static str {
        "m"
    }
}

/// Elevation sample on the default 11x11 grid.
pub fn elevation_data() -> ElevationSample {
    let (xi, yi) = GridSpec::default().coordinates();
    let elevation = elevation_surface(&xi, &yi);
    ElevationSample { xi, yi, elevation }
}

pub fn elevation_from(spec: &GridSpec) -> Result<ElevationSample> {
    spec.validate()?;
    let (xi, yi) = spec.coordinates();
    let elevation = elevation_surface(&xi, &yi);
    debug!(shape = ?elevation.dim(), "built elevation sample");
    let sample = ElevationSample { xi, yi, elevation };
    sample.check_shape()?;
    Ok(sample)
}

// Both axes are scaled onto [0, 2pi] before the trig terms apply
fn elevation_surface(xi: &Array2<f64>, yi: &Array2<f64>) -> Array2<f64> {
    let x_var = normalize_to(xi, 2.0 * PI);
    let y_var = normalize_to(yi, 2.0 * PI);
    Zip::from(&x_var).and(&y_var).map_collect(|&x, &y| {
        -3.0 * x.cos().powi(2) + 5.0 * y.atan().powi(2) + 2.0 * (x * y).sin()
    })
}
