use anyhow::{Result, ensure};
use ndarray::{Array1, Array2};

/// Evenly spaced values over `[start, stop]`, both endpoints included.
pub fn linspace(start: f64, stop: f64, num: usize) -> Array1<f64> {
    match num {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let mut values = Array1::linspace(start, stop, num);
            // last value is exactly `stop`
            values[num - 1] = stop;
            values
        }
    }
}

/// Coordinate matrices from coordinate vectors, "xy" indexing.
///
/// Both outputs have shape `(y.len(), x.len())`: `x` repeats down the rows and
/// `y` repeats across the columns.
pub fn meshgrid(x: &Array1<f64>, y: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let shape = (y.len(), x.len());
    let xi = Array2::from_shape_fn(shape, |(_, c)| x[c]);
    let yi = Array2::from_shape_fn(shape, |(r, _)| y[r]);
    (xi, yi)
}

/// Linearly rescale a grid from its own `[min, max]` onto `[0, span]`.
pub fn normalize_to(grid: &Array2<f64>, span: f64) -> Array2<f64> {
    let min = grid.fold(f64::INFINITY, |acc, &v| acc.min(v));
    let max = grid.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    let range = max - min;
    if !(range > 0.0) {
        return Array2::zeros(grid.raw_dim());
    }
    grid.mapv(|v| (v - min) / range * span)
}

// Layout of the sample coordinate grids
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    pub x_start: f64,
    pub x_stop: f64,
    pub nx: usize,
    pub y_start: f64,
    pub y_stop: f64,
    pub ny: usize,
    pub y_offset: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec {
            x_start: 0.0,
            x_stop: 100.0,
            nx: 11,
            y_start: 0.0,
            y_stop: 100.0,
            ny: 11,
            y_offset: 10.0,
        }
    }
}

impl GridSpec {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.nx >= 2 && self.ny >= 2,
            "grid needs at least 2 points per axis, got nx={} ny={}",
            self.nx,
            self.ny
        );
        let bounds = [
            self.x_start,
            self.x_stop,
            self.y_start,
            self.y_stop,
            self.y_offset,
        ];
        ensure!(
            bounds.iter().all(|b| b.is_finite()),
            "grid bounds must be finite: {:?}",
            self
        );
        Ok(())
    }

    /// Meshgrid of the x axis and the offset y axis.
    pub fn coordinates(&self) -> (Array2<f64>, Array2<f64>) {
        let x = linspace(self.x_start, self.x_stop, self.nx);
        let y = linspace(self.y_start, self.y_stop, self.ny) + self.y_offset;
        meshgrid(&x, &y)
    }
}

/// A value grid co-indexed with its x/y coordinate grids.
pub trait GridSample {
    fn xi(&self) -> &Array2<f64>;
    fn yi(&self) -> &Array2<f64>;
    fn values(&self) -> &Array2<f64>;

    /// Variable name used for CSV headers and NetCDF variables.
    fn value_name(&self) -> &'static str;
    fn units(&self) -> &'static str;

    fn shape(&self) -> (usize, usize) {
        self.values().dim()
    }

    fn check_shape(&self) -> Result<()> {
        let (xs, ys, vs) = (self.xi().dim(), self.yi().dim(), self.values().dim());
        ensure!(
            xs == vs && ys == vs,
            "{} grid shape {:?} does not match coordinates xi={:?} yi={:?}",
            self.value_name(),
            vs,
            xs,
            ys
        );
        Ok(())
    }
}
