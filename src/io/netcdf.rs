use crate::grid::GridSample;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use ndarray::Array2;
use std::path::Path;

const FILL_VALUE: f64 = -9999.0;

// Function to write a gridded sample to NetCDF
pub fn write_grid_netcdf<G: GridSample>(
    path: &Path,
    sample: &G,
    created: &NaiveDateTime,
) -> Result<()> {
    sample.check_shape()?;
    let (ny, nx) = sample.shape();

    let mut file =
        netcdf::create(path).with_context(|| format!("Failed to create NetCDF file: {:?}", path))?;

    // Add dimensions
    file.add_dimension("y", ny)?;
    file.add_dimension("x", nx)?;

    // Coordinate grids
    let mut xi_var = file.add_variable::<f64>("xi", &["y", "x"])?;
    xi_var.put_attribute("long_name", "x coordinate")?;
    xi_var.put_attribute("units", "m")?;
    xi_var.put_values(&flatten(sample.xi()), ..)?;

    let mut yi_var = file.add_variable::<f64>("yi", &["y", "x"])?;
    yi_var.put_attribute("long_name", "y coordinate")?;
    yi_var.put_attribute("units", "m")?;
    yi_var.put_values(&flatten(sample.yi()), ..)?;

    // Sample values
    let mut value_var = file.add_variable::<f64>(sample.value_name(), &["y", "x"])?;
    value_var.put_attribute("_FillValue", FILL_VALUE)?;
    value_var.put_attribute("long_name", sample.value_name())?;
    value_var.put_attribute("units", sample.units())?;
    value_var.put_attribute("missing_value", FILL_VALUE)?;
    value_var
        .put_values(&flatten(sample.values()), ..)
        .with_context(|| format!("Failed to write {} values", sample.value_name()))?;

    // Global attributes
    file.add_attribute("TITLE", "OUTPUT FROM HYDRO_FIXTURES")?;
    file.add_attribute(
        "date_created",
        created.format("%Y-%m-%d_%H:%M:%S").to_string(),
    )?;

    Ok(())
}

// Row-major copy, independent of the array's memory layout
fn flatten(grid: &Array2<f64>) -> Vec<f64> {
    grid.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elevation::elevation_data;
    use chrono::NaiveDate;
    use netcdf::AttributeValue;

    #[test]
    fn elevation_grid_layout_and_attributes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("elevation.nc");
        let sample = elevation_data();
        let created = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        write_grid_netcdf(&path, &sample, &created).unwrap();

        let file = netcdf::open(&path).unwrap();
        assert_eq!(file.dimension("y").unwrap().len(), 11);
        assert_eq!(file.dimension("x").unwrap().len(), 11);

        let elevation = file.variable("elevation").unwrap();
        let values = elevation.get_values::<f64, _>(..).unwrap();
        assert_eq!(values.len(), 121);
        assert_eq!(values[10 * 11 + 10], sample.elevation[[10, 10]]);
        assert_eq!(values[0], sample.elevation[[0, 0]]);

        let fill = elevation.attribute("_FillValue").unwrap().value().unwrap();
        assert!(matches!(fill, AttributeValue::Double(v) if v == FILL_VALUE));
        let units = elevation.attribute("units").unwrap().value().unwrap();
        assert!(matches!(units, AttributeValue::Str(ref u) if u == "m"));

        let yi = file.variable("yi").unwrap().get_values::<f64, _>(..).unwrap();
        assert_eq!(yi[10 * 11], 110.0);

        let stamp = file.attribute("date_created").unwrap().value().unwrap();
        assert!(matches!(stamp, AttributeValue::Str(ref s) if s == "2024-03-01_12:30:00"));
        let title = file.attribute("TITLE").unwrap().value().unwrap();
        assert!(matches!(title, AttributeValue::Str(ref s) if s == "OUTPUT FROM HYDRO_FIXTURES"));
    }

    #[test]
    fn mismatched_grids_are_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.nc");
        let mut sample = elevation_data();
        sample.elevation = Array2::zeros((3, 3));
        assert!(write_grid_netcdf(&path, &sample, &created_now()).is_err());
        assert!(!path.exists());
    }

    fn created_now() -> NaiveDateTime {
        chrono::Utc::now().naive_utc()
    }
}
