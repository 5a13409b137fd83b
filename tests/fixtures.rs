use approx::assert_abs_diff_eq;
use hydro_fixtures::config::{Dataset, FixtureConfig, OutputFormat};
use hydro_fixtures::io::{csv::write_grid_csv, csv::write_weirs_csv, json};
use hydro_fixtures::{
    Elevation, GridSample, GridSpec, WeirFeature, elevation_data, manning_data, sample_weirs,
};
use tempfile::TempDir;

#[test]
fn fixtures_are_fresh_per_call() {
    let mut first = sample_weirs();
    first[0].par1 = 1.0;
    assert_eq!(sample_weirs()[0].par1, 0.6);
    assert_eq!(elevation_data(), elevation_data());
}

#[test]
fn every_grid_sample_is_shape_consistent() {
    let elevation = elevation_data();
    let manning = manning_data();
    elevation.check_shape().unwrap();
    manning.check_shape().unwrap();
    assert_eq!(elevation.shape(), manning.shape());
    assert_eq!(elevation.xi, manning.xi);
    assert_eq!(elevation.yi, manning.yi);
}

#[test]
fn coordinate_ranges() {
    let sample = elevation_data();
    for c in 0..11 {
        assert_abs_diff_eq!(sample.xi[[0, c]], 10.0 * c as f64, epsilon = 1e-12);
        assert_abs_diff_eq!(sample.xi[[7, c]], 10.0 * c as f64, epsilon = 1e-12);
    }
    for r in 0..11 {
        assert_abs_diff_eq!(sample.yi[[r, 0]], 10.0 + 10.0 * r as f64, epsilon = 1e-12);
    }
}

#[test]
fn weir_set_round_trips_through_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weirs.json");
    let mut weirs = sample_weirs();
    weirs.push(
        WeirFeature::new(
            Some("SPILLWAY"),
            vec![0.0, 5.0, 5.0],
            vec![0.0, 0.0, 5.0],
            Elevation::PerPoint(vec![2.0, 2.5, 3.0]),
            0.8,
        )
        .unwrap(),
    );
    json::write_weirs_json(&path, &weirs).unwrap();
    assert_eq!(json::read_weirs_json(&path).unwrap(), weirs);
}

#[test]
fn exports_land_in_config_paths() {
    let dir = TempDir::new().unwrap();
    let config = FixtureConfig {
        dataset: Dataset::All,
        format: OutputFormat::Csv,
        output_dir: dir.path().to_path_buf(),
        grid: GridSpec::default(),
    };

    let weirs_path = config.output_path(Dataset::Weirs, OutputFormat::Csv);
    assert_eq!(write_weirs_csv(&weirs_path, &sample_weirs()).unwrap(), 6);

    let grid_path = config.output_path(Dataset::Elevation, OutputFormat::Csv);
    assert_eq!(write_grid_csv(&grid_path, &elevation_data()).unwrap(), 121);

    let text = std::fs::read_to_string(&grid_path).unwrap();
    assert_eq!(text.lines().count(), 122);
    assert!(text.starts_with("row,col,x,y,elevation"));
}
