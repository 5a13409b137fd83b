use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

// Crest elevation, either one level for the whole weir or one per vertex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Elevation {
    Uniform(f64),
    PerPoint(Vec<f64>),
}

impl Elevation {
    /// Level at vertex `i`; `None` past the end of a per-point profile.
    pub fn at(&self, i: usize) -> Option<f64> {
        match self {
            Elevation::Uniform(z) => Some(*z),
            Elevation::PerPoint(zs) => zs.get(i).copied(),
        }
    }
}

/// A weir crest polyline with its elevation and discharge parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeirFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Elevation,
    pub par1: f64,
}

impl WeirFeature {
    pub fn new(
        name: Option<&str>,
        x: Vec<f64>,
        y: Vec<f64>,
        z: Elevation,
        par1: f64,
    ) -> Result<Self> {
        let weir = WeirFeature {
            name: name.map(str::to_string),
            x,
            y,
            z,
            par1,
        };
        weir.validate()?;
        Ok(weir)
    }

    pub fn validate(&self) -> Result<()> {
        let label = self.name.as_deref().unwrap_or("<unnamed>");
        ensure!(
            self.x.len() == self.y.len(),
            "weir {}: x has {} coordinates but y has {}",
            label,
            self.x.len(),
            self.y.len()
        );
        ensure!(
            self.x.len() >= 2,
            "weir {}: crest needs at least 2 vertices, got {}",
            label,
            self.x.len()
        );
        if let Elevation::PerPoint(zs) = &self.z {
            ensure!(
                zs.len() == self.x.len(),
                "weir {}: {} elevations for {} vertices",
                label,
                zs.len(),
                self.x.len()
            );
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Crest level at every vertex, broadcasting a uniform elevation.
    pub fn crest_levels(&self) -> Vec<f64> {
        (0..self.len()).filter_map(|i| self.z.at(i)).collect()
    }

    /// Planar length of the crest polyline.
    pub fn crest_length(&self) -> f64 {
        self.x
            .windows(2)
            .zip(self.y.windows(2))
            .map(|(xs, ys)| (xs[1] - xs[0]).hypot(ys[1] - ys[0]))
            .sum()
    }

    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("weir-{}", index),
        }
    }
}

/// Two straight weirs along y = 100: a named one with a flat crest and an
/// unnamed one whose crest rises slightly at the middle vertex.
pub fn sample_weirs() -> Vec<WeirFeature> {
    vec![
        WeirFeature {
            name: Some("WEIR01".to_string()),
            x: vec![0.0, 10.0, 20.0],
            y: vec![100.0, 100.0, 100.0],
            z: Elevation::Uniform(5.0),
            par1: 0.6,
        },
        WeirFeature {
            name: None,
            x: vec![100.0, 110.0, 120.0],
            y: vec![100.0, 100.0, 100.0],
            z: Elevation::PerPoint(vec![5.0, 5.1, 5.0]),
            par1: 0.6,
        },
    ]
}
