use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Raw sensor package: workout code plus positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PackageIn")]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

// Object form first, then the legacy `["RUN", [..]]` pair.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackageIn {
    Object { workout_type: String, data: Vec<f64> },
    Pair(String, Vec<f64>),
}

impl From<PackageIn> for Package {
    fn from(p: PackageIn) -> Self {
        match p {
            PackageIn::Object { workout_type, data } | PackageIn::Pair(workout_type, data) => {
                Package { workout_type, data }
            }
        }
    }
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self { workout_type: workout_type.into(), data }
    }
}

/// The fixed demo batch: one package per workout type.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parse a JSON array of packages. Errors carry the JSON path of the bad element.
pub fn parse_packages(json: &str) -> Result<Vec<Package>> {
    let de = &mut serde_json::Deserializer::from_str(json);
    let packages: Vec<Package> = serde_path_to_error::deserialize(de)?;
    Ok(packages)
}

/// Read packages from a JSON file on disk.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<Package>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let packages = parse_packages(&contents)?;
    info!("loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

/// Write packages as pretty JSON (object form).
pub fn save_packages(packages: &[Package], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(packages).map_err(std::io::Error::from)?;
    std::fs::write(path, json)?;
    info!("saved {} packages to {}", packages.len(), path.display());
    Ok(())
}
