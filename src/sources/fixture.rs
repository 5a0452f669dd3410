//! Offline data source backed by a JSON file.

use std::path::Path;

use crate::state::types::{Config, Disk, Image};

use super::errors::FetchError;

/// Everything the app would otherwise fetch from the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fixture {
    /// Disks of the source instance.
    #[serde(default)]
    pub disks: Vec<Disk>,
    /// Configuration profiles of the source instance.
    #[serde(default)]
    pub configs: Vec<Config>,
    /// Images visible to the account.
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Fixture {
    /// What: Load a fixture file.
    ///
    /// Inputs:
    /// - `path`: JSON file with optional `disks`, `configs` and `images` arrays.
    ///
    /// Output:
    /// - The parsed fixture.
    ///
    /// # Errors
    /// - `FetchError::Fixture` when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, FetchError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| FetchError::Fixture(format!("{}: {e}", path.display())))?;
        let fixture: Self = serde_json::from_str(&raw)
            .map_err(|e| FetchError::Fixture(format!("{}: {e}", path.display())))?;
        tracing::info!(
            path = %path.display(),
            disks = fixture.disks.len(),
            configs = fixture.configs.len(),
            images = fixture.images.len(),
            "loaded fixture"
        );
        Ok(fixture)
    }
}
