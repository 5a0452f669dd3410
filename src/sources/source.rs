//! Where disks, configurations, and images come from.

use std::sync::Arc;

use crate::state::types::{Config, Disk, Image};

use super::client::ApiClient;
use super::errors::FetchError;
use super::fixture::Fixture;
use super::images::fetch_images;
use super::instance::fetch_instance;

/// Backing store for every listing: the live API or an offline fixture.
#[derive(Clone, Debug)]
pub enum DataSource {
    /// Remote API.
    Api(Arc<ApiClient>),
    /// Pre-recorded listings; the instance id is ignored.
    Fixture(Arc<Fixture>),
}

impl DataSource {
    /// What: Load disks and configurations of an instance.
    ///
    /// Inputs:
    /// - `instance_id`: Source instance.
    ///
    /// Output:
    /// - `(disks, configs)` in API order.
    ///
    /// # Errors
    /// - Propagates the first fetch failure.
    pub async fn load_instance(
        &self,
        instance_id: u64,
    ) -> Result<(Vec<Disk>, Vec<Config>), FetchError> {
        match self {
            Self::Api(client) => fetch_instance(client, instance_id).await,
            Self::Fixture(fx) => Ok((fx.disks.clone(), fx.configs.clone())),
        }
    }

    /// What: Load every image.
    ///
    /// # Errors
    /// - Propagates the first page failure.
    pub async fn load_images(&self) -> Result<Vec<Image>, FetchError> {
        match self {
            Self::Api(client) => fetch_images(client).await,
            Self::Fixture(fx) => Ok(fx.images.clone()),
        }
    }

    /// Short description for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Api(client) => format!("api {}", client.base_url()),
            Self::Fixture(_) => "fixture".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    /// What: Fixture sources hand back their recorded listings
    async fn fixture_source_returns_recorded_data() {
        let fx = Fixture {
            disks: vec![Disk {
                id: 1,
                label: "sda".into(),
                size: 1024,
                filesystem: "ext4".into(),
                status: "ready".into(),
            }],
            configs: vec![],
            images: vec![],
        };
        let src = DataSource::Fixture(Arc::new(fx));
        let (disks, configs) = src.load_instance(42).await.expect("fixture load");
        assert_eq!(disks.len(), 1);
        assert!(configs.is_empty());
        assert!(src.load_images().await.expect("fixture images").is_empty());
        assert_eq!(src.describe(), "fixture");
    }
}
