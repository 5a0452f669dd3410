//! Disk and configuration listings of a compute instance.

use crate::state::types::{Config, Disk};

use super::client::ApiClient;
use super::errors::FetchError;
use super::paginated::get_all;

/// What: Fetch every disk of an instance.
///
/// Inputs:
/// - `client`: Authenticated API client.
/// - `instance_id`: Source instance.
///
/// Output:
/// - Disks in API order.
///
/// # Errors
/// - Returns the first page failure.
pub async fn fetch_disks(client: &ApiClient, instance_id: u64) -> Result<Vec<Disk>, FetchError> {
    let path = format!("linode/instances/{instance_id}/disks");
    let path = path.as_str();
    get_all(move |page| client.get_page::<Disk>(path, page)).await
}

/// What: Fetch every configuration profile of an instance.
///
/// Inputs:
/// - `client`: Authenticated API client.
/// - `instance_id`: Source instance.
///
/// Output:
/// - Configurations in API order.
///
/// # Errors
/// - Returns the first page failure.
pub async fn fetch_configs(
    client: &ApiClient,
    instance_id: u64,
) -> Result<Vec<Config>, FetchError> {
    let path = format!("linode/instances/{instance_id}/configs");
    let path = path.as_str();
    get_all(move |page| client.get_page::<Config>(path, page)).await
}

/// What: Fetch disks and configurations of an instance concurrently.
///
/// Inputs:
/// - `client`: Authenticated API client.
/// - `instance_id`: Source instance.
///
/// Output:
/// - `(disks, configs)` once both listings are complete.
///
/// # Errors
/// - Returns whichever listing fails first.
pub async fn fetch_instance(
    client: &ApiClient,
    instance_id: u64,
) -> Result<(Vec<Disk>, Vec<Config>), FetchError> {
    futures::try_join!(
        fetch_disks(client, instance_id),
        fetch_configs(client, instance_id)
    )
}
