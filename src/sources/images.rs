//! Account image listing.

use crate::state::types::Image;

use super::client::ApiClient;
use super::errors::FetchError;
use super::paginated::get_all;

/// What: Fetch every image visible to the account, public and private.
///
/// Inputs:
/// - `client`: Authenticated API client.
///
/// Output:
/// - Images in API order.
///
/// # Errors
/// - Returns the first page failure.
pub async fn fetch_images(client: &ApiClient) -> Result<Vec<Image>, FetchError> {
    get_all(move |page| client.get_page::<Image>("images", page)).await
}
