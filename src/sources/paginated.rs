//! Exhaustive retrieval of paginated list endpoints.

use std::future::Future;

use futures::stream::{self, StreamExt, TryStreamExt};

use super::errors::FetchError;

/// Largest page size the API accepts; used to minimize round trips.
pub const API_PAGE_SIZE: u32 = 100;

/// Most page requests kept in flight at once.
pub const MAX_CONCURRENT_PAGES: usize = 5;

/// The provider's page envelope.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// 1-based page number.
    #[serde(default = "first_page")]
    pub page: u32,
    /// Total number of pages.
    #[serde(default = "first_page")]
    pub pages: u32,
    /// Total number of items across all pages.
    #[serde(default)]
    pub results: u32,
}

/// Serde default for page counters.
const fn first_page() -> u32 {
    1
}

impl<T> Page<T> {
    /// Whether the API has pages after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

/// What: Collect every item of a paginated endpoint into one ordered list.
///
/// Inputs:
/// - `fetch_page`: Fetches a single 1-based page.
///
/// Output:
/// - `Ok(items)` with the items of all pages in page order.
/// - `Err` with the first failure; partial results are discarded.
///
/// # Errors
/// - Propagates any error returned by `fetch_page`.
///
/// Details:
/// - Page 1 is fetched first to learn the page count; pages `2..=pages` are
///   then fetched with at most [`MAX_CONCURRENT_PAGES`] requests in flight and
///   concatenated in order.
pub async fn get_all<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, FetchError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, FetchError>>,
{
    let first = fetch_page(1).await?;
    if !first.has_next() {
        tracing::debug!(items = first.data.len(), "fetched single page");
        return Ok(first.data);
    }
    let pages = first.pages;
    let mut items = first.data;
    let rest: Vec<Page<T>> = stream::iter(2..=pages)
        .map(&mut fetch_page)
        .buffered(MAX_CONCURRENT_PAGES)
        .try_collect()
        .await?;
    for page in rest {
        items.extend(page.data);
    }
    tracing::debug!(items = items.len(), pages, "fetched all pages");
    Ok(items)
}
