//! Network and offline data retrieval split into submodules.

mod client;
mod errors;
mod fixture;
mod images;
mod instance;
mod paginated;
mod source;

pub use client::{ApiClient, DEFAULT_API_URL};
pub use errors::{ApiFieldError, FetchError, api_error_or_default};
pub use fixture::Fixture;
pub use images::fetch_images;
pub use instance::{fetch_configs, fetch_disks, fetch_instance};
pub use paginated::{API_PAGE_SIZE, MAX_CONCURRENT_PAGES, Page, get_all};
pub use source::DataSource;
