//! Minimal HTTPS JSON client for the provider API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use zeroize::Zeroizing;

use super::errors::{ApiErrorBody, FetchError};
use super::paginated::{API_PAGE_SIZE, Page};

/// Default API root.
pub const DEFAULT_API_URL: &str = "https://api.linode.com/v4";

/// Authenticated API client. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    /// Underlying HTTP client.
    http: reqwest::Client,
    /// API root without a trailing slash.
    base_url: String,
    /// Personal access token, wiped from memory on drop.
    token: Option<Zeroizing<String>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// What: Create a client for `base_url`.
    ///
    /// Inputs:
    /// - `base_url`: API root such as [`DEFAULT_API_URL`].
    /// - `token`: Personal access token; `None` for unauthenticated requests.
    /// - `timeout`: Per-request timeout.
    ///
    /// Output:
    /// - A ready client, or `FetchError::Network` if the HTTP stack fails to initialize.
    ///
    /// # Errors
    /// - Returns `Err` when the reqwest client cannot be built.
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("clonedeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()).map(Zeroizing::new),
        })
    }

    /// API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for one page of a list endpoint.
    fn page_url(&self, path: &str, page: u32) -> String {
        format!(
            "{}/{}?page={page}&page_size={API_PAGE_SIZE}",
            self.base_url,
            path.trim_start_matches('/')
        )
    }

    /// What: Fetch one page of a list endpoint.
    ///
    /// Inputs:
    /// - `path`: Endpoint path relative to the API root (e.g. `images`).
    /// - `page`: 1-based page number.
    ///
    /// Output:
    /// - The decoded page envelope.
    ///
    /// # Errors
    /// - `FetchError::Network` on transport failures.
    /// - `FetchError::Api` on non-2xx responses, carrying the parsed error body.
    /// - `FetchError::Decode` when the body is not a valid page of `T`.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
    ) -> Result<Page<T>, FetchError> {
        let url = self.page_url(path, page);
        tracing::debug!(url = %url, "GET");
        let mut req = self.http.get(&url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token.as_str());
        }
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let parsed: ApiErrorBody = serde_json::from_str(&body).unwrap_or_default();
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                errors = parsed.errors.len(),
                "API request failed"
            );
            return Err(FetchError::Api {
                status: status.as_u16(),
                errors: parsed.errors,
            });
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
