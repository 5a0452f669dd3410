//! Fetch errors and their normalization into the API's field-error shape.

/// One entry of the provider's `{"errors": [...]}` response body.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApiFieldError {
    /// Human-readable explanation.
    pub reason: String,
    /// Request field the error refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiFieldError {
    /// Build an error carrying only a reason.
    #[must_use]
    pub fn reason(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            field: None,
        }
    }
}

/// Error body returned by the provider on non-2xx responses.
#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct ApiErrorBody {
    /// Reported errors.
    #[serde(default)]
    pub errors: Vec<ApiFieldError>,
}

/// Anything that can go wrong while retrieving data.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure (connect, TLS, timeout, reading the body).
    #[error("network error: {0}")]
    Network(String),
    /// The API answered with an error status.
    #[error("API error (HTTP {status}): {}", join_reasons(.errors))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Errors parsed from the response body; may be empty.
        errors: Vec<ApiFieldError>,
    },
    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The offline fixture could not be read or parsed.
    #[error("fixture error: {0}")]
    Fixture(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// Join error reasons for display.
fn join_reasons(errors: &[ApiFieldError]) -> String {
    if errors.is_empty() {
        return "no details".to_string();
    }
    errors
        .iter()
        .map(|e| e.reason.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// What: Normalize any fetch failure into a non-empty list of field errors.
///
/// Inputs:
/// - `err`: Failure raised while fetching.
/// - `default_message`: Reason used when `err` carries no API reasons.
///
/// Output:
/// - The API's own errors when it reported any with a non-empty reason;
///   otherwise a single error holding `default_message`.
#[must_use]
pub fn api_error_or_default(err: &FetchError, default_message: &str) -> Vec<ApiFieldError> {
    if let FetchError::Api { errors, .. } = err {
        let meaningful: Vec<ApiFieldError> = errors
            .iter()
            .filter(|e| !e.reason.trim().is_empty())
            .cloned()
            .collect();
        if !meaningful.is_empty() {
            return meaningful;
        }
    }
    vec![ApiFieldError::reason(default_message)]
}
