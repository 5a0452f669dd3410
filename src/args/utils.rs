//! Shared utilities for argument processing.

use std::sync::Arc;
use std::time::Duration;

use crate::sources::{ApiClient, DataSource, FetchError, Fixture};
use crate::theme::Settings;

/// Environment variables searched for an API token, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["CLONEDECK_TOKEN", "LINODE_TOKEN"];

/// What: Determine the log level based on command-line arguments and settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Loaded settings.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `--log-level`, which overrides `log_level` in settings.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args, settings: &Settings) -> String {
    if args.verbose {
        "debug".to_string()
    } else if let Some(level) = &args.log_level {
        level.clone()
    } else {
        settings.log_level.clone()
    }
}

/// What: Read the API token from the environment.
///
/// Output:
/// - The first non-empty value among [`TOKEN_ENV_VARS`].
#[must_use]
pub fn resolve_token() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|v| !v.trim().is_empty())
}

/// What: Build the data source the run will read from.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Loaded settings.
///
/// Output:
/// - A fixture source when `--fixture` is given, otherwise an API source.
///
/// # Errors
/// - `FetchError::Fixture` when the fixture cannot be loaded.
/// - `FetchError::Network` when the HTTP client cannot be built.
///
/// Details:
/// - `--api-url` overrides `api_url` from settings.
pub fn build_source(args: &crate::args::Args, settings: &Settings) -> Result<DataSource, FetchError> {
    if let Some(path) = &args.fixture {
        return Ok(DataSource::Fixture(Arc::new(Fixture::load(path)?)));
    }
    let base = args.api_url.as_deref().unwrap_or(&settings.api_url);
    let token = resolve_token();
    if token.is_none() {
        tracing::warn!("no API token found in CLONEDECK_TOKEN or LINODE_TOKEN");
    }
    let client = ApiClient::new(
        base,
        token,
        Duration::from_secs(settings.request_timeout_secs.max(1)),
    )?;
    Ok(DataSource::Api(Arc::new(client)))
}
