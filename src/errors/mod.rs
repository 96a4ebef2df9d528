use anyhow::Context as _;
use std::fmt;
use std::path::Path;

/// Failure whose details were already written to stdout in machine-readable form
#[derive(Debug)]
pub struct AlreadyReported;

impl fmt::Display for AlreadyReported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error already reported")
    }
}

impl std::error::Error for AlreadyReported {}

/// Message for stderr, or `None` when the error was already reported.
pub fn error_message(error: &anyhow::Error) -> Option<String> {
    if error.is::<AlreadyReported>() {
        return None;
    }
    Some(format!("Error: {:#}", error))
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str, path: &Path) -> String {
    format!("Failed to parse {} from {}", data_type, path.display())
}

/// Add context to data file errors
pub fn store_context(operation: &str, path: &Path) -> String {
    format!("Failed to {} data file: {}", operation, path.display())
}

/// Wrap result with fetch context
pub fn with_fetch_context<T, E>(result: Result<T, E>, url: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| fetch_context(url))
}

/// Wrap result with store context
pub fn with_store_context<T, E>(result: Result<T, E>, operation: &str, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| store_context(operation, path))
}
