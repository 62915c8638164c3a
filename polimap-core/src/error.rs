/// Top-level Polimap error type.
///
/// All fallible operations in `polimap-core` return
/// [`Result<T, PolimapError>`](Result). Each variant wraps a
/// domain-specific error enum, so callers can match on the error source
/// without losing type information. The graph engine itself is
/// infallible: malformed reports degrade to empty graphs rather than
/// erroring.
#[derive(thiserror::Error, Debug)]
pub enum PolimapError {
    /// Error fetching a report from the analysis service.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error in configuration parsing or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error writing rendered output.
    #[error("Render error: {0}")]
    Render(#[from] std::io::Error),
}

/// Errors from the report fetch client.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// Transport-level failure reaching the analysis service.
    #[error("Network error: {0}")]
    Network(String),

    /// The service returned a non-success HTTP status.
    #[error("API error (HTTP {status}): {body}")]
    Api {
        /// HTTP status code from the service.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// The response body could not be parsed as a report.
    #[error("Response parse error: {0}")]
    Parse(String),
}

/// Errors in Polimap configuration parsing and validation.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist at the given path.
    #[error("Config file not found: {0}")]
    NotFound(String),

    /// Configuration file syntax could not be parsed (TOML error).
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convenience alias for `Result<T, PolimapError>`.
pub type Result<T> = std::result::Result<T, PolimapError>;
