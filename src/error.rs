use std::fmt;

/// Custom error type for Fly organization operations
#[derive(Debug)]
pub enum FlyError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned a non-success HTTP status
    Api { status: u16, message: String },
    /// GraphQL response carried errors
    GraphQl(String),
    /// Requested resource does not exist
    NotFound(String),
    /// Command exists but has no implementation yet
    NotImplemented(&'static str),
    /// Token not found in any source
    TokenNotFound(String),
    /// Invalid or missing command input
    Usage(String),
    /// Interactive prompt failed
    Prompt(String),
    /// JSON parsing or serialization error
    Json(String),
    /// YAML serialization error
    Yaml(String),
    /// Writing output failed
    Io(std::io::Error),
    /// Configuration error
    Config(String),
}

impl fmt::Display for FlyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlyError::Http(e) => write!(f, "HTTP request failed: {}", e),
            FlyError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            FlyError::GraphQl(msg) => write!(f, "API error: {}", msg),
            FlyError::NotFound(msg) => write!(f, "{}", msg),
            FlyError::NotImplemented(command) => write!(f, "{} is not implemented", command),
            FlyError::TokenNotFound(msg) => write!(f, "{}", msg),
            FlyError::Usage(msg) => write!(f, "{}", msg),
            FlyError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
            FlyError::Json(msg) => write!(f, "JSON error: {}", msg),
            FlyError::Yaml(msg) => write!(f, "YAML error: {}", msg),
            FlyError::Io(e) => write!(f, "Output error: {}", e),
            FlyError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for FlyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlyError::Http(e) => Some(e),
            FlyError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FlyError {
    fn from(err: reqwest::Error) -> Self {
        FlyError::Http(err)
    }
}

impl From<serde_json::Error> for FlyError {
    fn from(err: serde_json::Error) -> Self {
        FlyError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for FlyError {
    fn from(err: serde_yml::Error) -> Self {
        FlyError::Yaml(err.to_string())
    }
}

impl From<std::io::Error> for FlyError {
    fn from(err: std::io::Error) -> Self {
        FlyError::Io(err)
    }
}

impl From<dialoguer::Error> for FlyError {
    fn from(err: dialoguer::Error) -> Self {
        FlyError::Prompt(err.to_string())
    }
}

/// Result type alias for Fly operations
pub type Result<T> = std::result::Result<T, FlyError>;
