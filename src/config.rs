/// Configuration constants for the Fly API
pub mod api {
    /// GraphQL endpoint path (appended to the API base URL)
    pub const GRAPHQL_PATH: &str = "/graphql";

    /// Environment variable overriding the API base URL
    pub const BASE_URL_ENV_VAR: &str = "FLY_API_BASE_URL";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Whole-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// GraphQL error code reported for missing resources
    pub const NOT_FOUND_CODE: &str = "NOT_FOUND";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Path to the fly config file (relative to HOME)
    pub const CONFIG_FILE_PATH: &str = ".fly/config.yml";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["FLY_ACCESS_TOKEN", "FLY_API_TOKEN"];
}

/// Default values for CLI
pub mod defaults {
    /// Default API base URL
    pub const API_URL: &str = "https://api.fly.io";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
