//! Fly access token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{FlyError, Result};

/// Subset of ~/.fly/config.yml we care about
#[derive(Deserialize, Debug, Default)]
struct FlyConfigFile {
    #[serde(default)]
    access_token: Option<String>,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    config_path: Option<PathBuf>,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
    /// Create a resolver reading the default config file location
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a resolver reading an explicit config file
    pub fn with_config_path(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (FLY_ACCESS_TOKEN, FLY_API_TOKEN - in order)
    /// 3. Config file (~/.fly/config.yml, `access_token` key)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token.filter(|t| !t.trim().is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                if !token.trim().is_empty() {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
            }
        }

        debug!(
            "No token found in environment variables {:?}, trying config file",
            credentials::TOKEN_ENV_VARS
        );
        self.read_from_config_file()
    }

    /// Read token from the fly config file
    fn read_from_config_file(&self) -> Result<String> {
        let config_path = self
            .config_path
            .as_deref()
            .ok_or_else(|| FlyError::TokenNotFound(Self::token_not_found_message(None)))?;

        debug!("Looking for config file at: {}", config_path.display());

        let content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(_) => {
                return Err(FlyError::TokenNotFound(Self::token_not_found_message(
                    Some(config_path),
                )));
            }
        };

        let config: FlyConfigFile = serde_yml::from_str(&content).map_err(|e| {
            FlyError::Config(format!(
                "Could not parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config
            .access_token
            .filter(|t| !t.trim().is_empty())
            .inspect(|_| debug!("Using token from config file {}", config_path.display()))
            .ok_or_else(|| {
                FlyError::TokenNotFound(Self::token_not_found_message(Some(config_path)))
            })
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(config_path: Option<&Path>) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let config_info = config_path
            .map(|p| format!(" and config file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No access token available. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      flyorgs --access-token <TOKEN>\n\
             2. Environment var:   export FLY_ACCESS_TOKEN=<TOKEN>  (also: FLY_API_TOKEN)\n\
             3. Fly login:         fly auth login\n\
             \n\
             Checked: env vars [{}]{}",
            env_vars, config_info
        )
    }

    /// Default config file path (~/.fly/config.yml)
    fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(credentials::CONFIG_FILE_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolver_cli_token_takes_precedence() {
        let resolver = TokenResolver::with_config_path(PathBuf::from("/nonexistent"));
        let result = resolver.resolve(Some("cli-token-123"));
        assert_eq!(result.unwrap(), "cli-token-123");
    }

    #[test]
    fn test_read_token_from_config_file() {
        let file = config_file("access_token: file-token-456\nsend_metrics: true\n");
        let resolver = TokenResolver::with_config_path(file.path().to_path_buf());
        assert_eq!(resolver.read_from_config_file().unwrap(), "file-token-456");
    }

    #[test]
    fn test_config_file_without_token() {
        let file = config_file("send_metrics: true\n");
        let resolver = TokenResolver::with_config_path(file.path().to_path_buf());
        match resolver.read_from_config_file() {
            Err(FlyError::TokenNotFound(msg)) => {
                assert!(msg.contains(&file.path().display().to_string()))
            }
            other => panic!("Expected TokenNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_config_file_empty_token() {
        let file = config_file("access_token: \"\"\n");
        let resolver = TokenResolver::with_config_path(file.path().to_path_buf());
        assert!(matches!(
            resolver.read_from_config_file(),
            Err(FlyError::TokenNotFound(_))
        ));
    }

    #[test]
    fn test_config_file_invalid_yaml() {
        let file = config_file("access_token: [unterminated\n");
        let resolver = TokenResolver::with_config_path(file.path().to_path_buf());
        assert!(matches!(
            resolver.read_from_config_file(),
            Err(FlyError::Config(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let resolver =
            TokenResolver::with_config_path(PathBuf::from("/nonexistent/.fly/config.yml"));
        assert!(matches!(
            resolver.read_from_config_file(),
            Err(FlyError::TokenNotFound(_))
        ));
    }

    #[test]
    fn test_token_not_found_message_format() {
        let msg = TokenResolver::token_not_found_message(None);
        assert!(msg.contains("flyorgs --access-token"));
        assert!(msg.contains("FLY_ACCESS_TOKEN"));
        assert!(msg.contains("FLY_API_TOKEN"));
        assert!(msg.contains("fly auth login"));
    }

    #[test]
    fn test_default_config_path() {
        if let Some(path) = TokenResolver::default_config_path() {
            assert!(path.to_string_lossy().ends_with("config.yml"));
        }
    }
}
