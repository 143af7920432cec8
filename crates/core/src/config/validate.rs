use reqwest::header::HeaderName;
use url::Url;

use super::{types::Config, ConfigError};
use crate::submitter::auth_header;

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Support API URL parses as an absolute URL
/// - Support API timeout is positive
/// - Auth header name and token can be sent as an HTTP header
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    Url::parse(&config.support_api.url).map_err(|e| {
        ConfigError::ValidationError(format!(
            "support_api.url '{}' is not a valid URL: {}",
            config.support_api.url, e
        ))
    })?;

    if config.support_api.timeout_ms == 0 {
        return Err(ConfigError::ValidationError(
            "support_api.timeout_ms must be a positive integer".to_string(),
        ));
    }

    let header_name = config.support_api.auth_header_name.trim();
    if !header_name.is_empty() && HeaderName::from_bytes(header_name.as_bytes()).is_err() {
        return Err(ConfigError::ValidationError(format!(
            "support_api.auth_header_name '{}' is not a valid HTTP header name",
            header_name
        )));
    }

    auth_header(&config.support_api).map_err(|e| {
        ConfigError::ValidationError(format!("support_api.token is unusable: {}", e))
    })?;

    Ok(())
}
