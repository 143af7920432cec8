use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub support_api: SupportApiConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Upstream support API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupportApiConfig {
    /// Base or full URL of the ticket API. `/tickets` is appended when missing.
    #[serde(default = "default_support_url")]
    pub url: String,
    /// Optional bearer token sent under `auth_header_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Header carrying the bearer token (default: "Authorization").
    #[serde(default = "default_auth_header_name")]
    pub auth_header_name: String,
    /// Request timeout in milliseconds (default: 10000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SupportApiConfig {
    fn default() -> Self {
        Self {
            url: default_support_url(),
            token: None,
            auth_header_name: default_auth_header_name(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

pub const DEFAULT_SUPPORT_API_URL: &str = "https://saas-ticket.free.beeceptor.com";
pub const DEFAULT_AUTH_HEADER_NAME: &str = "Authorization";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

fn default_support_url() -> String {
    DEFAULT_SUPPORT_API_URL.to_string()
}

fn default_auth_header_name() -> String {
    DEFAULT_AUTH_HEADER_NAME.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub support_api: SanitizedSupportApiConfig,
}

/// Sanitized support API config (token hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedSupportApiConfig {
    pub url: String,
    pub token_configured: bool,
    pub auth_header_name: String,
    pub timeout_ms: u64,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        let api = &config.support_api;
        Self {
            server: config.server.clone(),
            support_api: SanitizedSupportApiConfig {
                url: api.url.clone(),
                token_configured: api.token.as_deref().is_some_and(|t| !t.is_empty()),
                auth_header_name: api.auth_header_name.clone(),
                timeout_ms: api.timeout_ms,
            },
        }
    }
}
