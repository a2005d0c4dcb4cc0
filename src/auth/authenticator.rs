//! Authenticator implementation
//!
//! Turns an [`AuthConfig`] into request headers.

use super::types::AuthConfig;
use crate::error::{Error, Result};
use base64::Engine as _;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};

/// Authenticator applies authentication headers to a request header set
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Get the auth configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Insert authentication headers into `headers`, replacing any existing
    /// value for the same header name
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        match &self.config {
            AuthConfig::None => {}

            AuthConfig::Bearer { token } => {
                headers.insert(
                    AUTHORIZATION,
                    sensitive_value("Authorization", &format!("Bearer {token}"))?,
                );
            }

            AuthConfig::Basic { username, password } => {
                let encoded = base64::engine::general_purpose::STANDARD
                    .encode(format!("{username}:{password}"));
                headers.insert(
                    AUTHORIZATION,
                    sensitive_value("Authorization", &format!("Basic {encoded}"))?,
                );
            }

            AuthConfig::CustomHeaders { headers: custom } => {
                for (key, value) in custom {
                    headers.insert(header_name_from(key)?, sensitive_value(key, value)?);
                }
            }
        }
        Ok(())
    }
}

/// Parse a header name, reporting which one was invalid
pub(crate) fn header_name_from(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.trim().as_bytes())
        .map_err(|e| Error::invalid_header(name, e.to_string()))
}

fn sensitive_value(name: &str, value: &str) -> Result<HeaderValue> {
    let mut value =
        HeaderValue::from_str(value).map_err(|e| Error::invalid_header(name, e.to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}
