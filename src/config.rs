//! Source configuration
//!
//! Describes where a paginated collection lives and how to authenticate
//! against it. Loaded from a YAML (or JSON) file; CLI flags may override
//! individual fields afterwards.
//!
//! ```yaml
//! base_url: https://lms.example.edu
//! course_code: 4711
//! # token may be left out and supplied via PAGECHAIN_TOKEN
//! headers:
//!   Accept: application/json
//! next_url: verbatim
//! max_pages: 500
//! ```

use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use crate::fetch::FetchOptions;
use crate::http::HttpClientConfig;
use crate::pagination::{LinkHeaderPaginator, NextUrlMode, RequestTemplate};
use crate::types::StringMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Environment variable consulted when no token is configured
pub const TOKEN_ENV_VAR: &str = "PAGECHAIN_TOKEN";

/// Configuration for one paginated source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the API (e.g. `https://lms.example.edu`)
    #[serde(default)]
    pub base_url: Option<String>,

    /// Explicit seed URL; wins over `base_url` + path
    #[serde(default)]
    pub url: Option<String>,

    /// Resource path appended to `base_url`
    #[serde(default)]
    pub resource_path: Option<String>,

    /// Course whose roster is fetched when no path is given
    #[serde(default)]
    pub course_code: Option<u64>,

    /// Bearer token
    #[serde(default)]
    pub token: Option<String>,

    /// Extra request headers
    #[serde(default)]
    pub headers: StringMap,

    /// Whole-chain timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// How `next` links are turned into request URLs
    #[serde(default)]
    pub next_url: NextUrlMode,

    /// Maximum pages per chain
    #[serde(default)]
    pub max_pages: Option<usize>,
}

impl SourceConfig {
    /// Load a config file (YAML or JSON)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        content.parse()
    }

    /// Fill the token from [`TOKEN_ENV_VAR`] when none is configured
    #[must_use]
    pub fn with_env_token(mut self) -> Self {
        if self.token.as_deref().map_or(true, |t| t.trim().is_empty()) {
            if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
                self.token = Some(token);
            }
        }
        self
    }

    /// Resolve the URL of the first page
    ///
    /// Order: explicit `url`, then `base_url` + `resource_path`, then the
    /// course roster `base_url/api/v1/courses/{course_code}/users/`.
    pub fn seed_url(&self) -> Result<Url> {
        if let Some(url) = &self.url {
            return Ok(Url::parse(url)?);
        }

        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| Error::missing_field("base_url"))?;
        let base = base.trim_end_matches('/');

        let path = match (&self.resource_path, self.course_code) {
            (Some(path), _) => format!("/{}", path.trim_start_matches('/')),
            (None, Some(course)) => format!("/api/v1/courses/{course}/users/"),
            (None, None) => return Err(Error::missing_field("resource_path or course_code")),
        };

        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Auth config derived from the token
    pub fn auth(&self) -> AuthConfig {
        AuthConfig::bearer_opt(self.token.as_deref())
    }

    /// Build the request template for the first page
    pub fn request_template(&self) -> Result<RequestTemplate> {
        let mut names: Vec<_> = self.headers.keys().collect();
        names.sort();

        let mut template = RequestTemplate::new(self.seed_url()?);
        for name in names {
            template = template.with_header(name, &self.headers[name])?;
        }
        template.with_auth(&Authenticator::new(self.auth()))
    }

    /// HTTP client configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder();
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder.build()
    }

    /// Paginator for this source
    pub fn paginator(&self) -> LinkHeaderPaginator {
        LinkHeaderPaginator::default().with_mode(self.next_url)
    }

    /// Fetch options for this source
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            max_pages: self.max_pages,
        }
    }

    /// Whole-chain deadline, if configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl FromStr for SourceConfig {
    type Err = Error;

    /// Parse config from a YAML (or JSON) string
    fn from_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
