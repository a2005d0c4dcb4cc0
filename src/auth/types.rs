//! Auth configuration types

use std::collections::HashMap;

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Bearer token authentication (`Authorization: Bearer <token>`)
    Bearer {
        /// The bearer token
        token: String,
    },

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Custom headers
    CustomHeaders {
        /// Headers to add to each request
        headers: HashMap<String, String>,
    },
}

impl AuthConfig {
    /// Bearer auth from an optional token; `None` when the token is absent or blank
    pub fn bearer_opt(token: Option<&str>) -> Self {
        match token.map(str::trim) {
            Some(token) if !token.is_empty() => Self::Bearer {
                token: token.to_string(),
            },
            _ => Self::None,
        }
    }

    /// Short name of the auth scheme, safe to log
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bearer { .. } => "bearer",
            Self::Basic { .. } => "basic",
            Self::CustomHeaders { .. } => "custom_headers",
        }
    }
}

// Secrets never reach log output
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CustomHeaders { headers } => {
                let mut names: Vec<_> = headers.keys().collect();
                names.sort();
                f.debug_struct("CustomHeaders")
                    .field("headers", &names)
                    .finish()
            }
            other => f
                .debug_struct("AuthConfig")
                .field("scheme", &other.scheme())
                .finish_non_exhaustive(),
        }
    }
}
