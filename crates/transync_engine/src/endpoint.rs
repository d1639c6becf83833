//! Endpoint resolution.
//!
//! Turns [`ConnectionParameters`] into a fully-qualified, authenticated
//! [`Endpoint`]. Resolution is a pure function of its input; no network
//! call is made.

use crate::config::{ConnectionParameters, PROVIDER_SCHEME};
use crate::error::{SyncError, SyncResult};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Host used when a DSN names the `default` host.
pub const DEFAULT_HOST: &str = "api.phrase.com";

/// Timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Host sentinel selecting the resolver's default host.
const DEFAULT_HOST_SENTINEL: &str = "default";

/// A resolved, project-scoped endpoint.
///
/// `base_url` always ends with a slash; request paths are relative to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: Url,
    authorization: String,
    timeout: Duration,
}

impl Endpoint {
    /// Creates an endpoint from an explicit base URL and token.
    ///
    /// A missing trailing slash is added to the path.
    pub fn new(base_url: &str, auth_token: &str, timeout: Duration) -> SyncResult<Self> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| SyncError::InvalidDsn(e.to_string()))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            authorization: format!("token {auth_token}"),
            timeout,
        })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the value of the `Authorization` header.
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves a relative request path against the base URL.
    pub fn url_for(&self, path: &str) -> SyncResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| SyncError::Protocol(format!("invalid request path \"{path}\": {e}")))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_url)
    }
}

/// Builds endpoints for the provider.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    default_host: String,
    default_timeout: Duration,
}

impl EndpointResolver {
    /// Creates a resolver using [`DEFAULT_HOST`] and [`DEFAULT_TIMEOUT`].
    pub fn new() -> Self {
        Self {
            default_host: DEFAULT_HOST.to_string(),
            default_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the host used for the `default` sentinel.
    pub fn with_default_host(mut self, host: impl Into<String>) -> Self {
        self.default_host = host.into();
        self
    }

    /// Overrides the timeout used when none is configured.
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Returns the schemes this resolver accepts.
    pub fn supported_schemes(&self) -> &'static [&'static str] {
        &[PROVIDER_SCHEME]
    }

    /// Returns true if the scheme names this provider.
    pub fn supports(&self, scheme: &str) -> bool {
        self.supported_schemes().contains(&scheme)
    }

    /// Resolves connection parameters into an endpoint.
    pub fn resolve(&self, params: &ConnectionParameters) -> SyncResult<Endpoint> {
        if !self.supports(&params.scheme) {
            return Err(SyncError::UnsupportedScheme {
                scheme: params.scheme.clone(),
                supported: self
                    .supported_schemes()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            });
        }
        if params.host.is_empty() {
            return Err(SyncError::IncompleteDsn { field: "host" });
        }
        if params.project_id.is_empty() {
            return Err(SyncError::IncompleteDsn { field: "user" });
        }
        if params.auth_token.is_empty() {
            return Err(SyncError::IncompleteDsn { field: "password" });
        }

        let mut authority = if params.host == DEFAULT_HOST_SENTINEL {
            self.default_host.clone()
        } else {
            params.host.clone()
        };
        if let Some(port) = params.port {
            authority.push_str(&format!(":{port}"));
        }
        if let Some(version) = params.api_version.as_deref().filter(|v| !v.is_empty()) {
            authority.push('/');
            authority.push_str(version);
        }

        let base_url = format!("https://{authority}/projects/{}/", params.project_id);
        Endpoint::new(
            &base_url,
            &params.auth_token,
            params.timeout.unwrap_or(self.default_timeout),
        )
    }
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::new()
    }
}
