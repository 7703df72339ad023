//! deps.dev API client.
//!
//! Low-level HTTP client that resolves relative paths against the base URL,
//! issues GET requests and decodes JSON bodies. Endpoint operations are
//! implemented on top of [`DepsDevClient::fetch`].

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::error::{DepsDevError, Result};
use crate::models::{
    AdvisoryKey, PackageKey, ProjectKey, QueryOptions, QueryResult, VersionKey,
};
use crate::models::{Advisory, Dependencies, Package, Project, ProjectPackageVersions};
use crate::models::{Requirements, Version};
use crate::traits::Get;

/// Production service root.
pub const DEFAULT_API_URL: &str = "https://api.deps.dev/v3/";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const ACCEPT_JSON: &str = "application/json; charset=utf-8";
const USER_AGENT: &str = concat!("depsdev/", env!("CARGO_PKG_VERSION"));

/// deps.dev API client.
///
/// Holds the base URL and the HTTP transport. It carries no per-request
/// state, so a single instance can serve concurrent callers. This struct is
/// cheaply cloneable; clones reference the same underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use depsdev::DepsDevClient;
///
/// # async fn example() -> depsdev::Result<()> {
/// // Production API with a default transport
/// let client = DepsDevClient::default();
///
/// // Or point at another deployment
/// let client = DepsDevClient::new("http://localhost:8080/v3", None);
///
/// let package = client.get_package("npm", "react").await?;
/// println!("{} versions", package.versions.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DepsDevClient {
    http: std::result::Result<Client, Arc<str>>,
    base_url: Arc<str>,
    cancel: Option<CancellationToken>,
}

impl std::fmt::Debug for DepsDevClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepsDevClient")
            .field("base_url", &self.base_url)
            .field("cancellable", &self.cancel.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for DepsDevClient {
    fn default() -> Self {
        Self::new("", None)
    }
}

impl DepsDevClient {
    /// Create a client for `base_url` using `http` as transport.
    ///
    /// An empty `base_url` selects [`DEFAULT_API_URL`]; `None` builds a
    /// default-configured transport. No I/O happens here and the URL is not
    /// parsed until the first request, so construction cannot fail. If the
    /// default transport cannot be built, every request returns
    /// [`DepsDevError::ConfigInvalid`] with the builder's error.
    pub fn new(base_url: &str, http: Option<Client>) -> Self {
        let http = match http {
            Some(client) => Ok(client),
            None => default_http(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .map_err(|e| Arc::from(e.to_string())),
        };
        Self::with_transport(base_url, http)
    }

    fn with_transport(base_url: &str, http: std::result::Result<Client, Arc<str>>) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url).into(),
            cancel: None,
        }
    }

    /// Create a client from environment variables.
    ///
    /// Reads `DEPSDEV_API_URL` for the base URL (defaults to
    /// `https://api.deps.dev/v3/`) and `DEPSDEV_TIMEOUT_SECS` for the request
    /// timeout (defaults to 60 seconds).
    ///
    /// # Errors
    ///
    /// Returns an error if `DEPSDEV_TIMEOUT_SECS` is not a number of seconds
    /// or the transport cannot be built.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("DEPSDEV_API_URL").unwrap_or_default();

        let timeout = match env::var("DEPSDEV_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                DepsDevError::ConfigInvalid(format!(
                    "DEPSDEV_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let http = default_http(Duration::from_secs(timeout))?;
        Ok(Self::new(&base_url, Some(http)))
    }

    /// Return a clone of this client whose requests fail with
    /// [`DepsDevError::Cancelled`] once `token` is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            ..self.clone()
        }
    }

    /// Return a clone of this client that targets `base_url`, keeping the
    /// transport and its timeout.
    pub fn with_base_url(&self, base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url).into(),
            ..self.clone()
        }
    }

    /// Get the base URL (always ends with `/`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a relative path against the base URL.
    ///
    /// Leading slashes are stripped so the path always lands beneath the
    /// base URL instead of replacing its path.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(path.trim_start_matches('/'))?)
    }

    /// GET `path` and decode the JSON body into `T`.
    ///
    /// Exactly one round trip is made. Any status other than 200 becomes
    /// [`DepsDevError::ApiError`] with the raw body as message; a body that
    /// does not match `T` becomes [`DepsDevError::ParseError`].
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        let http = self.http.as_ref().map_err(|e| {
            DepsDevError::ConfigInvalid(format!("HTTP transport could not be built: {e}"))
        })?;
        let request = http.get(url).header(ACCEPT, ACCEPT_JSON);

        let body = match &self.cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    () = token.cancelled() => return Err(DepsDevError::Cancelled),
                    body = Self::execute(request) => body?,
                }
            }
            None => Self::execute(request).await?,
        };

        Ok(serde_json::from_slice(&body)?)
    }

    /// Send the request, drain the body and check the status.
    async fn execute(request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(status = %status, bytes = body.len(), "received response");

        if status != reqwest::StatusCode::OK {
            return Err(DepsDevError::ApiError {
                message: String::from_utf8_lossy(&body).into_owned(),
                status_code: status.as_u16(),
            });
        }

        Ok(body.to_vec())
    }

    /// Get a package and its available versions.
    #[tracing::instrument(skip(self))]
    pub async fn get_package(&self, system: &str, name: &str) -> Result<Package> {
        Package::get(self, PackageKey::new(system, name)).await
    }

    /// Get a package version, including its licenses and advisories.
    #[tracing::instrument(skip(self))]
    pub async fn get_version(&self, system: &str, name: &str, version: &str) -> Result<Version> {
        Version::get(self, VersionKey::new(system, name, version)).await
    }

    /// Get the resolved dependency graph of a package version.
    #[tracing::instrument(skip(self))]
    pub async fn get_dependencies(&self, key: VersionKey) -> Result<Dependencies> {
        Dependencies::get(self, key).await
    }

    /// Get the system-specific requirements declared by a package version.
    #[tracing::instrument(skip(self))]
    pub async fn get_requirements(
        &self,
        system: &str,
        name: &str,
        version: &str,
    ) -> Result<Requirements> {
        Requirements::get(self, VersionKey::new(system, name, version)).await
    }

    /// Get a project hosted by GitHub, GitLab or Bitbucket.
    #[tracing::instrument(skip(self))]
    pub async fn get_project(&self, id: &str) -> Result<Project> {
        Project::get(self, ProjectKey::new(id)).await
    }

    /// Get the package versions known to be built from a project.
    #[tracing::instrument(skip(self))]
    pub async fn get_project_package_versions(
        &self,
        key: ProjectKey,
    ) -> Result<ProjectPackageVersions> {
        ProjectPackageVersions::get(self, key).await
    }

    /// Get a security advisory by its OSV identifier.
    #[tracing::instrument(skip(self))]
    pub async fn get_advisory(&self, id: &str) -> Result<Advisory> {
        Advisory::get(self, AdvisoryKey::new(id)).await
    }

    /// Find package versions by content hash and/or version key.
    #[tracing::instrument(skip(self))]
    pub async fn query(&self, options: &QueryOptions) -> Result<QueryResult> {
        crate::models::query(self, options).await
    }
}

fn default_http(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .brotli(true)
        .gzip(true)
        .deflate(true)
        .timeout(timeout)
        .build()
        .map_err(DepsDevError::HttpError)
}

fn normalize_base_url(base_url: &str) -> String {
    let base_url = base_url.trim();
    if base_url.is_empty() {
        return DEFAULT_API_URL.to_string();
    }
    // Ensure base URL ends with /
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug() {
        let client = DepsDevClient::new("https://api.deps.dev/v3", None);
        let debug = format!("{:?}", client);
        assert!(debug.contains("DepsDevClient"));
        assert!(debug.contains("base_url"));
    }

    #[test]
    fn test_empty_base_url_uses_default() {
        let client = DepsDevClient::new("", None);
        assert_eq!(client.base_url(), DEFAULT_API_URL);
        assert_eq!(DepsDevClient::default().base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = DepsDevClient::new("https://api.deps.dev/v3", None);
        let client2 = DepsDevClient::new("https://api.deps.dev/v3/", None);
        assert_eq!(client1.base_url(), client2.base_url());
    }

    #[test]
    fn test_endpoint_resolves_beneath_base_path() {
        let client = DepsDevClient::default();
        let url = client.endpoint("systems/npm/packages/react").unwrap();
        assert_eq!(url.as_str(), "https://api.deps.dev/v3/systems/npm/packages/react");

        let url = client.endpoint("/advisories/GHSA-1").unwrap();
        assert_eq!(url.as_str(), "https://api.deps.dev/v3/advisories/GHSA-1");
    }

    #[test]
    fn test_endpoint_keeps_escaped_slashes() {
        let client = DepsDevClient::default();
        let url = client
            .endpoint("systems/go/packages/rsc.io%2Fgithub/versions/v0.4.1")
            .unwrap();
        assert_eq!(url.path(), "/v3/systems/go/packages/rsc.io%2Fgithub/versions/v0.4.1");
    }

    #[test]
    fn test_malformed_base_url_fails_at_request_time() {
        let client = DepsDevClient::new("not a url", None);
        assert!(matches!(
            client.endpoint("projects/x"),
            Err(DepsDevError::UrlError(_))
        ));
    }

    #[test]
    fn test_with_cancellation_keeps_base_url() {
        let client = DepsDevClient::new("http://localhost:1234", None);
        let bound = client.with_cancellation(CancellationToken::new());
        assert_eq!(bound.base_url(), "http://localhost:1234/");
        assert!(format!("{bound:?}").contains("cancellable: true"));
    }

    #[test]
    fn test_with_base_url_normalizes() {
        let client = DepsDevClient::default().with_base_url("http://localhost:8080/v3");
        assert_eq!(client.base_url(), "http://localhost:8080/v3/");
    }

    #[tokio::test]
    async fn test_unbuilt_transport_fails_every_request() {
        let client = DepsDevClient::with_transport(
            "http://localhost:1234",
            Err(Arc::from("TLS backend unavailable")),
        );

        let err = client.get_advisory("OSV-1").await.unwrap_err();
        match err {
            DepsDevError::ConfigInvalid(message) => {
                assert!(message.contains("TLS backend unavailable"))
            }
            other => panic!("expected ConfigInvalid, got {other:?}"),
        }
    }
}
