//! GitHub REST client
//!
//! HTTP client for the public, unauthenticated GitHub REST API.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::GitHubConfig;
use crate::error::GitHubError;
use crate::models::{CommitSearchPayload, RepoPayload, UserProfile};
use crate::urlencoding;

/// Accept marker for the stable v3 REST API
const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// Accept marker enabling the commit-search preview endpoint
const ACCEPT_COMMIT_SEARCH: &str = "application/vnd.github.cloak-preview+json";

/// The three GitHub lookups behind one seam
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch the profile for `login`
    async fn fetch_user(&self, login: &str) -> Result<UserProfile, GitHubError>;

    /// Search for the most recent commit authored by `login`
    async fn fetch_author_email(&self, login: &str) -> Result<CommitSearchPayload, GitHubError>;

    /// Fetch the most recently updated repository of `login`, at most one entry
    async fn fetch_latest_repo(&self, login: &str) -> Result<Vec<RepoPayload>, GitHubError>;
}

/// REST implementation backed by one preconfigured HTTP client
///
/// The default headers are set once at construction; the client is read-only
/// afterwards and safe to reuse serially across lookups.
#[derive(Debug, Clone)]
pub struct GitHubRestClient {
    client: Client,
    config: GitHubConfig,
}

impl GitHubRestClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GitHubConfig) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V3));
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| GitHubError::ConnectionFailed(e.to_string()))?;
        headers.insert(USER_AGENT, agent);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GitHubError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, GitHubError> {
        Self::new(GitHubConfig::default())
    }

    fn user_url(&self, login: &str) -> String {
        format!("{}/users/{}", self.config.base_url, urlencoding::encode(login))
    }

    fn commit_search_url(&self, login: &str) -> String {
        format!(
            "{}/search/commits?q=author:{}&per_page=1&sort=author-date&order=desc",
            self.config.base_url,
            urlencoding::encode(login)
        )
    }

    fn repos_url(&self, login: &str) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page=1",
            self.config.base_url,
            urlencoding::encode(login)
        )
    }

    /// Classify a non-success status into the error taxonomy
    fn classify_status(status: StatusCode, login: &str) -> GitHubError {
        match status {
            StatusCode::NOT_FOUND => GitHubError::NotFound {
                login: login.to_string(),
            },
            StatusCode::FORBIDDEN => GitHubError::RateLimited,
            other => GitHubError::UnexpectedStatus {
                status: other.as_u16(),
            },
        }
    }

    /// Issue one GET and parse the body, never returning partial data
    async fn get_json<T>(
        &self,
        url: &str,
        login: &str,
        accept_override: Option<&'static str>,
    ) -> Result<T, GitHubError>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!(url = %url, "GitHub API request");

        let mut request = self.client.get(url);
        if let Some(accept) = accept_override {
            request = request.header(ACCEPT, accept);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GitHubError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "GitHub API request failed");
            return Err(Self::classify_status(status, login));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GitHubError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GitHubClient for GitHubRestClient {
    async fn fetch_user(&self, login: &str) -> Result<UserProfile, GitHubError> {
        self.get_json(&self.user_url(login), login, None).await
    }

    async fn fetch_author_email(&self, login: &str) -> Result<CommitSearchPayload, GitHubError> {
        self.get_json(&self.commit_search_url(login), login, Some(ACCEPT_COMMIT_SEARCH))
            .await
    }

    async fn fetch_latest_repo(&self, login: &str) -> Result<Vec<RepoPayload>, GitHubError> {
        self.get_json(&self.repos_url(login), login, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GitHubRestClient {
        #[allow(clippy::expect_used)]
        GitHubRestClient::with_defaults().expect("client creation should succeed")
    }

    #[test]
    fn user_url_targets_the_users_endpoint() {
        let client = test_client();
        assert_eq!(
            client.user_url("octocat"),
            "https://api.github.com/users/octocat"
        );
    }

    #[test]
    fn user_url_encodes_the_login() {
        let client = test_client();
        assert_eq!(
            client.user_url("strange login"),
            "https://api.github.com/users/strange%20login"
        );
    }

    #[test]
    fn commit_search_url_requests_one_newest_hit() {
        let client = test_client();
        let url = client.commit_search_url("octocat");
        assert!(url.contains("/search/commits?"));
        assert!(url.contains("q=author:octocat"));
        assert!(url.contains("per_page=1"));
        assert!(url.contains("sort=author-date"));
        assert!(url.contains("order=desc"));
    }

    #[test]
    fn repos_url_requests_one_latest_repo() {
        let client = test_client();
        let url = client.repos_url("octocat");
        assert!(url.contains("/users/octocat/repos?"));
        assert!(url.contains("sort=updated"));
        assert!(url.contains("per_page=1"));
    }

    #[test]
    fn classify_404_as_not_found() {
        let err = GitHubRestClient::classify_status(StatusCode::NOT_FOUND, "ghost");
        assert!(matches!(err, GitHubError::NotFound { login } if login == "ghost"));
    }

    #[test]
    fn classify_403_as_rate_limited() {
        let err = GitHubRestClient::classify_status(StatusCode::FORBIDDEN, "ghost");
        assert!(matches!(err, GitHubError::RateLimited));
    }

    #[test]
    fn classify_other_status_as_unexpected() {
        let err = GitHubRestClient::classify_status(StatusCode::BAD_GATEWAY, "ghost");
        assert!(matches!(err, GitHubError::UnexpectedStatus { status: 502 }));
    }
}
