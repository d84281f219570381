//! GitHub client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the GitHub REST client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// GitHub API base URL (default: <https://api.github.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "gh-lookup/0.1".to_string()
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl GitHubConfig {
    /// Create a configuration for testing (short timeout)
    #[must_use]
    pub fn for_testing(base_url: String) -> Self {
        Self {
            base_url,
            timeout_secs: 5,
            ..Self::default()
        }
    }
}
