#![forbid(unsafe_code)]
//! GitHub REST API integration
//!
//! Queries the public GitHub API for an account's profile, most recent
//! commit-author email, and most recently updated repository.
//!
//! # Architecture
//!
//! [`GitHubRestClient`] implements the [`GitHubClient`] trait over one
//! preconfigured HTTP client. [`GitHubLookup`] drives the three requests of
//! a lookup sequentially in fixed order and applies the degradation policy:
//! only a profile failure fails the lookup, while the email and repository
//! fetches degrade to in-band absence values.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_github::{GitHubConfig, GitHubLookup, GitHubRestClient};
//!
//! let client = GitHubRestClient::new(GitHubConfig::default())?;
//! let lookup = GitHubLookup::new(client);
//! let report = lookup.run("octocat").await?;
//! println!("{} ({})", report.profile.login, report.email);
//! ```

mod client;
mod config;
mod error;
mod models;
mod urlencoding;

pub use client::{GitHubClient, GitHubRestClient};
pub use config::GitHubConfig;
pub use error::GitHubError;
pub use models::{
    CommitSearchPayload, EmailLookup, LatestRepo, LookupReport, RepoLookup, RepoPayload,
    UserProfile,
};

use tracing::warn;

/// Runs one lookup: profile, then email, then latest repository
#[derive(Debug)]
pub struct GitHubLookup<C> {
    client: C,
}

impl<C: GitHubClient> GitHubLookup<C> {
    /// Wrap a client for running lookups
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Run a full lookup for `login`
    ///
    /// The three requests are issued sequentially, never in parallel. Email
    /// and repository failures degrade to [`EmailLookup::NotAvailable`] and
    /// [`RepoLookup::Unavailable`] instead of failing the lookup.
    ///
    /// # Errors
    ///
    /// Returns the profile fetch's [`GitHubError`]; no further request is
    /// issued after a failed profile fetch.
    pub async fn run(&self, login: &str) -> Result<LookupReport, GitHubError> {
        let profile = self.client.fetch_user(login).await?;

        let email = match self.client.fetch_author_email(login).await {
            Ok(payload) => EmailLookup::from_search(&payload),
            Err(e) => {
                warn!(login = %login, error = %e, "email search failed, continuing without");
                EmailLookup::NotAvailable
            },
        };

        let repo = match self.client.fetch_latest_repo(login).await {
            Ok(repos) => RepoLookup::from_list(repos),
            Err(e) => {
                warn!(login = %login, error = %e, "repository fetch failed, continuing without");
                RepoLookup::Unavailable
            },
        };

        Ok(LookupReport {
            profile,
            email,
            repo,
        })
    }
}
