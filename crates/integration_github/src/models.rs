//! GitHub API data models
//!
//! Payload structs mirror the wire format with a default for every optional
//! field, so a sparse response never fails extraction. The report types
//! ([`EmailLookup`], [`RepoLookup`]) keep "empty but successful" distinct
//! from "lookup failed".

use std::fmt;

use serde::Deserialize;

/// A GitHub account profile from `/users/{login}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    /// Account login, the only field GitHub always provides
    pub login: String,

    /// Display name, if the account set one
    #[serde(default)]
    pub name: Option<String>,

    /// Free-form biography text
    #[serde(default)]
    pub bio: Option<String>,

    /// Self-reported location
    #[serde(default)]
    pub location: Option<String>,

    /// Self-reported company or organization
    #[serde(default)]
    pub company: Option<String>,

    /// Number of public repositories
    #[serde(default)]
    pub public_repos: u64,

    /// Follower count
    #[serde(default)]
    pub followers: u64,

    /// Following count
    #[serde(default)]
    pub following: u64,

    /// Account creation timestamp (ISO-8601)
    #[serde(default)]
    pub created_at: Option<String>,
}

impl UserProfile {
    /// Public profile page for this account
    #[must_use]
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.login)
    }
}

/// Response from `/search/commits`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitSearchPayload {
    /// Matched commits, most recent first
    #[serde(default)]
    pub items: Vec<CommitSearchItem>,
}

/// A single commit-search hit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitSearchItem {
    /// The commit carried by this hit
    #[serde(default)]
    pub commit: CommitDetail,
}

/// Commit metadata within a search hit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitDetail {
    /// Author identity recorded on the commit
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

/// Commit author identity
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitAuthor {
    /// Email address recorded on the commit
    #[serde(default)]
    pub email: Option<String>,
}

/// Outcome of the commit-author email search
///
/// "No search hit" and "lookup failed" render the same way but stay
/// distinct variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailLookup {
    /// An address was discovered on the most recent authored commit
    Found(String),
    /// The search succeeded but matched no commits
    NotFound,
    /// The search failed, or the matched commit carried no address
    NotAvailable,
}

impl EmailLookup {
    /// Extract the email outcome from a successful search response
    #[must_use]
    pub fn from_search(payload: &CommitSearchPayload) -> Self {
        match payload.items.first() {
            None => Self::NotFound,
            Some(item) => item
                .commit
                .author
                .as_ref()
                .and_then(|author| author.email.clone())
                .map_or(Self::NotAvailable, Self::Found),
        }
    }
}

impl fmt::Display for EmailLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(email) => write!(f, "{email}"),
            Self::NotFound => write!(f, "Not found"),
            Self::NotAvailable => write!(f, "Not available"),
        }
    }
}

/// A repository entry from `/users/{login}/repos`
#[derive(Debug, Clone, Deserialize)]
pub struct RepoPayload {
    /// Repository name
    #[serde(default)]
    pub name: Option<String>,

    /// Repository description
    #[serde(default)]
    pub description: Option<String>,

    /// Last update timestamp (ISO-8601)
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Primary language GitHub detected
    #[serde(default)]
    pub language: Option<String>,

    /// Star count
    #[serde(default)]
    pub stargazers_count: u64,
}

/// The most recently updated repository, with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestRepo {
    /// Repository name, "N/A" when the API omitted it
    pub name: String,
    /// Description, "No description" when absent or blank
    pub description: String,
    /// Last update timestamp, `None` when absent or blank
    pub updated_at: Option<String>,
    /// Primary language, "N/A" when GitHub detected none
    pub language: String,
    /// Star count
    pub stars: u64,
}

impl From<RepoPayload> for LatestRepo {
    fn from(payload: RepoPayload) -> Self {
        Self {
            name: payload.name.unwrap_or_else(|| "N/A".to_string()),
            description: payload
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "No description".to_string()),
            updated_at: payload.updated_at.filter(|t| !t.is_empty()),
            language: payload.language.unwrap_or_else(|| "N/A".to_string()),
            stars: payload.stargazers_count,
        }
    }
}

/// Outcome of the latest-repository fetch
///
/// The two absence variants render identically (the section is omitted) but
/// stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoLookup {
    /// The account's most recently updated repository
    Found(LatestRepo),
    /// The account has no repositories; the list response was empty
    NoRepositories,
    /// The fetch failed
    Unavailable,
}

impl RepoLookup {
    /// Extract the repository outcome from a successful list response
    #[must_use]
    pub fn from_list(repos: Vec<RepoPayload>) -> Self {
        repos
            .into_iter()
            .next()
            .map_or(Self::NoRepositories, |payload| Self::Found(payload.into()))
    }

    /// The repository, when one was found
    #[must_use]
    pub const fn repo(&self) -> Option<&LatestRepo> {
        match self {
            Self::Found(repo) => Some(repo),
            Self::NoRepositories | Self::Unavailable => None,
        }
    }
}

/// Everything one lookup gathered, ready to render
#[derive(Debug, Clone)]
pub struct LookupReport {
    /// The account profile
    pub profile: UserProfile,
    /// Email search outcome
    pub email: EmailLookup,
    /// Latest repository outcome
    pub repo: RepoLookup,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_profile() -> UserProfile {
        serde_json::from_value(serde_json::json!({ "login": "ghost" }))
            .expect("login alone should deserialize")
    }

    #[test]
    fn profile_defaults_for_missing_fields() {
        let profile = sparse_profile();
        assert_eq!(profile.login, "ghost");
        assert_eq!(profile.name, None);
        assert_eq!(profile.bio, None);
        assert_eq!(profile.public_repos, 0);
        assert_eq!(profile.followers, 0);
        assert_eq!(profile.created_at, None);
    }

    #[test]
    fn profile_tolerates_explicit_nulls() {
        let profile: UserProfile = serde_json::from_value(serde_json::json!({
            "login": "ghost",
            "name": null,
            "bio": null,
            "company": null
        }))
        .expect("nulls should deserialize");
        assert_eq!(profile.name, None);
        assert_eq!(profile.company, None);
    }

    #[test]
    fn profile_url_uses_the_login() {
        assert_eq!(sparse_profile().profile_url(), "https://github.com/ghost");
    }

    #[test]
    fn email_from_empty_search_is_not_found() {
        let payload = CommitSearchPayload::default();
        assert_eq!(EmailLookup::from_search(&payload), EmailLookup::NotFound);
    }

    #[test]
    fn email_from_hit_with_address() {
        let payload: CommitSearchPayload = serde_json::from_value(serde_json::json!({
            "items": [ { "commit": { "author": { "email": "dev@example.com" } } } ]
        }))
        .expect("should deserialize");
        assert_eq!(
            EmailLookup::from_search(&payload),
            EmailLookup::Found("dev@example.com".to_string())
        );
    }

    #[test]
    fn email_from_hit_without_address_is_not_available() {
        let payload: CommitSearchPayload = serde_json::from_value(serde_json::json!({
            "items": [ { "commit": { "author": { "name": "Ghost" } } } ]
        }))
        .expect("should deserialize");
        assert_eq!(EmailLookup::from_search(&payload), EmailLookup::NotAvailable);
    }

    #[test]
    fn email_from_hit_without_author_is_not_available() {
        let payload: CommitSearchPayload = serde_json::from_value(serde_json::json!({
            "items": [ { "commit": {} } ]
        }))
        .expect("should deserialize");
        assert_eq!(EmailLookup::from_search(&payload), EmailLookup::NotAvailable);
    }

    #[test]
    fn email_display_strings() {
        assert_eq!(
            EmailLookup::Found("dev@example.com".to_string()).to_string(),
            "dev@example.com"
        );
        assert_eq!(EmailLookup::NotFound.to_string(), "Not found");
        assert_eq!(EmailLookup::NotAvailable.to_string(), "Not available");
    }

    #[test]
    fn latest_repo_applies_the_default_table() {
        let repo: LatestRepo = serde_json::from_value::<RepoPayload>(serde_json::json!({}))
            .expect("empty object should deserialize")
            .into();
        assert_eq!(repo.name, "N/A");
        assert_eq!(repo.description, "No description");
        assert_eq!(repo.language, "N/A");
        assert_eq!(repo.updated_at, None);
        assert_eq!(repo.stars, 0);
    }

    #[test]
    fn latest_repo_blank_strings_count_as_absent() {
        let repo: LatestRepo = LatestRepo::from(RepoPayload {
            name: Some("tools".to_string()),
            description: Some(String::new()),
            updated_at: Some(String::new()),
            language: None,
            stargazers_count: 3,
        });
        assert_eq!(repo.description, "No description");
        assert_eq!(repo.updated_at, None);
        assert_eq!(repo.stars, 3);
    }

    #[test]
    fn repo_lookup_empty_list_is_no_repositories() {
        assert_eq!(RepoLookup::from_list(vec![]), RepoLookup::NoRepositories);
    }

    #[test]
    fn repo_lookup_takes_the_first_entry() {
        let repos: Vec<RepoPayload> = serde_json::from_value(serde_json::json!([
            { "name": "newest", "stargazers_count": 7 },
            { "name": "older" }
        ]))
        .expect("should deserialize");

        let lookup = RepoLookup::from_list(repos);
        let repo = lookup.repo().expect("should hold a repository");
        assert_eq!(repo.name, "newest");
        assert_eq!(repo.stars, 7);
    }

    #[test]
    fn absence_variants_stay_distinct() {
        assert_ne!(RepoLookup::NoRepositories, RepoLookup::Unavailable);
        assert_eq!(RepoLookup::NoRepositories.repo(), None);
        assert_eq!(RepoLookup::Unavailable.repo(), None);
    }
}
