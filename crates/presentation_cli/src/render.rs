//! Report rendering
//!
//! Pure functions that assemble the terminal report as strings; the session
//! controller decides what reaches stdout. Colors come from the `colored`
//! crate, which honors `NO_COLOR` and non-tty output.

use colored::Colorize;
use integration_github::{EmailLookup, LatestRepo, LookupReport, UserProfile};

use crate::datetime::format_timestamp;

/// Width of the banner and separator rules
const RULE_WIDTH: usize = 60;

/// Longest bio rendered before truncation
const BIO_LIMIT: usize = 80;

/// Longest repository description rendered before truncation
const DESCRIPTION_LIMIT: usize = 60;

/// Placeholder for optional profile fields the account left blank
const NOT_PROVIDED: &str = "Not provided";

/// The banner printed once per session
pub fn header() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "\n{}\n{}\n{}\n\n{}\n",
        rule.blue().bold(),
        "                   GitHub Profile Lookup".blue().bold(),
        rule.blue().bold(),
        "Search for public GitHub account information".dimmed(),
    )
}

/// A dimmed horizontal rule
pub fn separator() -> String {
    "-".repeat(RULE_WIDTH).dimmed().to_string()
}

/// The parting message for every way out of the interactive loop
pub fn goodbye() -> String {
    format!("\n{}\n", "Goodbye!".cyan())
}

/// The progress line shown when a lookup starts
pub fn searching(login: &str) -> String {
    format!("Searching for '{login}'...").yellow().to_string()
}

/// A labeled error line
pub fn error_line(message: &str) -> String {
    format!("Error: {message}").red().to_string()
}

/// The reminder shown when the supplied name is blank
pub fn username_required() -> String {
    "Username required".red().to_string()
}

/// Render the full report in fixed section order
///
/// Header banners aside, the order is: found banner, PROFILE, STATISTICS,
/// LATEST REPOSITORY (only when one was found), separator, profile URL.
pub fn report(report: &LookupReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", "Profile found".green().bold()));
    out.push_str(&profile_block(&report.profile, &report.email));
    out.push('\n');
    out.push_str(&statistics_block(&report.profile));
    out.push('\n');
    if let Some(repo) = report.repo.repo() {
        out.push_str(&repository_block(repo));
        out.push('\n');
    }
    out.push_str(&separator());
    out.push('\n');
    out.push_str(
        &format!("Profile: {}", report.profile.profile_url())
            .dimmed()
            .to_string(),
    );
    out.push('\n');
    out
}

/// One labeled line: two-space indent, colon-terminated cyan label
fn line(label: &str, value: &str) -> String {
    format!("  {} {value}\n", format!("{label}:").cyan())
}

fn profile_block(profile: &UserProfile, email: &EmailLookup) -> String {
    let mut out = format!("{}\n", "PROFILE".bold());
    out.push_str(&line("Username", &profile.login));
    out.push_str(&line(
        "Full name",
        profile.name.as_deref().unwrap_or(NOT_PROVIDED),
    ));
    out.push_str(&line("Email", &email.to_string()));
    out.push_str(&line(
        "Bio",
        &truncate(profile.bio.as_deref().unwrap_or(NOT_PROVIDED), BIO_LIMIT),
    ));
    out.push_str(&line(
        "Location",
        profile.location.as_deref().unwrap_or(NOT_PROVIDED),
    ));
    out.push_str(&line(
        "Company",
        profile.company.as_deref().unwrap_or(NOT_PROVIDED),
    ));
    out
}

fn statistics_block(profile: &UserProfile) -> String {
    let mut out = format!("{}\n", "STATISTICS".bold());
    out.push_str(&line("Public repos", &profile.public_repos.to_string()));
    out.push_str(&line("Followers", &profile.followers.to_string()));
    out.push_str(&line("Following", &profile.following.to_string()));
    out.push_str(&line(
        "Member since",
        &format_timestamp(profile.created_at.as_deref()),
    ));
    out
}

fn repository_block(repo: &LatestRepo) -> String {
    let mut out = format!("{}\n", "LATEST REPOSITORY".bold());
    out.push_str(&line("Name", &repo.name));
    out.push_str(&line(
        "Description",
        &truncate(&repo.description, DESCRIPTION_LIMIT),
    ));
    out.push_str(&line("Language", &repo.language));
    out.push_str(&line("Stars", &repo.stars.to_string()));
    out.push_str(&line(
        "Last updated",
        &format_timestamp(repo.updated_at.as_deref()),
    ));
    out
}

/// Shorten to `limit` characters with a trailing ellipsis
///
/// Counts characters rather than bytes so multibyte text never splits.
/// Display-only; the stored value is untouched.
fn truncate(value: &str, limit: usize) -> String {
    if value.chars().count() > limit {
        let kept: String = value.chars().take(limit).collect();
        format!("{kept}...")
    } else {
        value.to_string()
    }
}
