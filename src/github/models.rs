//! Typed records for GitHub REST responses octocrab does not model.
//!
//! Raw response payloads never cross the API boundary; each endpoint this
//! tool touches deserialises into one of these fixed shapes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Listing of a repository's Actions secrets (names only; GitHub never
/// returns secret values).
#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySecrets {
    pub total_count: u64,
    pub secrets: Vec<RepositorySecret>,
}

impl RepositorySecrets {
    /// The names of the existing secrets.
    #[must_use]
    pub fn names(&self) -> BTreeSet<String> {
        self.secrets.iter().map(|s| s.name.clone()).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySecret {
    pub name: String,
}

/// The per-repository key Actions secrets are encrypted against.
///
/// Ephemeral from this tool's perspective: fetched immediately before every
/// secret write and never cached across runs.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretsPublicKey {
    pub key_id: String,
    pub key: String,
}

/// A branch as returned by the branches endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    pub name: String,
    #[serde(default)]
    pub protected: bool,
}

/// A branch protection rule.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchProtection {
    pub required_status_checks: Option<RequiredStatusChecks>,
    pub required_pull_request_reviews: Option<RequiredPullRequestReviews>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequiredStatusChecks {
    pub strict: bool,
    pub contexts: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequiredPullRequestReviews {
    #[serde(default)]
    pub dismiss_stale_reviews: bool,
    #[serde(default)]
    pub required_approving_review_count: u32,
}

impl BranchProtection {
    /// Whether this rule carries the full contract this tool writes: the
    /// given status checks (as a set, non-strict) and a one-review,
    /// keep-stale-reviews pull request policy.
    #[must_use]
    pub fn satisfies(&self, contexts: &[String]) -> bool {
        let checks_ok = self.required_status_checks.as_ref().is_some_and(|c| {
            let want: BTreeSet<&str> = contexts.iter().map(String::as_str).collect();
            let have: BTreeSet<&str> = c.contexts.iter().map(String::as_str).collect();
            !c.strict && want == have
        });

        let reviews_ok = self
            .required_pull_request_reviews
            .as_ref()
            .is_some_and(|r| !r.dismiss_stale_reviews && r.required_approving_review_count == 1);

        checks_ok && reviews_ok
    }
}

/// An issue label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A repository's topic set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topics {
    pub names: Vec<String>,
}

/// Response of the rate-limit endpoint, reduced to the core resource.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitOverview {
    pub resources: RateLimitResources,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitResources {
    pub core: Rate,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Rate {
    pub limit: u64,
    pub remaining: u64,
    /// Epoch seconds at which the quota window resets.
    pub reset: i64,
}

/// Settings applied when creating or editing a repository.
#[derive(Debug, Clone, Serialize)]
pub struct RepositorySettings {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    pub allow_merge_commit: bool,
}

/// An `/user/memberships/orgs/{org}` response, reduced to what the owner
/// resolution check needs.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgMembership {
    pub state: String,
    pub organization: OrgSummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrgSummary {
    pub login: String,
}
