//! Users API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::models::OrgMembership;
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Get the authenticated user
    #[must_use]
    pub fn get_me(&self) -> AsyncTask<Result<octocrab::models::Author, GitHubError>> {
        crate::github::get_me::get_me(self.inner.clone())
    }

    /// Get the authenticated user's membership in an organization,
    /// `None` when the organization is missing or the user is not a member
    pub fn get_org_membership(
        &self,
        org: impl Into<String>,
    ) -> AsyncTask<Result<Option<OrgMembership>, GitHubError>> {
        crate::github::get_org_membership::get_org_membership(self.inner.clone(), org)
    }
}
