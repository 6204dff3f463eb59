//! Branches API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::models::{Branch, BranchProtection};
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Look up a branch, `None` when it does not exist
    pub fn find_branch(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> AsyncTask<Result<Option<Branch>, GitHubError>> {
        crate::github::get_branch::find_branch(self.inner.clone(), owner, repo, branch)
    }

    /// Read a branch's protection rule, `None` when unprotected
    pub fn get_branch_protection(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> AsyncTask<Result<Option<BranchProtection>, GitHubError>> {
        crate::github::get_branch_protection::get_branch_protection(
            self.inner.clone(),
            owner,
            repo,
            branch,
        )
    }

    /// Overwrite a branch's protection rule
    pub fn update_branch_protection(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
        contexts: Vec<String>,
    ) -> AsyncTask<Result<BranchProtection, GitHubError>> {
        crate::github::update_branch_protection::update_branch_protection(
            self.inner.clone(),
            owner,
            repo,
            branch,
            contexts,
        )
    }
}
