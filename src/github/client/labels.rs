//! Issue labels API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::models::Label;
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// List the repository's issue labels
    pub fn list_labels(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Vec<Label>, GitHubError>> {
        crate::github::list_labels::list_labels(self.inner.clone(), owner, repo)
    }

    /// Create a new issue label
    pub fn create_label(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        label: Label,
    ) -> AsyncTask<Result<Label, GitHubError>> {
        crate::github::create_label::create_label(self.inner.clone(), owner, repo, label)
    }

    /// Update an existing label's colour and description
    pub fn update_label(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        label: Label,
    ) -> AsyncTask<Result<Label, GitHubError>> {
        crate::github::update_label::update_label(self.inner.clone(), owner, repo, label)
    }
}
