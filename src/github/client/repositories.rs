//! Repositories API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::models::{RepositorySettings, Topics};
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Look up a repository, `None` when it does not exist
    pub fn find_repository(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Option<octocrab::models::Repository>, GitHubError>> {
        crate::github::get_repository::find_repository(self.inner.clone(), owner, repo)
    }

    /// Create a repository for the user, or for `org` when given
    #[must_use]
    pub fn create_repository(
        &self,
        org: Option<String>,
        name: impl Into<String>,
        settings: RepositorySettings,
    ) -> AsyncTask<Result<octocrab::models::Repository, GitHubError>> {
        crate::github::create_repository::create_repository(self.inner.clone(), org, name, settings)
    }

    /// Push settings to an existing repository
    pub fn update_repository(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        settings: RepositorySettings,
    ) -> AsyncTask<Result<octocrab::models::Repository, GitHubError>> {
        crate::github::update_repository::update_repository(self.inner.clone(), owner, repo, settings)
    }

    /// Get the repository's topic set
    pub fn get_topics(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Topics, GitHubError>> {
        crate::github::get_topics::get_topics(self.inner.clone(), owner, repo)
    }

    /// Replace the repository's topic set wholesale
    pub fn replace_topics(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        names: Vec<String>,
    ) -> AsyncTask<Result<Topics, GitHubError>> {
        crate::github::replace_topics::replace_topics(self.inner.clone(), owner, repo, names)
    }

    /// Retrieve file contents from the default branch
    pub fn get_file_contents(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
    ) -> AsyncTask<Result<Vec<octocrab::models::repos::Content>, GitHubError>> {
        crate::github::get_file_contents::get_file_contents(self.inner.clone(), owner, repo, path)
    }
}
