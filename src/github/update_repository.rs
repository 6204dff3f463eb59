//! GitHub repository settings update operation.

use crate::github::{error::GitHubError, models::RepositorySettings, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::Repository};
use std::sync::Arc;

/// Push description/homepage/merge settings to an existing repository.
pub(crate) fn update_repository(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    settings: RepositorySettings,
) -> AsyncTask<Result<Repository, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}");
        inner
            .patch(route, Some(&settings))
            .await
            .map_err(GitHubError::from)
    })
}
