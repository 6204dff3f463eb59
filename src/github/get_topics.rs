//! GitHub repository topics retrieval operation.

use crate::github::{error::GitHubError, models::Topics, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Get a repository's current topic set.
pub(crate) fn get_topics(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Topics, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/topics");
        inner
            .get(route, None::<&()>)
            .await
            .map_err(GitHubError::from)
    })
}
