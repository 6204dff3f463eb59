//! GitHub repository topics replacement operation.

use crate::github::{error::GitHubError, models::Topics, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Replace a repository's topic set wholesale.
///
/// The remote state is overwritten, not merged; topics absent from `names`
/// are dropped.
pub(crate) fn replace_topics(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    names: Vec<String>,
) -> AsyncTask<Result<Topics, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/topics");
        let body = Topics { names };
        inner
            .put(route, Some(&body))
            .await
            .map_err(GitHubError::from)
    })
}
