//! GitHub issue labels listing operation.

use crate::github::{error::GitHubError, models::Label, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// List a repository's issue labels.
pub(crate) fn list_labels(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Vec<Label>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/labels?per_page=100");
        inner
            .get(route, None::<&()>)
            .await
            .map_err(GitHubError::from)
    })
}
