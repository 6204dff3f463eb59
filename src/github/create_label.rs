//! GitHub issue label creation operation.

use crate::github::{error::GitHubError, models::Label, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Create a new issue label.
pub(crate) fn create_label(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    label: Label,
) -> AsyncTask<Result<Label, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/labels");
        inner
            .post(route, Some(&label))
            .await
            .map_err(GitHubError::from)
    })
}
