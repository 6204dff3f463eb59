//! GitHub branch lookup operation.

use crate::github::error::{GitHubError, is_not_found};
use crate::github::models::Branch;
use crate::github::util::spawn_task;
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Look up a branch by name; a 404 from the API becomes `None`.
pub(crate) fn find_branch(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    branch: impl Into<String>,
) -> AsyncTask<Result<Option<Branch>, GitHubError>> {
    let (owner, repo, branch) = (owner.into(), repo.into(), branch.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/branches/{branch}");
        match inner.get(route, None::<&()>).await {
            Ok(found) => Ok(Some(found)),
            Err(err) if is_not_found(&err) => Ok(None),
            Err(err) => Err(GitHubError::from(err)),
        }
    })
}
