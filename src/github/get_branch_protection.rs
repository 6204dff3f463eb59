//! GitHub branch protection retrieval operation.

use crate::github::error::{GitHubError, is_not_found};
use crate::github::models::BranchProtection;
use crate::github::util::spawn_task;
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Read a branch's current protection rule; an unprotected branch (404)
/// becomes `None`.
pub(crate) fn get_branch_protection(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    branch: impl Into<String>,
) -> AsyncTask<Result<Option<BranchProtection>, GitHubError>> {
    let (owner, repo, branch) = (owner.into(), repo.into(), branch.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/branches/{branch}/protection");
        match inner.get(route, None::<&()>).await {
            Ok(protection) => Ok(Some(protection)),
            Err(err) if is_not_found(&err) => Ok(None),
            Err(err) => Err(GitHubError::from(err)),
        }
    })
}
