//! GitHub repository lookup operation.

use crate::github::error::{GitHubError, is_not_found};
use crate::github::util::spawn_task;
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::Repository};
use std::sync::Arc;

/// Look up a repository by owner and name.
///
/// Absence is an expected state: a 404 from the API becomes `None` here, so
/// callers raise the domain error once, centrally.
pub(crate) fn find_repository(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Option<Repository>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        match inner.repos(&owner, &repo).get().await {
            Ok(repository) => Ok(Some(repository)),
            Err(err) if is_not_found(&err) => Ok(None),
            Err(err) => Err(GitHubError::from(err)),
        }
    })
}
