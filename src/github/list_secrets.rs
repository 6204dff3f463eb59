//! GitHub Actions secrets listing operation.

use crate::github::{error::GitHubError, models::RepositorySecrets, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// List a repository's Actions secrets.
///
/// Existence is known by name only; GitHub never returns decrypted values.
pub(crate) fn list_secrets(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<RepositorySecrets, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/actions/secrets");
        inner
            .get(route, None::<&()>)
            .await
            .map_err(GitHubError::from)
    })
}
