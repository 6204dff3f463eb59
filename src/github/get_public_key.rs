//! GitHub Actions secrets public key retrieval operation.

use crate::github::{error::GitHubError, models::SecretsPublicKey, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Fetch the repository's current secrets public key.
///
/// Must be refetched before every secret write; the key may rotate between
/// runs.
pub(crate) fn get_public_key(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<SecretsPublicKey, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/actions/secrets/public-key");
        inner
            .get(route, None::<&()>)
            .await
            .map_err(GitHubError::from)
    })
}
