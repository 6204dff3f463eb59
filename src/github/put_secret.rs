//! GitHub Actions secret upload operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Upload an encrypted secret value, returning the raw response status.
///
/// The caller decides how to treat non-success statuses; secret uploads are
/// partial-failure tolerant rather than fail-fast.
pub(crate) fn put_secret(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    name: impl Into<String>,
    key_id: impl Into<String>,
    encrypted_value: impl Into<String>,
) -> AsyncTask<Result<u16, GitHubError>> {
    let (owner, repo, name) = (owner.into(), repo.into(), name.into());
    let (key_id, encrypted_value) = (key_id.into(), encrypted_value.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/actions/secrets/{name}");
        let body = serde_json::json!({
            "encrypted_value": encrypted_value,
            "key_id": key_id,
        });

        let response = inner
            ._put(route, Some(&body))
            .await
            .map_err(GitHubError::from)?;

        Ok(response.status().as_u16())
    })
}
