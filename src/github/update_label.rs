//! GitHub issue label update operation.

use crate::github::{error::GitHubError, models::Label, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Update an existing issue label's colour and description.
///
/// Label names may contain spaces and punctuation, so the route segment is
/// percent-encoded.
pub(crate) fn update_label(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    label: Label,
) -> AsyncTask<Result<Label, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!(
            "/repos/{owner}/{repo}/labels/{}",
            urlencoding::encode(&label.name)
        );
        let body = serde_json::json!({
            "color": label.color,
            "description": label.description,
        });

        inner
            .patch(route, Some(&body))
            .await
            .map_err(GitHubError::from)
    })
}
