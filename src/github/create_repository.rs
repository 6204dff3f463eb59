//! GitHub repository creation operation.

use crate::github::{error::GitHubError, models::RepositorySettings, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::Repository};
use std::sync::Arc;

/// Create a repository for the authenticated user, or for an organization
/// when `org` is given.
pub(crate) fn create_repository(
    inner: Arc<Octocrab>,
    org: Option<String>,
    name: impl Into<String>,
    settings: RepositorySettings,
) -> AsyncTask<Result<Repository, GitHubError>> {
    let name = name.into();
    spawn_task(async move {
        let route = match &org {
            Some(org) => format!("/orgs/{org}/repos"),
            None => "/user/repos".to_string(),
        };

        let mut body = serde_json::json!({
            "name": name,
            "description": settings.description,
            "allow_merge_commit": settings.allow_merge_commit,
        });

        if let Some(homepage) = settings.homepage {
            body["homepage"] = serde_json::json!(homepage);
        }

        inner
            .post(route, Some(&body))
            .await
            .map_err(GitHubError::from)
    })
}
