//! GitHub rate limit query operation.

use crate::github::{error::GitHubError, models::RateLimitOverview, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Get the current API rate limit for the authenticated user.
pub(crate) fn get_rate_limit(
    inner: Arc<Octocrab>,
) -> AsyncTask<Result<RateLimitOverview, GitHubError>> {
    spawn_task(async move {
        inner
            .get("/rate_limit", None::<&()>)
            .await
            .map_err(GitHubError::from)
    })
}
