//! Rate limit API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::models::RateLimitOverview;
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Get the current API rate limit
    #[must_use]
    pub fn rate_limit(&self) -> AsyncTask<Result<RateLimitOverview, GitHubError>> {
        crate::github::get_rate_limit::get_rate_limit(self.inner.clone())
    }
}
