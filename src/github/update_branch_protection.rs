//! GitHub branch protection update operation.

use crate::github::{error::GitHubError, models::BranchProtection, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Overwrite a branch's protection rule wholesale.
///
/// Required checks are non-strict, one approving review is required, stale
/// reviews are kept, admins are not exempt and pushes are unrestricted.
pub(crate) fn update_branch_protection(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    branch: impl Into<String>,
    contexts: Vec<String>,
) -> AsyncTask<Result<BranchProtection, GitHubError>> {
    let (owner, repo, branch) = (owner.into(), repo.into(), branch.into());
    spawn_task(async move {
        let route = format!("/repos/{owner}/{repo}/branches/{branch}/protection");
        let body = serde_json::json!({
            "required_status_checks": {
                "strict": false,
                "contexts": contexts,
            },
            "enforce_admins": null,
            "required_pull_request_reviews": {
                "dismiss_stale_reviews": false,
                "required_approving_review_count": 1,
            },
            "restrictions": null,
        });

        inner
            .put(route, Some(&body))
            .await
            .map_err(GitHubError::from)
    })
}
