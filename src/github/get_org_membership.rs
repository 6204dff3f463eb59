//! GitHub organization membership lookup operation.

use crate::github::error::{GitHubError, is_not_found};
use crate::github::models::OrgMembership;
use crate::github::util::spawn_task;
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Get the authenticated user's membership in the given organization.
///
/// Returns `None` when the organization does not exist or the user is not a
/// member; GitHub reports both as 404.
pub(crate) fn get_org_membership(
    inner: Arc<Octocrab>,
    org: impl Into<String>,
) -> AsyncTask<Result<Option<OrgMembership>, GitHubError>> {
    let org = org.into();
    spawn_task(async move {
        let route = format!("/user/memberships/orgs/{org}");
        match inner.get(route, None::<&()>).await {
            Ok(membership) => Ok(Some(membership)),
            Err(err) if is_not_found(&err) => Ok(None),
            Err(err) => Err(GitHubError::from(err)),
        }
    })
}
