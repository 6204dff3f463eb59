//! Tests for the domain error taxonomy.

use repokit_github::GitHubError;

#[test]
fn test_no_such_repository_for_user() {
    let err = GitHubError::NoSuchRepository {
        username: "domdfcoding".into(),
        repository: "domdf_python_tools".into(),
        org: false,
    };

    assert_eq!(
        err.to_string(),
        "No such repository 'domdf_python_tools' for user 'domdfcoding'."
    );
    assert_eq!(
        err.full_name().as_deref(),
        Some("domdfcoding/domdf_python_tools")
    );
}

#[test]
fn test_no_such_repository_for_org() {
    let err = GitHubError::NoSuchRepository {
        username: "repo-helper".into(),
        repository: "whey".into(),
        org: true,
    };

    assert_eq!(
        err.to_string(),
        "No such repository 'whey' for org 'repo-helper'."
    );
}

#[test]
fn test_error_creating_repository() {
    let err = GitHubError::ErrorCreatingRepository {
        username: "domdfcoding".into(),
        repository: "domdf_python_tools".into(),
        org: false,
    };

    assert_eq!(
        err.to_string(),
        "Could not create repository 'domdf_python_tools' for user 'domdfcoding'."
    );

    let err = GitHubError::ErrorCreatingRepository {
        username: "repo-helper".into(),
        repository: "whey".into(),
        org: true,
    };

    assert_eq!(
        err.to_string(),
        "Could not create repository 'whey' for org 'repo-helper'."
    );
    assert_eq!(err.full_name().as_deref(), Some("repo-helper/whey"));
}

#[test]
fn test_no_such_branch() {
    let err = GitHubError::NoSuchBranch {
        username: "domdfcoding".into(),
        repository: "domdf_python_tools".into(),
        branch: "master".into(),
    };

    assert_eq!(
        err.to_string(),
        "No such branch 'master' for repository 'domdfcoding/domdf_python_tools'."
    );
}

#[test]
fn test_bad_username_carries_both_logins() {
    let err = GitHubError::BadUsername {
        configured: "repo-helper".into(),
        authenticated: "domdfcoding".into(),
    };

    let message = err.to_string();
    assert!(message.contains("repo-helper"));
    assert!(message.contains("domdfcoding"));
    assert!(message.contains("--org"));
}

#[test]
fn test_organization_error_carries_context() {
    let err = GitHubError::OrganizationError {
        organization: "repo-helper".into(),
        login: "domdfcoding".into(),
    };

    let message = err.to_string();
    assert!(message.contains("repo-helper"));
    assert!(message.contains("domdfcoding"));
    assert!(message.contains("not a member"));
}

#[test]
fn test_quota_exhausted_reports_reset_time() {
    let err = GitHubError::QuotaExhausted {
        reset: chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default(),
    };

    assert!(err.to_string().starts_with("No requests available!"));
    assert!(err.to_string().contains("2023"));
}

#[test]
fn test_invalid_secret_names_the_secret() {
    let err = GitHubError::InvalidSecret {
        name: "PYPI_TOKEN".into(),
        reason: "Could not decode token.".into(),
    };

    assert_eq!(
        err.to_string(),
        "Invalid value for secret 'PYPI_TOKEN': Could not decode token."
    );
}

#[test]
fn test_full_name_absent_for_other_kinds() {
    let err = GitHubError::Config("missing file".into());
    assert_eq!(err.full_name(), None);
}
