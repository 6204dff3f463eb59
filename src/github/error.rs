//! GitHub API and domain error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Error types for GitHub operations.
///
/// Every fatal kind carries enough structured context (owner, repository,
/// branch or organization name) to be matched programmatically; the CLI maps
/// each kind to a headed message without string matching.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error
    #[error("GitHub API error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// A spawned API task was dropped before completing
    #[error("API task channel closed: {0}")]
    Task(#[from] tokio::sync::oneshot::error::RecvError),

    /// The configured username does not match the authenticated user
    #[error(
        "The username configured in 'repokit.yml' ({configured}) differs from that of the \
         authenticated user ({authenticated})!\n\
         If {configured} is an organisation you should use the --org flag."
    )]
    BadUsername {
        configured: String,
        authenticated: String,
    },

    /// The configured organization is missing or the user is not a member
    #[error(
        "Either the organisation configured in 'repokit.yml' ({organization}) does not exist \
         or the authenticated user ({login}) is not a member!"
    )]
    OrganizationError { organization: String, login: String },

    /// A repository of the configured name already exists
    #[error(
        "Could not create repository '{}' for {} '{}'.",
        .repository,
        if *.org { "org" } else { "user" },
        .username
    )]
    ErrorCreatingRepository {
        username: String,
        repository: String,
        org: bool,
    },

    /// The named repository does not exist for the resolved owner
    #[error(
        "No such repository '{}' for {} '{}'.",
        .repository,
        if *.org { "org" } else { "user" },
        .username
    )]
    NoSuchRepository {
        username: String,
        repository: String,
        org: bool,
    },

    /// The named branch does not exist
    #[error("No such branch '{branch}' for repository '{username}/{repository}'.")]
    NoSuchBranch {
        username: String,
        repository: String,
        branch: String,
    },

    /// A secret value failed validation before upload
    #[error("Invalid value for secret '{name}': {reason}")]
    InvalidSecret { name: String, reason: String },

    /// The repository's Actions public key could not be used
    #[error("Invalid repository public key: {0}")]
    InvalidPublicKey(String),

    /// No API requests remaining at the start of an operation
    #[error("No requests available! Resets at {reset}")]
    QuotaExhausted { reset: DateTime<Utc> },

    /// Configuration could not be loaded or is unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// A terminal prompt failed or was interrupted
    #[error("Terminal interaction failed: {0}")]
    Interaction(String),

    /// Filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

/// Convenience result alias for GitHub operations.
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// The `user/name` form of the repository an error refers to, when the
    /// error carries one.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        match self {
            GitHubError::ErrorCreatingRepository {
                username,
                repository,
                ..
            }
            | GitHubError::NoSuchRepository {
                username,
                repository,
                ..
            }
            | GitHubError::NoSuchBranch {
                username,
                repository,
                ..
            } => Some(format!("{username}/{repository}")),
            _ => None,
        }
    }
}

/// Whether an octocrab error is a GitHub 404 response.
pub(crate) fn is_not_found(err: &octocrab::Error) -> bool {
    matches!(err, octocrab::Error::GitHub { source, .. } if source.status_code == 404)
}

/// Whether an octocrab error is a GitHub 422 (validation/conflict) response.
pub(crate) fn is_unprocessable(err: &octocrab::Error) -> bool {
    matches!(err, octocrab::Error::GitHub { source, .. } if source.status_code == 422)
}
