//! `repokit_github` - manage a GitHub repository's metadata with repokit.
//!
//! This library provides the operations the `repokit-github` CLI performs:
//! creating and updating a repository, synchronising its topics, uploading
//! sealed-box-encrypted Actions secrets, compiling and applying branch
//! protection rules, and upserting the check-status label set. GitHub API
//! access goes through the octocrab crate, one module per operation.

// Module declarations
pub mod checks;
pub mod cli;
pub mod config;
pub mod github;
pub mod interact;
pub mod labels;
pub mod manager;
pub mod runtime;
pub mod secrets;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export the operation surface
pub use checks::compile_required_checks;
pub use config::{CiMatrix, Platform, PlatformCi, ProjectConfig};
pub use manager::{RepoManager, merged_topics};
pub use secrets::{
    SecretFormatError, encrypt_secret, validate_pypi_token, validate_secret,
};
