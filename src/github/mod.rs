//! GitHub API operations module
//!
//! Provides the GitHub API operations this tool performs using the octocrab
//! library, one module per REST operation.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

// GitHub API operations - Repositories (internal)
pub(crate) mod create_repository;
pub(crate) mod get_file_contents;
pub(crate) mod get_repository;
pub(crate) mod get_topics;
pub(crate) mod replace_topics;
pub(crate) mod update_repository;

// GitHub API operations - Branches (internal)
pub(crate) mod get_branch;
pub(crate) mod get_branch_protection;
pub(crate) mod update_branch_protection;

// GitHub API operations - Actions secrets (internal)
pub(crate) mod get_public_key;
pub(crate) mod list_secrets;
pub(crate) mod put_secret;

// GitHub API operations - Issue labels (internal)
pub(crate) mod create_label;
pub(crate) mod list_labels;
pub(crate) mod update_label;

// GitHub API operations - Users and quota (internal)
pub(crate) mod get_me;
pub(crate) mod get_org_membership;
pub(crate) mod get_rate_limit;
