//! CLI structure, command dispatch and top-level error reporting.

use crate::github::error::{GitHubError, GitHubResult};
use crate::manager::RepoManager;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::collections::BTreeMap;

/// Manage a GitHub repository's metadata from its `repokit.yml`.
#[derive(Parser)]
#[command(name = "repokit-github")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Synchronise a GitHub repository's metadata with repokit.yml", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// The token to authenticate with the GitHub API
    #[arg(short = 't', long, env = "GITHUB_TOKEN", global = true)]
    pub token: Option<String>,

    /// The repository belongs to the organisation configured as 'username'
    #[arg(long, global = true)]
    pub org: bool,

    /// Show information on the GitHub API rate limit
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Force coloured output
    #[arg(long, global = true, overrides_with = "no_colour")]
    pub colour: bool,

    /// Disable coloured output
    #[arg(long = "no-colour", global = true)]
    pub no_colour: bool,

    /// Operate on USER/NAME, fetching its repokit.yml from GitHub instead
    /// of the working directory
    #[arg(short = 'r', long, global = true, value_name = "USER/NAME")]
    pub repository: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new GitHub repository for this project
    New,

    /// Update the GitHub repository for this project
    Update,

    /// Set or update the secrets of the GitHub repository for this project
    Secrets {
        /// Overwrite existing secrets without asking
        #[arg(short = 'o', long, overrides_with = "no_overwrite")]
        overwrite: bool,

        /// Skip secrets which already exist
        #[arg(long)]
        no_overwrite: bool,

        /// Value for the PYPI_TOKEN secret
        #[arg(long, value_name = "TOKEN")]
        pypi_token: Option<String>,

        /// Value for the ANACONDA_TOKEN secret
        #[arg(long, value_name = "TOKEN")]
        anaconda_token: Option<String>,
    },

    /// Set or update the branch protection for the given branch
    #[command(name = "protect-branch")]
    ProtectBranch {
        /// The branch to update protection for
        branch: String,
    },

    /// Create labels for this repository
    Labels,
}

impl Cli {
    /// Run the selected subcommand, returning the process exit code.
    pub async fn execute(self) -> GitHubResult<i32> {
        if let Some(colour) = self.colour_preference() {
            colored::control::set_override(colour);
        }

        let token = self.token.clone().ok_or_else(|| {
            GitHubError::Config(
                "a GitHub token is required (pass --token or set GITHUB_TOKEN)".to_string(),
            )
        })?;

        let manager = match self.repository.as_deref() {
            Some(slug) => {
                let (username, repo_name) = slug.split_once('/').ok_or_else(|| {
                    GitHubError::Config(format!("'{slug}' is not of the form USER/NAME"))
                })?;
                RepoManager::isolated(token, username, repo_name, self.verbose).await?
            }
            None => RepoManager::new(token, std::env::current_dir()?, self.verbose)?,
        };

        match self.command {
            Commands::New => manager.create(self.org).await,
            Commands::Update => manager.update(self.org).await,
            Commands::Secrets {
                overwrite,
                no_overwrite,
                pypi_token,
                anaconda_token,
            } => {
                let overwrite = if overwrite {
                    Some(true)
                } else if no_overwrite {
                    Some(false)
                } else {
                    None
                };

                let mut values = BTreeMap::new();
                if let Some(value) = pypi_token {
                    values.insert("PYPI_TOKEN".to_string(), value);
                }
                if let Some(value) = anaconda_token {
                    values.insert("ANACONDA_TOKEN".to_string(), value);
                }

                manager.secrets(self.org, overwrite, &values).await
            }
            Commands::ProtectBranch { branch } => manager.protect_branch(&branch, self.org).await,
            Commands::Labels => manager.create_labels(self.org).await,
        }
    }

    fn colour_preference(&self) -> Option<bool> {
        if self.no_colour {
            Some(false)
        } else if self.colour {
            Some(true)
        } else {
            None
        }
    }
}

/// Map a fatal error to its headed message on stderr.
///
/// Each error kind gets its own heading, matched structurally rather than
/// by message text.
pub fn report_error(err: &GitHubError) {
    let heading = match err {
        GitHubError::ErrorCreatingRepository { .. } => "Error Creating Repository:",
        GitHubError::NoSuchRepository { .. } => "No Such Repository:",
        GitHubError::NoSuchBranch { .. } => "No Such Branch:",
        GitHubError::BadUsername { .. } => "Bad Username:",
        GitHubError::OrganizationError { .. } => "Organization Error:",
        _ => "Error:",
    };

    eprintln!("{} {err}", heading.red().bold());
}
