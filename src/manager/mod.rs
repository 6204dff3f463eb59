//! The repository manager: one short linear protocol per operation.
//!
//! Each operation resolves the acting owner fresh, performs its
//! read-then-write API sequence inside a rate-limit accounting bracket, and
//! returns the integer the process exits with.

mod remote;

use crate::checks::compile_required_checks;
use crate::config::{CONFIG_FILE_NAME, CiMatrix, ProjectConfig};
use crate::github::error::{GitHubError, GitHubResult, is_unprocessable};
use crate::github::{GitHubClient, models::RepositorySettings};
use crate::interact::{Interaction, Terminal};
use crate::labels::CHECK_STATUS_LABELS;
use crate::secrets::{encrypt_secret, validate_secret};
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tempfile::TempDir;

/// The account a command acts on, after the ownership guard has passed.
#[derive(Debug, Clone)]
struct ResolvedOwner {
    login: String,
    org: bool,
}

/// Remaining quota observed when an operation started.
struct RateLimitBracket {
    starting_remaining: u64,
}

/// Synchronises one GitHub repository's metadata with `repokit.yml`.
pub struct RepoManager {
    client: GitHubClient,
    config: ProjectConfig,
    matrix: CiMatrix,
    target: PathBuf,
    interaction: Box<dyn Interaction>,
    verbose: bool,
    _tmpdir: Option<TempDir>,
}

impl RepoManager {
    /// Create a manager for the project in `target`, whose `repokit.yml` is
    /// loaded immediately.
    pub fn new(
        token: impl Into<String>,
        target: impl Into<PathBuf>,
        verbose: bool,
    ) -> GitHubResult<Self> {
        let target = target.into();
        let config = ProjectConfig::load(&target)?;
        let client = GitHubClient::with_token(token)?;
        Ok(Self::assemble(client, config, target, verbose, None))
    }

    /// Create a manager without a local working copy.
    ///
    /// Downloads `repokit.yml` from the named repository into a scoped
    /// temporary directory, which lives exactly as long as the manager.
    pub async fn isolated(
        token: impl Into<String>,
        username: &str,
        repo_name: &str,
        verbose: bool,
    ) -> GitHubResult<Self> {
        let client = GitHubClient::with_token(token)?;

        let contents = client
            .get_file_contents(username, repo_name, CONFIG_FILE_NAME)
            .await??;
        let raw = contents
            .first()
            .and_then(octocrab::models::repos::Content::decoded_content)
            .ok_or_else(|| {
                GitHubError::Config(format!(
                    "could not fetch {CONFIG_FILE_NAME} from {username}/{repo_name}"
                ))
            })?;

        let tmpdir = tempfile::tempdir()?;
        std::fs::write(tmpdir.path().join(CONFIG_FILE_NAME), &raw)?;
        let config = ProjectConfig::load(tmpdir.path())?;
        let target = tmpdir.path().to_path_buf();

        Ok(Self::assemble(client, config, target, verbose, Some(tmpdir)))
    }

    fn assemble(
        client: GitHubClient,
        config: ProjectConfig,
        target: PathBuf,
        verbose: bool,
        tmpdir: Option<TempDir>,
    ) -> Self {
        let matrix = CiMatrix::from_config(&config);
        Self {
            client,
            config,
            matrix,
            target,
            interaction: Box::new(Terminal),
            verbose,
            _tmpdir: tmpdir,
        }
    }

    /// Replace the prompting surface (used by tests).
    #[must_use]
    pub fn with_interaction(mut self, interaction: Box<dyn Interaction>) -> Self {
        self.interaction = interaction;
        self
    }

    /// The loaded project configuration.
    #[must_use]
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// The CI metadata the required-check compilation uses.
    #[must_use]
    pub fn matrix(&self) -> &CiMatrix {
        &self.matrix
    }

    /// Create a new GitHub repository for this project.
    pub async fn create(&self, org: bool) -> GitHubResult<i32> {
        let bracket = self.begin_rate_limit().await?;
        let owner = self.resolve_owner(org).await?;

        let repository = self
            .client
            .create_repository(
                owner.org.then(|| owner.login.clone()),
                self.config.repo_name.as_str(),
                self.repo_settings(),
            )
            .await?
            .map_err(|err| self.creation_error(err, &owner))?;

        self.update_topics(&owner).await?;

        if let Some(url) = repository.html_url.as_ref() {
            println!("Success! View the repository online at {url}");
        }

        let push_url = format!("git@github.com:{}/{}.git", owner.login, self.config.repo_name);
        remote::configure_origin(&self.target, &push_url);

        self.finish_rate_limit(bracket).await?;
        Ok(0)
    }

    /// Update the GitHub repository for this project.
    pub async fn update(&self, org: bool) -> GitHubResult<i32> {
        let bracket = self.begin_rate_limit().await?;
        let owner = self.resolve_owner(org).await?;
        self.require_repository(&owner).await?;

        self.client
            .update_repository(
                owner.login.as_str(),
                self.config.repo_name.as_str(),
                self.repo_settings(),
            )
            .await??;

        self.update_topics(&owner).await?;
        println!("Up to date!");

        self.finish_rate_limit(bracket).await?;
        Ok(0)
    }

    /// Set or update the secrets of the GitHub repository for this project.
    ///
    /// Secrets are processed in sorted order. An explicit `overwrite`
    /// preference decides whether existing secrets are rewritten; without
    /// one the user is asked. Values come from `values` or a hidden prompt.
    /// Individual upload failures are accumulated into the returned exit
    /// code; validation failures abort the whole command.
    pub async fn secrets(
        &self,
        org: bool,
        overwrite: Option<bool>,
        values: &BTreeMap<String, String>,
    ) -> GitHubResult<i32> {
        let bracket = self.begin_rate_limit().await?;
        let owner = self.resolve_owner(org).await?;
        self.require_repository(&owner).await?;

        let repo_name = self.config.repo_name.as_str();
        let existing = self
            .client
            .list_secrets(owner.login.as_str(), repo_name)
            .await??
            .names();

        let mut ret = 0;
        for name in self.target_secrets() {
            let exists = existing.contains(name);

            let write = match overwrite {
                Some(requested) => requested || !exists,
                None if exists => {
                    println!("A value for the secret '{name}' already exists.");
                    self.interaction.confirm("Do you want to update the secret?")?
                }
                None => true,
            };

            if !write {
                continue;
            }

            let value = match values.get(name) {
                Some(value) => value.clone(),
                None => self.interaction.secret_value(name)?,
            };

            validate_secret(name, &value).map_err(|reason| GitHubError::InvalidSecret {
                name: name.to_string(),
                reason: reason.to_string(),
            })?;

            // The key may rotate; fetch it fresh for every write.
            let public_key = self
                .client
                .get_public_key(owner.login.as_str(), repo_name)
                .await??;
            let encrypted = encrypt_secret(&public_key.key, &value)?;

            let status = self
                .client
                .put_secret(
                    owner.login.as_str(),
                    repo_name,
                    name,
                    public_key.key_id.as_str(),
                    encrypted,
                )
                .await??;

            let (verb, past) = if exists {
                ("update", "updated")
            } else {
                ("create", "created")
            };

            if matches!(status, 200 | 201 | 204) {
                println!("{}", format!("Successfully {past} the secret '{name}'.").green());
            } else {
                println!(
                    "{}",
                    format!("Could not {verb} the secret '{name}': Status {status}").yellow()
                );
                ret |= 1;
            }
        }

        self.finish_rate_limit(bracket).await?;
        Ok(ret)
    }

    /// Update branch protection for the given branch.
    ///
    /// Requires the compiled CI checks to pass, together with one approving
    /// review.
    pub async fn protect_branch(&self, branch: &str, org: bool) -> GitHubResult<i32> {
        let bracket = self.begin_rate_limit().await?;
        let owner = self.resolve_owner(org).await?;
        self.require_repository(&owner).await?;

        let repo_name = self.config.repo_name.as_str();
        if self
            .client
            .find_branch(owner.login.as_str(), repo_name, branch)
            .await??
            .is_none()
        {
            return Err(GitHubError::NoSuchBranch {
                username: owner.login.clone(),
                repository: repo_name.to_string(),
                branch: branch.to_string(),
            });
        }

        let required_checks: Vec<String> =
            compile_required_checks(&self.config, &self.matrix).collect();

        self.client
            .update_branch_protection(
                owner.login.as_str(),
                repo_name,
                branch,
                required_checks.clone(),
            )
            .await??;

        // The protection endpoint has been seen to need a second write
        // before the full rule sticks; verify and reapply once if so.
        let verified = self
            .client
            .get_branch_protection(owner.login.as_str(), repo_name, branch)
            .await??;
        if !verified.is_some_and(|rule| rule.satisfies(&required_checks)) {
            log::debug!("protection rule incomplete after first write; reapplying");
            self.client
                .update_branch_protection(owner.login.as_str(), repo_name, branch, required_checks)
                .await??;
        }

        println!("Up to date!");
        self.finish_rate_limit(bracket).await?;
        Ok(0)
    }

    /// Create or refresh the check-status labels for this repository.
    ///
    /// Upsert semantics: labels outside the catalogue are never deleted.
    pub async fn create_labels(&self, org: bool) -> GitHubResult<i32> {
        let bracket = self.begin_rate_limit().await?;
        let owner = self.resolve_owner(org).await?;
        self.require_repository(&owner).await?;

        let repo_name = self.config.repo_name.as_str();
        let existing: BTreeSet<String> = self
            .client
            .list_labels(owner.login.as_str(), repo_name)
            .await??
            .into_iter()
            .map(|label| label.name)
            .collect();

        for label in CHECK_STATUS_LABELS.iter() {
            if existing.contains(&label.name) {
                self.client
                    .update_label(owner.login.as_str(), repo_name, label.clone())
                    .await??;
            } else {
                self.client
                    .create_label(owner.login.as_str(), repo_name, label.clone())
                    .await??;
            }
        }

        println!("Up to date!");
        self.finish_rate_limit(bracket).await?;
        Ok(0)
    }

    /// Determine the account to act on, guarding against stale config.
    async fn resolve_owner(&self, org: bool) -> GitHubResult<ResolvedOwner> {
        let user = self.client.get_me().await??;

        if org {
            let organization = self.config.username.clone();
            match self
                .client
                .get_org_membership(organization.as_str())
                .await??
            {
                Some(_) => Ok(ResolvedOwner {
                    login: organization,
                    org: true,
                }),
                None => Err(GitHubError::OrganizationError {
                    organization,
                    login: user.login,
                }),
            }
        } else if user.login == self.config.username {
            Ok(ResolvedOwner {
                login: user.login,
                org: false,
            })
        } else {
            Err(GitHubError::BadUsername {
                configured: self.config.username.clone(),
                authenticated: user.login,
            })
        }
    }

    async fn require_repository(
        &self,
        owner: &ResolvedOwner,
    ) -> GitHubResult<octocrab::models::Repository> {
        match self
            .client
            .find_repository(owner.login.as_str(), self.config.repo_name.as_str())
            .await??
        {
            Some(repository) => Ok(repository),
            None => Err(GitHubError::NoSuchRepository {
                username: owner.login.clone(),
                repository: self.config.repo_name.clone(),
                org: owner.org,
            }),
        }
    }

    /// Replace the repository's topics with the merged, normalised set.
    async fn update_topics(&self, owner: &ResolvedOwner) -> GitHubResult<()> {
        let repo_name = self.config.repo_name.as_str();
        let current = self
            .client
            .get_topics(owner.login.as_str(), repo_name)
            .await??
            .names;

        let names = merged_topics(&current, &self.config.keywords);
        self.client
            .replace_topics(owner.login.as_str(), repo_name, names)
            .await??;
        Ok(())
    }

    /// The settings applied when creating and updating repositories.
    fn repo_settings(&self) -> RepositorySettings {
        RepositorySettings {
            description: self.config.short_desc.clone(),
            homepage: self.config.homepage(),
            allow_merge_commit: false,
        }
    }

    fn creation_error(&self, err: GitHubError, owner: &ResolvedOwner) -> GitHubError {
        match &err {
            GitHubError::Octocrab(inner) if is_unprocessable(inner) => {
                GitHubError::ErrorCreatingRepository {
                    username: owner.login.clone(),
                    repository: self.config.repo_name.clone(),
                    org: owner.org,
                }
            }
            _ => err,
        }
    }

    /// The fixed secret-name set this project targets, in sorted order.
    fn target_secrets(&self) -> BTreeSet<&'static str> {
        let mut names = BTreeSet::from(["PYPI_TOKEN"]);
        if self.config.enable_conda {
            names.insert("ANACONDA_TOKEN");
        }
        names
    }

    async fn begin_rate_limit(&self) -> GitHubResult<RateLimitBracket> {
        let rate = self.client.rate_limit().await??.resources.core;

        if rate.remaining == 0 {
            return Err(GitHubError::QuotaExhausted {
                reset: reset_time(rate.reset),
            });
        }

        if self.verbose {
            println!("{} requests available.", rate.remaining);
        }

        Ok(RateLimitBracket {
            starting_remaining: rate.remaining,
        })
    }

    async fn finish_rate_limit(&self, bracket: RateLimitBracket) -> GitHubResult<()> {
        if !self.verbose {
            return Ok(());
        }

        let rate = self.client.rate_limit().await??.resources.core;
        let used = bracket.starting_remaining.saturating_sub(rate.remaining);
        println!(
            "Used {used} requests. {} remaining. Resets at {}.",
            rate.remaining,
            reset_time(rate.reset)
        );
        Ok(())
    }
}

fn reset_time(epoch: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(epoch, 0).unwrap_or_default()
}

/// Merge a repository's current topics with the fixed `python` tag and the
/// configured keywords, normalised (lowercase, underscores to hyphens) and
/// sorted.
///
/// The result replaces the remote set wholesale, so keywords removed from
/// the configuration drop off on the next sync.
#[must_use]
pub fn merged_topics(current: &[String], keywords: &BTreeSet<String>) -> Vec<String> {
    let mut topics: BTreeSet<String> = current.iter().map(|t| normalise_topic(t)).collect();
    topics.insert("python".to_string());
    topics.extend(keywords.iter().map(|k| normalise_topic(k)));
    topics.into_iter().collect()
}

fn normalise_topic(raw: &str) -> String {
    raw.to_lowercase().replace('_', "-")
}
