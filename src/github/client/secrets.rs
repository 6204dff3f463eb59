//! Actions secrets API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::models::{RepositorySecrets, SecretsPublicKey};
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// List the repository's Actions secrets (names only)
    pub fn list_secrets(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<RepositorySecrets, GitHubError>> {
        crate::github::list_secrets::list_secrets(self.inner.clone(), owner, repo)
    }

    /// Fetch the repository's current secrets public key
    pub fn get_public_key(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<SecretsPublicKey, GitHubError>> {
        crate::github::get_public_key::get_public_key(self.inner.clone(), owner, repo)
    }

    /// Upload an encrypted secret value, returning the response status
    pub fn put_secret(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        name: impl Into<String>,
        key_id: impl Into<String>,
        encrypted_value: impl Into<String>,
    ) -> AsyncTask<Result<u16, GitHubError>> {
        crate::github::put_secret::put_secret(
            self.inner.clone(),
            owner,
            repo,
            name,
            key_id,
            encrypted_value,
        )
    }
}
