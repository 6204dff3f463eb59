//! Tests for repository manager construction.

use repokit_github::interact::Interaction;
use repokit_github::{GitHubResult, RepoManager};

/// Canned prompt answers, so the upsert logic never needs a terminal.
struct Scripted {
    confirm: bool,
    value: &'static str,
}

impl Interaction for Scripted {
    fn confirm(&self, _prompt: &str) -> GitHubResult<bool> {
        Ok(self.confirm)
    }

    fn secret_value(&self, _name: &str) -> GitHubResult<String> {
        Ok(self.value.to_string())
    }
}

fn project_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    std::fs::write(
        dir.path().join("repokit.yml"),
        "repo_name: repokit_demo\nusername: repokit-dev\nkeywords:\n  - github\n",
    )
    .expect("config should be written");
    dir
}

#[tokio::test]
async fn test_loads_config_from_target_directory() {
    let dir = project_dir();
    let manager =
        RepoManager::new("FAKE_TOKEN", dir.path(), true).expect("manager should build");

    assert_eq!(manager.config().repo_name, "repokit_demo");
    assert_eq!(manager.config().username, "repokit-dev");
    assert_eq!(manager.matrix().linux().name, "Linux");
}

#[test]
fn test_missing_config_is_a_config_error() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let result = RepoManager::new("FAKE_TOKEN", dir.path(), false);

    assert!(matches!(
        result,
        Err(repokit_github::GitHubError::Config(_))
    ));
}

#[tokio::test]
async fn test_interaction_can_be_replaced() {
    let dir = project_dir();
    let manager = RepoManager::new("FAKE_TOKEN", dir.path(), false)
        .expect("manager should build")
        .with_interaction(Box::new(Scripted {
            confirm: true,
            value: "hunter2",
        }));

    // The swap is what matters; operations using it need the network.
    assert_eq!(manager.config().repo_name, "repokit_demo");
}
