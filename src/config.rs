//! Project configuration (`repokit.yml`) and the CI metadata it drives.

use crate::github::error::{GitHubError, GitHubResult};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Name of the project configuration file at the repository root.
pub const CONFIG_FILE_NAME: &str = "repokit.yml";

fn default_true() -> bool {
    true
}

fn default_platforms() -> Vec<String> {
    vec!["Windows".into(), "macOS".into(), "Linux".into()]
}

fn default_python_versions() -> Vec<String> {
    vec![
        "3.9".into(),
        "3.10".into(),
        "3.11".into(),
        "3.12".into(),
        "3.13".into(),
    ]
}

/// Settings declared in `repokit.yml`.
///
/// Loaded once per invocation and immutable for the duration of a command.
/// Unknown keys are ignored; the file is shared with the wider scaffolding
/// tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// The name of the repository on GitHub.
    pub repo_name: String,

    /// The username (or organisation) hosting the repository.
    pub username: String,

    /// One-line description applied to the repository.
    #[serde(default)]
    pub short_desc: String,

    /// Keywords merged into the repository's topics.
    #[serde(default)]
    pub keywords: BTreeSet<String>,

    /// Whether documentation is built for this project.
    #[serde(default = "default_true")]
    pub enable_docs: bool,

    /// Whether conda packages are built for this project.
    #[serde(default = "default_true")]
    pub enable_conda: bool,

    /// The URL of the project's documentation, used as the homepage.
    #[serde(default)]
    pub docs_url: Option<String>,

    /// Target CI platforms, in declared order.
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,

    /// Target Python versions for the CI matrix.
    #[serde(default = "default_python_versions")]
    pub python_versions: Vec<String>,
}

impl ProjectConfig {
    /// Load the configuration from `repokit.yml` in the given directory.
    pub fn load(dir: impl AsRef<Path>) -> GitHubResult<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        let raw = std::fs::read_to_string(&path).map_err(|e| {
            GitHubError::Config(format!("could not read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&raw)
    }

    /// Parse the configuration from YAML text.
    pub fn from_yaml(raw: &str) -> GitHubResult<Self> {
        serde_yaml::from_str(raw)
            .map_err(|e| GitHubError::Config(format!("invalid {CONFIG_FILE_NAME}: {e}")))
    }

    /// The repository homepage, when documentation is enabled and a URL is
    /// configured.
    #[must_use]
    pub fn homepage(&self) -> Option<String> {
        if self.enable_docs {
            self.docs_url.clone()
        } else {
            None
        }
    }
}

/// A platform in the CI matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
}

/// One platform's CI metadata: the display label its workflow reports checks
/// under, and the interpreter versions it targets.
#[derive(Debug, Clone)]
pub struct PlatformCi {
    pub platform: Platform,
    pub name: String,
    pub python_versions: Vec<String>,
}

/// The CI-metadata contract: platform name → CI display label plus target
/// interpreter versions.
///
/// Only `Windows` and `Linux` map to anything; `macOS` is unsupported and
/// yields no checks.
#[derive(Debug, Clone)]
pub struct CiMatrix {
    linux: PlatformCi,
    windows: PlatformCi,
}

impl CiMatrix {
    /// Build a matrix from explicit per-platform metadata.
    #[must_use]
    pub fn new(linux: PlatformCi, windows: PlatformCi) -> Self {
        Self { linux, windows }
    }

    /// Build the matrix a project configuration implies: default display
    /// labels, the configured interpreter versions on both platforms.
    #[must_use]
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            linux: PlatformCi {
                platform: Platform::Linux,
                name: "Linux".into(),
                python_versions: config.python_versions.clone(),
            },
            windows: PlatformCi {
                platform: Platform::Windows,
                name: "Windows".into(),
                python_versions: config.python_versions.clone(),
            },
        }
    }

    /// Look up a configured platform by its name in `platforms`.
    #[must_use]
    pub fn for_platform(&self, name: &str) -> Option<&PlatformCi> {
        match name {
            "Linux" => Some(&self.linux),
            "Windows" => Some(&self.windows),
            _ => None,
        }
    }

    /// The Linux platform metadata (hosts the static type-checking check).
    #[must_use]
    pub fn linux(&self) -> &PlatformCi {
        &self.linux
    }
}
