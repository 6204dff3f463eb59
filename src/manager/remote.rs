//! Best-effort `origin` bookkeeping after creating a repository.
//!
//! Runs the system git; every failure is non-fatal. A working copy that is
//! not version-controlled is skipped silently.

use std::path::Path;
use std::process::{Command, Stdio};

/// Point the `origin` remote of `workdir` at `url` and fetch it.
pub(crate) fn configure_origin(workdir: &Path, url: &str) {
    if !is_git_worktree(workdir) {
        return;
    }

    if !git(workdir, &["remote", "add", "origin", url])
        && !git(workdir, &["remote", "set-url", "origin", url])
    {
        log::warn!("could not point 'origin' at {url}");
        return;
    }

    if !git(workdir, &["fetch", "origin"]) {
        log::warn!("could not fetch 'origin' after creating the repository");
    }
}

fn is_git_worktree(workdir: &Path) -> bool {
    git(workdir, &["rev-parse", "--git-dir"])
}

fn git(workdir: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .arg("-C")
        .arg(workdir)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
