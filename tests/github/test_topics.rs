//! Tests for topic synchronisation.

use repokit_github::merged_topics;
use std::collections::BTreeSet;

fn keywords(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn test_always_contains_python_and_keywords() {
    let merged = merged_topics(&[], &keywords(&["github", "configuration"]));
    assert_eq!(merged, vec!["configuration", "github", "python"]);
}

#[test]
fn test_existing_topics_are_kept() {
    let current = vec!["rust".to_string(), "tooling".to_string()];
    let merged = merged_topics(&current, &keywords(&["github"]));
    assert_eq!(merged, vec!["github", "python", "rust", "tooling"]);
}

#[test]
fn test_normalisation() {
    let current = vec!["Repo_Helper".to_string()];
    let merged = merged_topics(&current, &keywords(&["My_Keyword", "UPPER"]));
    assert_eq!(merged, vec!["my-keyword", "python", "repo-helper", "upper"]);
}

#[test]
fn test_idempotent() {
    let keywords = keywords(&["repo_helper", "github", "configuration"]);
    let current = vec!["python".to_string(), "Something_Else".to_string()];

    let once = merged_topics(&current, &keywords);
    let twice = merged_topics(&once, &keywords);

    assert_eq!(once, twice);
    assert!(once.contains(&"python".to_string()));
}

#[test]
fn test_sorted_output() {
    let merged = merged_topics(
        &["zebra".to_string(), "alpha".to_string()],
        &keywords(&["middle"]),
    );

    let mut sorted = merged.clone();
    sorted.sort();
    assert_eq!(merged, sorted);
}
