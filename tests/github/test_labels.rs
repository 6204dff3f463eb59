//! Tests for the check-status label catalogue.

use repokit_github::labels::CHECK_STATUS_LABELS;
use std::collections::BTreeSet;

#[test]
fn test_names_are_unique() {
    let names: BTreeSet<&str> = CHECK_STATUS_LABELS.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names.len(), CHECK_STATUS_LABELS.len());
}

#[test]
fn test_colors_are_bare_hex() {
    for label in CHECK_STATUS_LABELS.iter() {
        assert_eq!(label.color.len(), 6, "label {:?}", label.name);
        assert!(
            label.color.chars().all(|c| c.is_ascii_hexdigit()),
            "label {:?} has colour {:?}",
            label.name,
            label.color
        );
        assert!(!label.color.starts_with('#'));
    }
}

#[test]
fn test_every_label_is_described() {
    for label in CHECK_STATUS_LABELS.iter() {
        let description = label.description.as_deref().unwrap_or_default();
        assert!(!description.is_empty(), "label {:?}", label.name);
    }
}

#[test]
fn test_covers_the_static_checks() {
    let names: BTreeSet<&str> = CHECK_STATUS_LABELS.iter().map(|l| l.name.as_str()).collect();
    assert!(names.contains("failure: mypy"));
    assert!(names.contains("failure: flake8"));
    assert!(names.contains("success"));
}
