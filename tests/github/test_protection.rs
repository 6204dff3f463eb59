//! Tests for the branch protection rule model.

use repokit_github::github::models::BranchProtection;

fn rule(strict: bool, contexts: &[&str], dismiss: bool, count: u32) -> BranchProtection {
    serde_json::from_value(serde_json::json!({
        "required_status_checks": {
            "strict": strict,
            "contexts": contexts,
        },
        "required_pull_request_reviews": {
            "dismiss_stale_reviews": dismiss,
            "required_approving_review_count": count,
        },
    }))
    .expect("rule should deserialise")
}

fn wanted() -> Vec<String> {
    vec!["Linux / Python 3.9".into(), "Flake8".into()]
}

#[test]
fn test_satisfied_rule() {
    let rule = rule(false, &["Linux / Python 3.9", "Flake8"], false, 1);
    assert!(rule.satisfies(&wanted()));
}

#[test]
fn test_context_order_does_not_matter() {
    // The remote API treats the context list as a set.
    let rule = rule(false, &["Flake8", "Linux / Python 3.9"], false, 1);
    assert!(rule.satisfies(&wanted()));
}

#[test]
fn test_missing_context_fails() {
    let rule = rule(false, &["Flake8"], false, 1);
    assert!(!rule.satisfies(&wanted()));
}

#[test]
fn test_strict_checks_fail() {
    let rule = rule(true, &["Linux / Python 3.9", "Flake8"], false, 1);
    assert!(!rule.satisfies(&wanted()));
}

#[test]
fn test_wrong_review_policy_fails() {
    let dismiss_rule = rule(false, &["Linux / Python 3.9", "Flake8"], true, 1);
    assert!(!dismiss_rule.satisfies(&wanted()));

    let count_rule = rule(false, &["Linux / Python 3.9", "Flake8"], false, 2);
    assert!(!count_rule.satisfies(&wanted()));
}

#[test]
fn test_partially_applied_rule_fails() {
    let rule: BranchProtection = serde_json::from_value(serde_json::json!({
        "required_status_checks": {
            "strict": false,
            "contexts": ["Linux / Python 3.9", "Flake8"],
        },
    }))
    .expect("rule should deserialise");

    assert!(!rule.satisfies(&wanted()));
}
