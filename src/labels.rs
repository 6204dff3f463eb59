//! The fixed catalogue of check-status labels.

use crate::github::models::Label;
use lazy_static::lazy_static;

fn status_label(name: &str, color: &str, description: &str) -> Label {
    Label {
        name: name.to_string(),
        color: color.to_string(),
        description: Some(description.to_string()),
    }
}

lazy_static! {
    /// Labels used to mirror the state of a pull request's status checks.
    ///
    /// The `labels` operation upserts these; labels outside the catalogue
    /// are never touched.
    pub static ref CHECK_STATUS_LABELS: Vec<Label> = vec![
        status_label("failure: Linux", "ef5b60", "The Linux tests are failing."),
        status_label("failure: Windows", "fbca04", "The Windows tests are failing."),
        status_label("failure: docs", "c5def5", "The docs check is failing."),
        status_label("failure: flake8", "ed541f", "The Flake8 check is failing."),
        status_label("failure: mypy", "dc1c13", "The mypy check is failing."),
        status_label("success", "0e8a16", "The checks are passing."),
    ];
}
