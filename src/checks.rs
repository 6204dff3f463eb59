//! Compilation of the CI checks a protected branch requires.

use crate::config::{CiMatrix, Platform, ProjectConfig};

/// Whether a version string names a pre-release interpreter.
///
/// Recognises the tags CI version lists carry (`alpha`, `beta`, `-dev`) and
/// falls back to a semantic-version parse for forms like `3.12.0-rc.1`.
fn is_prerelease(version: &str) -> bool {
    if version.contains("alpha") || version.contains("beta") || version.contains("-dev") {
        return true;
    }

    match semver::Version::parse(version) {
        Ok(parsed) => !parsed.pre.is_empty(),
        Err(_) => false,
    }
}

/// Whether a version should be skipped on the given platform.
///
/// PyPy builds are not run on Windows.
fn is_excluded(platform: Platform, version: &str) -> bool {
    if is_prerelease(version) {
        return true;
    }

    platform == Platform::Windows && version.starts_with("pypy")
}

/// Compile the names of the status checks required before merging.
///
/// One check per surviving platform/version pair, in platform-then-version
/// order, followed by the static type-checking and style checks, followed by
/// `docs` when documentation is enabled. Pure function of its inputs; the
/// sequence is lazy and restartable. Uniqueness holds by construction (each
/// platform and each version is visited once).
pub fn compile_required_checks<'a>(
    config: &'a ProjectConfig,
    matrix: &'a CiMatrix,
) -> impl Iterator<Item = String> + 'a {
    let platform_checks = config
        .platforms
        .iter()
        .filter_map(|name| matrix.for_platform(name))
        .flat_map(|ci| {
            ci.python_versions
                .iter()
                .filter(move |version| !is_excluded(ci.platform, version))
                .map(move |version| format!("{} / Python {}", ci.name, version))
        });

    let static_checks = [
        format!("mypy / {}", matrix.linux().name),
        "Flake8".to_string(),
    ];

    platform_checks
        .chain(static_checks)
        .chain(config.enable_docs.then(|| "docs".to_string()))
}
