//! Ready-made checks
//!
//! Common policy rules for [`Manifest::add_check`]. Each function returns a
//! fresh check; register as many as the project needs.

use crate::manifest::Manifest;
use crate::report::Finding;
use crate::validator::Check;

/// Critical when the manifest has no `name`.
pub fn require_name() -> impl Check {
    |manifest: &Manifest| {
        manifest
            .name
            .is_empty()
            .then(|| Finding::critical("name is required"))
    }
}

/// Warns when `name` is not a lowercase `vendor/project` pair.
///
/// Both halves consist of lowercase letters and digits, with words separated
/// by a single `-`, `.` or `_`; the project half also allows `--`. An empty
/// name is left to [`require_name`].
pub fn package_name_format() -> impl Check {
    |manifest: &Manifest| {
        let name = manifest.name.as_str();
        if name.is_empty() || is_valid_package_name(name) {
            return None;
        }
        Some(Finding::warning(format!(
            "name '{}' must be lowercase vendor/project words separated by '-', '.' or '_'",
            name
        )))
    }
}

/// Warns when the manifest has no parsable version.
pub fn require_version() -> impl Check {
    |manifest: &Manifest| {
        if manifest.version.is_some() {
            return None;
        }
        let finding = if manifest.raw_version.is_empty() {
            Finding::warning("version is missing")
        } else {
            Finding::warning(format!(
                "version '{}' could not be parsed",
                manifest.raw_version
            ))
        };
        Some(finding)
    }
}

/// Warns when the version is a dev, alpha, beta or RC release.
pub fn require_stable_version() -> impl Check {
    |manifest: &Manifest| match manifest.version {
        Some(version) if !version.is_stable() => Some(Finding::warning(format!(
            "version {} is not a stable release",
            version
        ))),
        _ => None,
    }
}

/// Critical when `package` appears in `require` or `require-dev`.
pub fn forbid_dependency(package: impl Into<String>) -> impl Check {
    let package = package.into();
    move |manifest: &Manifest| {
        manifest
            .has_dependency(&package)
            .then(|| Finding::critical(format!("dependency on '{}' is not allowed", package)))
    }
}

fn is_valid_package_name(name: &str) -> bool {
    match name.split_once('/') {
        Some((vendor, project)) => {
            is_valid_name_part(vendor, false) && is_valid_name_part(project, true)
        }
        None => false,
    }
}

fn is_valid_name_part(part: &str, allow_double_hyphen: bool) -> bool {
    let is_word_char = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();

    if !part.starts_with(is_word_char) || !part.ends_with(is_word_char) {
        return false;
    }

    let mut separator = String::new();
    for c in part.chars() {
        if !is_word_char(c) {
            separator.push(c);
            continue;
        }
        if !separator.is_empty() {
            let valid = matches!(separator.as_str(), "-" | "." | "_")
                || (allow_double_hyphen && separator == "--");
            if !valid {
                return false;
            }
            separator.clear();
        }
    }

    true
}
