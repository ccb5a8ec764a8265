//! Manifest Loader
//!
//! Reads and decodes `composer.json`. Problems found while loading are
//! returned as a [`Report`] next to the manifest rather than as an `Err`:
//! an unreadable or undecodable file produces a critical finding and an
//! empty placeholder manifest, a bad version string produces a non-critical
//! finding and a usable manifest.

use crate::manifest::Manifest;
use crate::paths;
use crate::report::{Finding, Report};
use crate::ManifestError;
use composer_version::Version;
use std::path::{Path, PathBuf};

/// File name of a package manifest.
pub const MANIFEST_FILE: &str = "composer.json";

impl Manifest {
    /// Load a manifest from a file.
    ///
    /// A read failure yields an empty placeholder manifest and a report with
    /// one critical finding.
    pub fn load_from_file(path: impl AsRef<Path>) -> (Self, Option<Report>) {
        let path = path.as_ref();

        match std::fs::read(path) {
            Ok(data) => Self::from_slice(&data, path),
            Err(source) => {
                let err = ManifestError::Io {
                    path: path.to_path_buf(),
                    source,
                };
                tracing::debug!("{}", err);
                Self::placeholder(path, err)
            }
        }
    }

    /// Decode a manifest from JSON bytes read from `path`.
    ///
    /// `path` does not need to exist; it is made absolute against the current
    /// directory and used to set [`Manifest::path`] and
    /// [`Manifest::root_dir`].
    pub fn from_slice(data: &[u8], path: impl AsRef<Path>) -> (Self, Option<Report>) {
        let path = path.as_ref();

        let mut manifest: Manifest = match serde_json::from_slice(data) {
            Ok(manifest) => manifest,
            Err(source) => {
                let err = ManifestError::Decode {
                    path: path.to_path_buf(),
                    source,
                };
                tracing::debug!("{}", err);
                return Self::placeholder(path, err);
            }
        };

        manifest.path = paths::absolute(path);
        manifest.root_dir = manifest
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let mut report = Report::new(manifest.path.clone());

        match Version::parse(&manifest.raw_version) {
            Ok(version) => manifest.version = Some(version),
            Err(e) => {
                tracing::warn!(
                    path = %manifest.path.display(),
                    version = %manifest.raw_version,
                    "{}",
                    e
                );
                report.add(ManifestError::from(e).into());
            }
        }

        tracing::debug!(
            path = %manifest.path.display(),
            name = %manifest.name,
            repositories = manifest.repositories.len(),
            "loaded manifest"
        );

        (manifest, report.into_option())
    }

    /// Decode a manifest from a JSON string. See [`Manifest::from_slice`].
    pub fn from_json_str(content: &str, path: impl AsRef<Path>) -> (Self, Option<Report>) {
        Self::from_slice(content.as_bytes(), path)
    }

    // The placeholder keeps the absolute path so the report can name the file.
    fn placeholder(path: &Path, err: ManifestError) -> (Self, Option<Report>) {
        let manifest = Manifest {
            path: paths::absolute(path),
            ..Manifest::default()
        };
        let report = Report::single(manifest.path.clone(), Finding::from(err));
        (manifest, Some(report))
    }
}

/// Find the nearest manifest by walking up from `start_dir`.
///
/// Returns the path of the first `composer.json` found in `start_dir` or one
/// of its ancestors.
pub fn find_manifest(start_dir: &Path) -> Option<PathBuf> {
    let mut current = Some(start_dir);

    while let Some(dir) = current {
        let candidate = dir.join(MANIFEST_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "found manifest");
            return Some(candidate);
        }
        current = dir.parent();
    }

    None
}
