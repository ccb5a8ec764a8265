//! composer.json manifests
//!
//! Provides loading and inspection of `composer.json` package manifests:
//! - Decoding the manifest and parsing its version
//! - PSR-4 namespace-to-path lookup across `autoload` and `autoload-dev`
//! - Resolving local (`"path"`) repositories against the manifest directory
//! - A pipeline of caller-registered checks producing a [`Report`]
//!
//! # Severity
//!
//! Loading and checking never stop at the first problem. Every problem is a
//! [`Finding`] carrying a `critical` flag; a JSON decode failure is critical,
//! a bad version string is not. Callers decide what a critical finding means
//! for their workflow.
//!
//! # Example
//!
//! ```no_run
//! use composer_manifest::{Finding, Manifest};
//!
//! let (mut manifest, report) = Manifest::load_from_file("composer.json");
//! if report.as_ref().is_some_and(|r| r.has_critical()) {
//!     return;
//! }
//!
//! manifest.add_check(|m: &Manifest| {
//!     m.description
//!         .is_empty()
//!         .then(|| Finding::warning("description is missing"))
//! });
//!
//! let src = manifest.psr4_path_for_namespace(r"App\Http");
//! let report = manifest.check_config();
//! ```

pub mod autoload;
pub mod checks;
mod de;
pub mod loader;
pub mod manifest;
mod paths;
pub mod report;
pub mod repository;
pub mod validator;

use std::path::PathBuf;
use thiserror::Error;

pub use composer_version::{Suffix, Version, VersionError};

/// Manifest loading errors
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Version(#[from] VersionError),
}

impl ManifestError {
    /// Whether this error leaves the manifest unusable.
    pub fn is_critical(&self) -> bool {
        match self {
            ManifestError::Io { .. } | ManifestError::Decode { .. } => true,
            ManifestError::Version(_) => false,
        }
    }
}

// Re-export main types
pub use autoload::Autoload;
pub use loader::{find_manifest, MANIFEST_FILE};
pub use manifest::Manifest;
pub use report::{Finding, Report};
pub use repository::{RepositoryEntry, LOCAL_PATH_TYPE};
pub use validator::Check;
