//! Package Manifest
//!
//! The decoded `composer.json` plus what the loader derives from it: the
//! parsed version and the manifest's location on disk.

use crate::autoload::Autoload;
use crate::de::null_as_default;
use crate::repository::RepositoryEntry;
use crate::validator::Check;
use composer_version::Version;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A `composer.json` manifest.
///
/// Unknown keys are ignored; missing keys and `null` values are left empty.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Package name, `vendor/project`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub description: String,

    /// Package type, e.g. `library` or `project`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,

    /// The `version` field exactly as written.
    #[serde(rename = "version", deserialize_with = "null_as_default")]
    pub raw_version: String,

    /// Parsed from `raw_version`; `None` when missing or malformed.
    #[serde(skip)]
    pub version: Option<Version>,

    /// Package name to version constraint.
    #[serde(deserialize_with = "null_as_default")]
    pub require: HashMap<String, String>,

    #[serde(rename = "require-dev", deserialize_with = "null_as_default")]
    pub require_dev: HashMap<String, String>,

    #[serde(deserialize_with = "null_as_default")]
    pub repositories: Vec<RepositoryEntry>,

    #[serde(deserialize_with = "null_as_default")]
    pub autoload: Autoload,

    #[serde(rename = "autoload-dev", deserialize_with = "null_as_default")]
    pub autoload_dev: Autoload,

    /// Absolute path of the manifest file.
    #[serde(skip)]
    pub path: PathBuf,

    /// Directory containing the manifest file.
    #[serde(skip)]
    pub root_dir: PathBuf,

    #[serde(skip)]
    pub(crate) checks: Vec<Box<dyn Check>>,
}

impl Manifest {
    /// Find the directory for `namespace` in `autoload`, then `autoload-dev`.
    ///
    /// The returned path starts with the name of the manifest directory, so
    /// `src` in `/work/billing/composer.json` comes back as `billing/src`.
    /// This keeps a match from being confused with an unrelated `src`
    /// directory deeper in the tree.
    pub fn psr4_path_for_namespace(&self, namespace: &str) -> Option<String> {
        let path = self
            .autoload
            .psr4_path_for_namespace(namespace)
            .or_else(|| self.autoload_dev.psr4_path_for_namespace(namespace))?;

        match self.root_dir.file_name() {
            Some(dir) => Some(format!("{}/{}", dir.to_string_lossy(), path)),
            None => Some(path.to_string()),
        }
    }

    /// Get the manifest path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the manifest directory
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Get all dependencies (require + require-dev)
    ///
    /// A package listed in both keeps its `require` constraint.
    pub fn all_dependencies(&self) -> HashMap<&str, &str> {
        let mut all = HashMap::new();
        for (name, constraint) in self.require_dev.iter().chain(&self.require) {
            all.insert(name.as_str(), constraint.as_str());
        }
        all
    }

    /// Whether `name` appears in `require` or `require-dev`.
    pub fn has_dependency(&self, name: &str) -> bool {
        self.require.contains_key(name) || self.require_dev.contains_key(name)
    }

    /// Repositories of type `"path"`.
    pub fn local_repositories(&self) -> impl Iterator<Item = &RepositoryEntry> {
        self.repositories.iter().filter(|r| r.is_local())
    }

    /// Resolve every local repository against the manifest directory.
    pub fn resolve_local_repositories(&mut self) -> &mut Self {
        let root = self.root_dir.clone();
        for repo in &mut self.repositories {
            repo.resolve_url(&root);
        }
        self
    }
}

impl fmt::Debug for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manifest")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("kind", &self.kind)
            .field("raw_version", &self.raw_version)
            .field("version", &self.version)
            .field("require", &self.require)
            .field("require_dev", &self.require_dev)
            .field("repositories", &self.repositories)
            .field("autoload", &self.autoload)
            .field("autoload_dev", &self.autoload_dev)
            .field("path", &self.path)
            .field("root_dir", &self.root_dir)
            .field("checks", &self.checks.len())
            .finish()
    }
}
