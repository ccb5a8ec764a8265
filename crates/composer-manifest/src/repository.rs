//! Repository entries
//!
//! Only local (`"path"`) repositories are resolved; VCS and registry
//! repositories are kept as declared.

use crate::de::null_as_default;
use crate::paths;
use serde::Deserialize;
use std::path::Path;

/// Repository `type` of a package on the local filesystem.
pub const LOCAL_PATH_TYPE: &str = "path";

/// One entry of the `repositories` list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RepositoryEntry {
    /// Repository type, e.g. `"path"` or `"vcs"`.
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,

    /// URL, or a path relative to the manifest for local repositories.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// Set once `url` has been rewritten to an absolute path.
    #[serde(skip)]
    pub resolved: bool,
}

impl RepositoryEntry {
    pub fn new(kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            url: url.into(),
            resolved: false,
        }
    }

    /// Shorthand for a `"path"` repository.
    pub fn local(url: impl Into<String>) -> Self {
        Self::new(LOCAL_PATH_TYPE, url)
    }

    pub fn is_local(&self) -> bool {
        self.kind == LOCAL_PATH_TYPE
    }

    /// Resolve a local repository's path against `base`.
    ///
    /// The joined path is cleaned of `.` and `..` and written back with `/`
    /// separators on every platform. Entries that are already resolved, or
    /// are not local, are returned untouched. An absolute `url` replaces
    /// `base`. Nothing is checked against the filesystem.
    pub fn resolve_url(&mut self, base: impl AsRef<Path>) -> &mut Self {
        if self.resolved || !self.is_local() {
            return self;
        }

        let joined = base.as_ref().join(&self.url);
        let resolved = paths::to_slash(&paths::clean(&joined));
        tracing::trace!(from = %self.url, to = %resolved, "resolved local repository");

        self.url = resolved;
        self.resolved = true;
        self
    }
}
