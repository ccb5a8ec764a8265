//! PSR-4 autoload tables

use crate::de::null_as_default;
use serde::Deserialize;
use std::collections::HashMap;

/// Separator between namespace segments.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// An `autoload` or `autoload-dev` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Autoload {
    /// Namespace prefix (ending in `\`) to directory, relative to the manifest.
    #[serde(default, rename = "psr-4", deserialize_with = "null_as_default")]
    pub psr4: HashMap<String, String>,

    /// Files loaded unconditionally.
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<String>,
}

impl Autoload {
    /// Find the directory for `namespace` in the `psr-4` table.
    ///
    /// Table keys are matched as prefixes of the namespace, so sub-namespaces
    /// resolve to the directory of their parent. A separator is appended to
    /// the query first so that `My\Core` matches the key `My\Core\` exactly.
    /// When several keys match, the longest one wins:
    ///
    /// ```
    /// # use composer_manifest::Autoload;
    /// let mut autoload = Autoload::default();
    /// autoload.psr4.insert(r"My\".to_string(), "a".to_string());
    /// autoload.psr4.insert(r"My\Core\".to_string(), "b".to_string());
    ///
    /// assert_eq!(autoload.psr4_path_for_namespace(r"My\Core\Utils"), Some("b"));
    /// assert_eq!(autoload.psr4_path_for_namespace(r"My\Other"), Some("a"));
    /// assert_eq!(autoload.psr4_path_for_namespace(r"Your"), None);
    /// ```
    pub fn psr4_path_for_namespace(&self, namespace: &str) -> Option<&str> {
        let mut query = String::with_capacity(namespace.len() + 1);
        query.push_str(namespace);
        query.push(NAMESPACE_SEPARATOR);

        // Two distinct keys of equal length cannot both prefix the query,
        // so the maximum is unique.
        self.psr4
            .iter()
            .filter(|(prefix, _)| query.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, path)| path.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.psr4.is_empty() && self.files.is_empty()
    }
}
