//! Lexical path helpers
//!
//! None of these touch the filesystem.

use std::path::{Component, Path, PathBuf};

/// Resolve `.` and `..` components without consulting the filesystem.
///
/// `..` directly under the root is dropped, leading `..` of a relative path
/// is kept, and an empty result becomes `.`.
pub(crate) fn clean(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }

    components.iter().collect()
}

/// Render a path with `/` as the only separator.
pub(crate) fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make `path` absolute against the current directory and clean it.
///
/// Falls back to the cleaned input when the current directory is unavailable.
pub(crate) fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return clean(path);
    }

    match std::env::current_dir() {
        Ok(cwd) => clean(&cwd.join(path)),
        Err(e) => {
            tracing::warn!(
                "cannot read current directory, keeping {} relative: {}",
                path.display(),
                e
            );
            clean(path)
        }
    }
}
