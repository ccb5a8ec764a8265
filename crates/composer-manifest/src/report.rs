//! Findings and reports

use crate::ManifestError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single problem found in a manifest.
///
/// A critical finding means the manifest should not be processed further;
/// acting on that is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub message: String,
    pub critical: bool,
}

impl Finding {
    pub fn new(message: impl Into<String>, critical: bool) -> Self {
        Self {
            message: message.into(),
            critical,
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(message, true)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, false)
    }
}

impl From<ManifestError> for Finding {
    fn from(err: ManifestError) -> Self {
        Self::new(err.to_string(), err.is_critical())
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.critical {
            f.write_str("<critical> ")?;
        }
        f.write_str(&self.message)
    }
}

/// Findings for one manifest, in the order they were produced.
///
/// Renders one line per finding, prefixed with the manifest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    path: PathBuf,
    findings: Vec<Finding>,
}

impl Report {
    /// Create an empty report for the manifest at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            findings: Vec::new(),
        }
    }

    /// Create a report holding a single finding.
    pub fn single(path: impl Into<PathBuf>, finding: Finding) -> Self {
        let mut report = Self::new(path);
        report.add(finding);
        report
    }

    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Path of the manifest these findings concern.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// True if any finding is critical.
    pub fn has_critical(&self) -> bool {
        self.findings.iter().any(|f| f.critical)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.findings.iter()
    }

    /// Return `Some(self)` when at least one finding was recorded.
    pub(crate) fn into_option(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for finding in &self.findings {
            writeln!(f, "config {}: {}", self.path.display(), finding)?;
        }
        Ok(())
    }
}

impl std::error::Error for Report {}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.iter()
    }
}

impl IntoIterator for Report {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.into_iter()
    }
}
