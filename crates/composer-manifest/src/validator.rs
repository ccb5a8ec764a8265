//! Caller-registered manifest checks
//!
//! Checks are registered with [`Manifest::add_check`] and run together by
//! [`Manifest::check_config`]. Every check always runs; a critical finding
//! does not stop the remaining checks.

use crate::manifest::Manifest;
use crate::report::{Finding, Report};

/// A rule evaluated against a manifest.
///
/// Returns `None` when the manifest passes. Implemented for every
/// `Fn(&Manifest) -> Option<Finding>` closure.
pub trait Check: Send + Sync {
    fn check(&self, manifest: &Manifest) -> Option<Finding>;
}

impl<F> Check for F
where
    F: Fn(&Manifest) -> Option<Finding> + Send + Sync,
{
    fn check(&self, manifest: &Manifest) -> Option<Finding> {
        self(manifest)
    }
}

impl Manifest {
    /// Register a check. Checks run in registration order.
    pub fn add_check(&mut self, check: impl Check + 'static) {
        self.checks.push(Box::new(check));
    }

    /// Number of registered checks.
    pub fn checks_len(&self) -> usize {
        self.checks.len()
    }

    /// Run every registered check.
    ///
    /// Returns `None` when no check produced a finding, including when no
    /// checks are registered. Otherwise the report lists findings in
    /// registration order.
    pub fn check_config(&self) -> Option<Report> {
        let mut report = Report::new(self.path.clone());

        for (index, check) in self.checks.iter().enumerate() {
            if let Some(finding) = check.check(self) {
                tracing::trace!(index, critical = finding.critical, "check failed");
                report.add(finding);
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            checks = self.checks.len(),
            findings = report.len(),
            "checked manifest"
        );

        report.into_option()
    }
}
