// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the scel import trigger.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Outcome of the file dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// User dismissed the dialog. No imports happen.
    Cancelled,
    /// User pressed Open. Paths are in the order the dialog returned them,
    /// and the list may be empty.
    Confirmed(Vec<PathBuf>),
}

/// What to do when `ImportScel` fails for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failure. Files already submitted stay imported.
    #[default]
    Abort,
    /// Attempt every file and report the failures at the end.
    Continue,
}

/// A file the remote service rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedImport {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of one import run, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Paths the remote service accepted.
    pub submitted: Vec<PathBuf>,
    /// Paths whose remote call failed (only populated under `Continue`).
    pub failed: Vec<FailedImport>,
}

impl ImportReport {
    /// Total number of remote calls attempted.
    pub fn attempted(&self) -> usize {
        self.submitted.len() + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_policy_defaults_to_abort() {
        assert_eq!(FailurePolicy::default(), FailurePolicy::Abort);
        let json = serde_json::to_string(&FailurePolicy::Continue).unwrap();
        assert_eq!(json, "\"continue\"");
    }

    #[test]
    fn report_counts_attempts() {
        let report = ImportReport {
            submitted: vec!["/a.scel".into()],
            failed: vec![FailedImport {
                path: "/b.scel".into(),
                reason: "corrupt".into(),
            }],
        };
        assert_eq!(report.attempted(), 2);
        assert!(!report.is_clean());
    }
}
