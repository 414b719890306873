// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sequential import loop.
//
// One remote call per path, in the order given, never overlapping. Calls
// that already succeeded are never rolled back.

use std::path::PathBuf;

use scel_import_core::error::Result;
use scel_import_core::{FailedImport, FailurePolicy, ImportReport};
use tracing::{debug, info, warn};

use crate::traits::LexiconImporter;

/// Submit every path to `importer`, honouring `policy` on failure.
///
/// Under `FailurePolicy::Abort` the first error is returned as-is. Under
/// `FailurePolicy::Continue` errors are collected in the report.
pub fn import_all<I>(importer: &I, paths: &[PathBuf], policy: FailurePolicy) -> Result<ImportReport>
where
    I: LexiconImporter + ?Sized,
{
    let mut report = ImportReport::default();
    let total = paths.len();

    for (index, path) in paths.iter().enumerate() {
        debug!(
            service = importer.service_name(),
            file = %path.display(),
            n = index + 1,
            total,
            "submitting lexicon"
        );

        match importer.import_scel(path) {
            Ok(()) => {
                info!(file = %path.display(), "lexicon submitted");
                report.submitted.push(path.clone());
            }
            Err(e) => match policy {
                FailurePolicy::Abort => return Err(e),
                FailurePolicy::Continue => {
                    warn!(file = %path.display(), error = %e, "lexicon import failed, continuing");
                    report.failed.push(FailedImport {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
            },
        }
    }

    Ok(report)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::path::Path;

    use scel_import_core::ImportError;

    use super::*;

    /// Records every call; fails for paths listed in `reject`. Paths are
    /// encoded the same way the bus importer encodes them.
    #[derive(Default)]
    pub(crate) struct RecordingImporter {
        pub calls: RefCell<Vec<PathBuf>>,
        pub reject: Vec<PathBuf>,
    }

    impl LexiconImporter for RecordingImporter {
        fn service_name(&self) -> &str {
            "org.example.Recording"
        }

        fn import_scel(&self, path: &Path) -> Result<()> {
            crate::dbus::bus_arg(path)?;
            self.calls.borrow_mut().push(path.to_path_buf());
            if self.reject.iter().any(|r| r == path) {
                return Err(ImportError::RemoteCall {
                    path: path.to_path_buf(),
                    detail: "org.freedesktop.DBus.Error.Failed: bad lexicon".into(),
                });
            }
            Ok(())
        }
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn imports_in_selection_order() {
        let importer = RecordingImporter::default();
        let selected = paths(&["/d/a.scel", "/d/b.scel", "/d/c.scel"]);

        let report = import_all(&importer, &selected, FailurePolicy::Abort).unwrap();

        assert_eq!(*importer.calls.borrow(), selected);
        assert_eq!(report.submitted, selected);
        assert!(report.is_clean());
    }

    #[test]
    fn empty_selection_makes_no_calls() {
        let importer = RecordingImporter::default();
        let report = import_all(&importer, &[], FailurePolicy::Abort).unwrap();
        assert!(importer.calls.borrow().is_empty());
        assert_eq!(report.attempted(), 0);
    }

    #[test]
    fn abort_stops_at_first_failure() {
        let importer = RecordingImporter {
            reject: paths(&["/d/b.scel"]),
            ..Default::default()
        };
        let selected = paths(&["/d/a.scel", "/d/b.scel", "/d/c.scel"]);

        let err = import_all(&importer, &selected, FailurePolicy::Abort).unwrap_err();

        assert!(matches!(err, ImportError::RemoteCall { ref path, .. } if path == Path::new("/d/b.scel")));
        // a was already submitted, c never attempted
        assert_eq!(*importer.calls.borrow(), paths(&["/d/a.scel", "/d/b.scel"]));
    }

    #[test]
    fn continue_attempts_every_file() {
        let importer = RecordingImporter {
            reject: paths(&["/d/a.scel", "/d/c.scel"]),
            ..Default::default()
        };
        let selected = paths(&["/d/a.scel", "/d/b.scel", "/d/c.scel"]);

        let report = import_all(&importer, &selected, FailurePolicy::Continue).unwrap();

        assert_eq!(*importer.calls.borrow(), selected);
        assert_eq!(report.submitted, paths(&["/d/b.scel"]));
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed[0].path, PathBuf::from("/d/a.scel"));
        assert!(report.failed[1].reason.contains("bad lexicon"));
    }

    #[test]
    fn duplicate_selection_is_submitted_each_time() {
        let importer = RecordingImporter::default();
        let selected = paths(&["/d/a.scel", "/d/a.scel"]);
        import_all(&importer, &selected, FailurePolicy::Abort).unwrap();
        assert_eq!(importer.calls.borrow().len(), 2);
    }
}
