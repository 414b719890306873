// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The import trigger: service handle first, then the dialog, then one
// remote call per selected file.

use scel_import_core::config::{AppConfig, ServiceConfig};
use scel_import_core::error::Result;
use scel_import_core::{FailurePolicy, FileFilter, ImportReport, Selection};
use tracing::{info, warn};

use crate::import::import_all;
use crate::traits::{FilePicker, LexiconImporter};

/// How a trigger run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Dialog dismissed, nothing submitted.
    Cancelled,
    Imported(ImportReport),
}

pub struct ImportTrigger<I, P> {
    importer: I,
    picker: P,
    title: String,
    filter: FileFilter,
    policy: FailurePolicy,
}

impl<I: LexiconImporter, P: FilePicker> ImportTrigger<I, P> {
    /// Obtain the service handle via `connect`, then prepare the dialog.
    ///
    /// `connect` runs before anything else so an unreachable service fails
    /// the process before a dialog is ever shown.
    pub fn connect<F>(config: &AppConfig, connect: F, picker: P) -> Result<Self>
    where
        F: FnOnce(&ServiceConfig) -> Result<I>,
    {
        let importer = connect(&config.service)?;
        let filter = config.dialog.filter()?;
        Ok(Self {
            importer,
            picker,
            title: config.dialog.title.clone(),
            filter,
            policy: config.on_failure,
        })
    }

    /// Show the dialog and import whatever the user confirmed.
    pub fn run(&self) -> Result<TriggerOutcome> {
        let paths = match self.picker.pick(&self.title, &self.filter)? {
            Selection::Cancelled => {
                info!("dialog cancelled, nothing to import");
                return Ok(TriggerOutcome::Cancelled);
            }
            Selection::Confirmed(paths) => paths,
        };

        // Toolkits let users type a name past the filter. Whatever the dialog
        // returned is still submitted; the service decides what it accepts.
        for path in paths.iter().filter(|p| !self.filter.matches(p)) {
            warn!(file = %path.display(), filter = self.filter.name(), "file outside filter, submitting anyway");
        }

        info!(
            count = paths.len(),
            service = self.importer.service_name(),
            "importing lexicons"
        );
        let report = import_all(&self.importer, &paths, self.policy)?;
        Ok(TriggerOutcome::Imported(report))
    }
}
