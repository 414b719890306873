// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native file picker backed by rfd (GTK or the XDG desktop portal on Linux).

use std::path::{Path, PathBuf};

use scel_import_bus::FilePicker;
use scel_import_core::error::Result;
use scel_import_core::{FileFilter, Selection};
use tracing::{debug, warn};

/// Modal multi-select "open" dialog.
pub struct RfdPicker {
    start_dir: Option<PathBuf>,
}

impl RfdPicker {
    pub fn new(start_dir: Option<PathBuf>) -> Self {
        Self { start_dir }
    }

    /// Configured start directory, if it still exists.
    fn usable_start_dir(&self) -> Option<&Path> {
        let dir = self.start_dir.as_deref()?;
        if dir.is_dir() {
            Some(dir)
        } else {
            warn!(dir = %dir.display(), "start directory missing, using toolkit default");
            None
        }
    }
}

impl FilePicker for RfdPicker {
    fn pick(&self, title: &str, filter: &FileFilter) -> Result<Selection> {
        let mut dialog = rfd::FileDialog::new().set_title(title);

        let extensions = filter.extensions();
        if !extensions.is_empty() {
            dialog = dialog.add_filter(filter.name(), extensions.as_slice());
        }
        if let Some(dir) = self.usable_start_dir() {
            dialog = dialog.set_directory(dir);
        }

        debug!(title, filter = filter.name(), ?extensions, "opening file dialog");
        Ok(match dialog.pick_files() {
            Some(paths) => Selection::Confirmed(paths),
            None => Selection::Cancelled,
        })
    }
}
