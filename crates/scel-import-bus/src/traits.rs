// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Trait seams between the import trigger and the outside world.

use std::path::Path;

use scel_import_core::error::Result;
use scel_import_core::{FileFilter, Selection};

/// A remote service that ingests lexicon files.
pub trait LexiconImporter {
    /// Bus name (or other identifier) of the service, for logging.
    fn service_name(&self) -> &str;

    /// Ask the service to import one file. Blocks until the call returns.
    fn import_scel(&self, path: &Path) -> Result<()>;
}

/// Asks the user for lexicon files.
pub trait FilePicker {
    /// Show a modal multi-select "open" dialog restricted to `filter`.
    /// Returns `Selection::Cancelled` if the user dismissed it.
    fn pick(&self, title: &str, filter: &FileFilter) -> Result<Selection>;
}

impl<T: FilePicker + ?Sized> FilePicker for &T {
    fn pick(&self, title: &str, filter: &FileFilter) -> Result<Selection> {
        (**self).pick(title, filter)
    }
}
