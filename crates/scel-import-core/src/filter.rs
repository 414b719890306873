// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File-name filter shared by the native dialog and the post-selection check.
//
// Patterns are shell globs matched against the file name only, the same way
// desktop file choosers apply their filters.

use std::path::Path;

use glob::{MatchOptions, Pattern};

use crate::error::Result;

/// Default pattern for Sogou cell lexicons.
pub const SCEL_PATTERN: &str = "*.scel";

/// A named set of glob patterns.
#[derive(Debug, Clone)]
pub struct FileFilter {
    name: String,
    patterns: Vec<Pattern>,
}

impl FileFilter {
    /// Compile a filter. Fails on the first malformed pattern.
    pub fn new<S: AsRef<str>>(name: impl Into<String>, patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.into(),
            patterns,
        })
    }

    /// Label shown next to the filter in the dialog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the file name of `path` matches any pattern.
    ///
    /// A path without a file name (e.g. `/` or `..`) never matches. Names
    /// that are not valid UTF-8 are matched lossily, so `\xff.scel` still
    /// counts as a scel file.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name() else {
            return false;
        };
        let file_name = file_name.to_string_lossy();
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };
        self.patterns
            .iter()
            .any(|p| p.matches_with(&file_name, options))
    }

    /// Extensions for dialog backends that only filter by extension.
    ///
    /// Only patterns of the form `*.ext` translate; anything else is still
    /// enforced by [`FileFilter::matches`] after selection.
    pub fn extensions(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter_map(|p| {
                let ext = p.as_str().strip_prefix("*.")?;
                let plain = !ext.is_empty()
                    && !ext.contains(['*', '?', '[', ']', '.', '/']);
                plain.then(|| ext.to_string())
            })
            .collect()
    }
}
