// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::filter::{FileFilter, SCEL_PATTERN};
use crate::types::FailurePolicy;

/// File name of the persisted config inside the config directory.
pub const CONFIG_FILE: &str = "config.json";

/// Where the remote import service lives on the session bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Well-known bus name.
    pub bus_name: String,
    pub object_path: String,
    pub interface: String,
    /// Ask the bus daemon to activate the service if nobody owns the name.
    pub autostart: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bus_name: "org.ibus.CloudPinyin".into(),
            object_path: "/org/ibus/CloudPinyin".into(),
            interface: "org.ibus.CloudPinyin".into(),
            autostart: true,
        }
    }
}

/// Appearance and filtering of the file dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub title: String,
    /// Label of the file-type filter.
    pub filter_name: String,
    /// Glob patterns matched against file names.
    pub patterns: Vec<String>,
    /// Directory the dialog opens in. Toolkit default when unset.
    pub start_dir: Option<PathBuf>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: "导入一个或多个 scel 词库".into(),
            filter_name: "Scel Files".into(),
            patterns: vec![SCEL_PATTERN.into()],
            start_dir: None,
        }
    }
}

impl DialogConfig {
    /// Compile the configured patterns.
    pub fn filter(&self) -> Result<FileFilter> {
        FileFilter::new(self.filter_name.clone(), &self.patterns)
    }
}

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub dialog: DialogConfig,
    /// Behaviour when one file fails to import.
    pub on_failure: FailurePolicy,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            dialog: DialogConfig::default(),
            on_failure: FailurePolicy::default(),
            log_level: "info".into(),
        }
    }
}

impl AppConfig {
    /// Read a config file. A missing file yields the defaults; a malformed one
    /// is an error the caller decides how to surface.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&data)?)
    }

    /// Write the config as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
