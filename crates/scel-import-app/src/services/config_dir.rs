// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// XDG-aware config file resolution.

use std::ffi::OsString;
use std::path::PathBuf;

use scel_import_core::config::CONFIG_FILE;

const APP_DIR: &str = "scel-import";

/// Path of the config file. The file itself may not exist.
pub fn config_file() -> PathBuf {
    config_base(std::env::var_os("XDG_CONFIG_HOME"), std::env::var_os("HOME"))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

fn config_base(xdg: Option<OsString>, home: Option<OsString>) -> PathBuf {
    // XDG says relative values are invalid and must be ignored
    if let Some(xdg) = xdg.map(PathBuf::from).filter(|p| p.is_absolute()) {
        return xdg;
    }
    if let Some(home) = home.filter(|h| !h.is_empty()) {
        return PathBuf::from(home).join(".config");
    }
    // Last resort
    PathBuf::from("/tmp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_wins() {
        let base = config_base(Some("/xdg".into()), Some("/home/u".into()));
        assert_eq!(base, PathBuf::from("/xdg"));
    }

    #[test]
    fn relative_xdg_falls_back_to_home() {
        let base = config_base(Some("relative/cfg".into()), Some("/home/u".into()));
        assert_eq!(base, PathBuf::from("/home/u/.config"));
    }

    #[test]
    fn nothing_set() {
        assert_eq!(config_base(None, None), PathBuf::from("/tmp"));
        assert_eq!(config_base(Some("".into()), Some("".into())), PathBuf::from("/tmp"));
    }
}
