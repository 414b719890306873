// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Scel Import.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all Scel Import operations.
#[derive(Debug, Error)]
pub enum ImportError {
    // -- Session bus --
    #[error("session bus error: {0}")]
    Bus(String),

    #[error("import service {name} is not running and could not be started")]
    ServiceUnavailable { name: String },

    #[error("ImportScel failed for {}: {detail}", .path.display())]
    RemoteCall { path: PathBuf, detail: String },

    #[error("path is not valid UTF-8 and cannot be sent over the bus: {}", .0.display())]
    NonUtf8Path(PathBuf),

    // -- Filter --
    #[error("invalid file pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    // -- Configuration / persistence --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ImportError>;
