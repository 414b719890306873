// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scel Import — core types, configuration, and error definitions shared
// across all crates.

pub mod config;
pub mod error;
pub mod filter;
pub mod types;

pub use config::AppConfig;
pub use error::ImportError;
pub use filter::FileFilter;
pub use types::*;
