// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Scel Import — session-bus plumbing.
//!
//! Defines the seams the import trigger talks through (`LexiconImporter`
//! for the remote service, `FilePicker` for the dialog), the D-Bus
//! implementation of the importer, and the sequential import loop.

pub mod dbus;
pub mod import;
pub mod traits;
pub mod trigger;

pub use dbus::DbusImporter;
pub use import::import_all;
pub use traits::{FilePicker, LexiconImporter};
pub use trigger::{ImportTrigger, TriggerOutcome};
