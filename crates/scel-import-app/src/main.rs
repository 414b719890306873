// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scel Import — pick .scel lexicons and hand them to Cloud Pinyin.
//
// Entry point. Loads config, initialises logging, connects to the import
// service, then shows the file dialog.

mod services;

use std::process::ExitCode;

use scel_import_bus::{DbusImporter, ImportTrigger, TriggerOutcome};
use scel_import_core::error::Result;
use scel_import_core::AppConfig;
use tracing_subscriber::EnvFilter;

use services::config_dir;
use services::picker::RfdPicker;

fn main() -> ExitCode {
    let config_path = config_dir::config_file();
    let loaded = AppConfig::load(&config_path);

    let default_level = loaded
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!(path = %config_path.display(), error = %e, "ignoring unreadable config");
        AppConfig::default()
    });

    tracing::info!(config = %config_path.display(), "Scel Import starting");

    exit_status(&run(&config))
}

/// Log how the run ended and map it to the process exit status.
fn exit_status(outcome: &Result<TriggerOutcome>) -> ExitCode {
    if run_succeeded(outcome) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_succeeded(outcome: &Result<TriggerOutcome>) -> bool {
    match outcome {
        Ok(TriggerOutcome::Cancelled) => true,
        Ok(TriggerOutcome::Imported(report)) if report.is_clean() => {
            tracing::info!(count = report.submitted.len(), "all lexicons submitted");
            true
        }
        Ok(TriggerOutcome::Imported(report)) => {
            for failed in &report.failed {
                tracing::error!(file = %failed.path.display(), reason = %failed.reason, "lexicon not imported");
            }
            tracing::error!(
                attempted = report.attempted(),
                failed = report.failed.len(),
                "some lexicons failed to import"
            );
            false
        }
        Err(e) => {
            tracing::error!(error = %e, "import aborted");
            false
        }
    }
}

/// Service handle first, dialog second.
fn run(config: &AppConfig) -> Result<TriggerOutcome> {
    let picker = RfdPicker::new(config.dialog.start_dir.clone());
    let trigger = ImportTrigger::connect(config, DbusImporter::connect, picker)?;
    trigger.run()
}

#[cfg(test)]
mod tests {
    use scel_import_core::{FailedImport, ImportError, ImportReport};

    use super::*;

    #[test]
    fn cancelled_run_succeeds() {
        assert!(run_succeeded(&Ok(TriggerOutcome::Cancelled)));
    }

    #[test]
    fn clean_report_succeeds() {
        let report = ImportReport {
            submitted: vec!["/x/a.scel".into()],
            failed: Vec::new(),
        };
        assert!(run_succeeded(&Ok(TriggerOutcome::Imported(report))));
        assert!(run_succeeded(&Ok(TriggerOutcome::Imported(ImportReport::default()))));
    }

    #[test]
    fn partial_failure_fails() {
        let report = ImportReport {
            submitted: vec!["/x/a.scel".into()],
            failed: vec![FailedImport {
                path: "/x/b.scel".into(),
                reason: "not a scel lexicon".into(),
            }],
        };
        assert!(!run_succeeded(&Ok(TriggerOutcome::Imported(report))));
    }

    #[test]
    fn error_fails() {
        let outcome = Err(ImportError::ServiceUnavailable {
            name: "org.ibus.CloudPinyin".into(),
        });
        assert!(!run_succeeded(&outcome));
        let _ = exit_status(&outcome);
    }
}
