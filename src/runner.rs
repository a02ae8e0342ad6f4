//! Validation runner
//!
//! Reads the work order, judges every file with a [`Rule`], aggregates the
//! per-file verdicts and persists the run report.
//!
//! Faults are split into three tiers:
//! - a file that cannot be judged becomes a failed [`FileResult`]
//! - a run that cannot proceed becomes a failed [`RunReport`] with no files
//! - a report that cannot be written is returned as [`ValidatorError`]

use std::any::Any;
use std::fs;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::config::ValidatorConfig;
use crate::error::{RuleError, RunFault, ValidatorError};
use crate::models::{FileResult, Message, RunOutcome, RunReport, WorkOrder};
use crate::rules::{Evaluation, Rule};

/// Run a full validation and persist the report at `config.output_path`.
///
/// Returns the written report. An `Err` means nothing could be delivered.
pub fn execute<R: Rule + ?Sized>(
    config: &ValidatorConfig,
    rule: &R,
) -> Result<RunReport, ValidatorError> {
    let report = run(config, rule);
    write_report(&report, &config.output_path)?;

    info!(
        result = %report.result,
        output = %config.output_path.display(),
        "Run report written"
    );
    Ok(report)
}

/// Produce the run report without writing it.
pub fn run<R: Rule + ?Sized>(config: &ValidatorConfig, rule: &R) -> RunReport {
    let started = vec![Message::info(format!("{} started.", rule.name()))];

    let files = read_work_order(&config.input_path).and_then(|order| validate_files(&order, rule));

    match files {
        Ok(files) => {
            let mut report = RunReport::from_outcome(RunOutcome::Completed(files), started);
            let summary = report.summary();
            info!(
                passed = summary.passed,
                failed = summary.failed,
                "Validation completed"
            );
            report.messages.push(Message::info(summary.to_string()));
            report
        }
        Err(fault) => {
            warn!(error = %fault, "Validation run aborted");
            RunReport::from_outcome(RunOutcome::Crashed(fault), started)
        }
    }
}

/// Load and parse the work order, requiring a non-empty `files` list.
pub fn read_work_order(path: &Path) -> Result<WorkOrder, RunFault> {
    info!(input = %path.display(), "Reading work order");

    let json = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => RunFault::InputMissing {
            path: path.to_path_buf(),
        },
        _ => RunFault::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let order = WorkOrder::from_json(&json)?;
    if order.items().is_empty() {
        return Err(RunFault::EmptyFileList);
    }

    debug!(items = order.items().len(), "Work order parsed");
    Ok(order)
}

/// Judge each usable work item in input order.
///
/// Items without a path are skipped. A list that yields no file results at
/// all is treated like an empty list.
pub fn validate_files<R: Rule + ?Sized>(
    order: &WorkOrder,
    rule: &R,
) -> Result<Vec<FileResult>, RunFault> {
    let mut results = Vec::with_capacity(order.items().len());

    for (index, item) in order.items().iter().enumerate() {
        let Some(path) = item.usable_path() else {
            warn!(index, "Skipping work item without a path");
            continue;
        };
        results.push(validate_file(rule, path));
    }

    if results.is_empty() {
        return Err(RunFault::NoUsableFiles);
    }
    Ok(results)
}

/// Judge one file. Never fails: every fault ends up in the file's messages.
pub fn validate_file<R: Rule + ?Sized>(rule: &R, path: &str) -> FileResult {
    let evaluation = panic::catch_unwind(AssertUnwindSafe(|| rule.evaluate(Path::new(path))))
        .unwrap_or_else(|payload| {
            Err(RuleError::Panicked {
                message: panic_message(payload.as_ref()),
            })
        });

    let result = match evaluation {
        Ok(Evaluation::Pass(text)) => FileResult::passed(path, Message::info(text)),
        Ok(Evaluation::Fail(text)) => FileResult::failed(path, Message::error(text)),
        Err(RuleError::NotAFile { .. }) => FileResult::failed(
            path,
            Message::error(format!("File not found or inaccessible: {path}")),
        ),
        Err(e) => FileResult::failed(
            path,
            Message::error(format!("Unexpected error during validation: {e}")),
        ),
    };

    debug!(path, result = %result.result, "File evaluated");
    result
}

/// Serialize the report and write it, creating missing parent directories.
pub fn write_report(report: &RunReport, path: &Path) -> Result<(), ValidatorError> {
    let json = report.to_json_pretty()?;

    let write = || -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)
    };

    write().map_err(|source| {
        error!(output = %path.display(), error = %source, "Failed to write run report");
        ValidatorError::ReportWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
