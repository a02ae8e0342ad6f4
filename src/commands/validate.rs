//! Validate command - runs the word-count rule over the work order

use anyhow::{Context, Result};

use crate::config::ValidatorConfig;
use crate::models::RunReport;
use crate::rules::WordCountRule;
use crate::runner;

/// Execute validation mode.
///
/// A failed validation is still `Ok`: only a report that could not be
/// written is an error.
pub fn execute(config: &ValidatorConfig) -> Result<RunReport> {
    let rule = WordCountRule::from_config(config);
    runner::execute(config, &rule).context("Critical Error")
}
