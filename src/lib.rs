//! GDI validator: judges each file of a work order against one rule and
//! writes a standardized run report.
//!
//! ```no_run
//! use gdi_validator::config::ValidatorConfig;
//! use gdi_validator::rules::WordCountRule;
//! use gdi_validator::runner;
//!
//! let config = ValidatorConfig::default();
//! let report = runner::execute(&config, &WordCountRule::from_config(&config))
//!     .expect("report could not be written");
//! println!("{}", report.result);
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod models;
pub mod rules;
pub mod runner;
