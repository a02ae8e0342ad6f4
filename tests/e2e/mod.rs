//! End-to-end tests for the GDI validator
//!
//! Each test builds a throwaway mount layout in a temp directory and drives
//! the validate/describe commands against it.

pub mod cli;
pub mod describe_mode;
pub mod helpers;
pub mod idempotence;

pub use helpers::*;
