//! Work order schema (the validator's input artifact)
//!
//! ```json
//! { "files": [ { "path": "/data/a.txt" }, ... ] }
//! ```

use serde::Deserialize;

/// The list of files an orchestrator asks the validator to judge
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkOrder {
    /// `null` and a missing key are both read as an empty list
    #[serde(default)]
    pub files: Option<Vec<WorkItem>>,
}

/// One entry of the work order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkItem {
    #[serde(default)]
    pub path: Option<String>,
}

impl WorkOrder {
    /// Parse a work order, rejecting documents that do not fit the schema
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Declared work items in input order
    pub fn items(&self) -> &[WorkItem] {
        self.files.as_deref().unwrap_or(&[])
    }
}

impl WorkItem {
    /// The path to validate, or `None` when missing or empty
    pub fn usable_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }
}
