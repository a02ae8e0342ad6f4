pub mod message;
pub mod report;
pub mod work_order;

pub use message::{Level, Message};
pub use report::{FileResult, FileSummary, RunOutcome, RunReport, Verdict};
pub use work_order::{WorkItem, WorkOrder};
