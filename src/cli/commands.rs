pub mod report;
pub mod serve;

pub use report::{report, ReportFormat};
pub use serve::serve;
