pub mod report_writer;

pub use report_writer::{Report, ReportWriter};
