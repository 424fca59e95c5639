pub mod json_report;
pub mod listing;
pub mod text_report;

pub use json_report::JsonReportPresenter;
pub use listing::{write_projects, write_sections, write_skills};
pub use text_report::{TextReportPresenter, describe_state};
