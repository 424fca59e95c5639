pub mod report_presenter;

pub use report_presenter::TourReportPresenterPort;
