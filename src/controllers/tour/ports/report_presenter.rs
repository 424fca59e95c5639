use crate::controllers::tour::report::TourReport;
use std::io::{self, Write};

/// Output adapter for a finished tour.
pub trait TourReportPresenterPort {
    fn present(&self, report: &TourReport, out: &mut dyn Write) -> io::Result<()>;
}
