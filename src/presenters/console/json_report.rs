use crate::controllers::tour::ports::TourReportPresenterPort;
use crate::controllers::tour::TourReport;
use std::io::{self, Write};

/// Pretty-printed JSON tour report.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReportPresenter {}

impl JsonReportPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl TourReportPresenterPort for JsonReportPresenter {
    fn present(&self, report: &TourReport, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortfolioConfig;
    use crate::controllers::tour::{TourRunner, parse_steps};

    #[test]
    fn writes_parseable_json() {
        let config = PortfolioConfig::builtin().unwrap();
        let runner = TourRunner::new(
            config.registry().unwrap(),
            config.navigation.timings,
            config.navigation.passive_scroll,
            config.static_page(),
        )
        .unwrap();
        let report = runner
            .run(&parse_steps(["click contact", "wait 700"]).unwrap())
            .unwrap();
        let mut out = Vec::new();

        JsonReportPresenter::new().present(&report, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["final_state"]["current_section"], "contact");
        assert_eq!(json["final_state"]["is_transitioning"], false);
        assert_eq!(json["steps"][0]["step"]["step"], "click");
        assert_eq!(json["steps"][0]["outcome"]["outcome"], "started");
        assert_eq!(json["steps"][1]["step"]["arg"], "700ms");
        assert_eq!(json["steps"][1]["changes"].as_array().map(Vec::len), Some(3));
    }
}
