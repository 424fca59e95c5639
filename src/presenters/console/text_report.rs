use crate::controllers::tour::ports::TourReportPresenterPort;
use crate::controllers::tour::TourReport;
use crate::core::data::NavigationState;
use std::io::{self, Write};

/// Human-readable tour transcript, one line per step and per state change.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReportPresenter {}

impl TextReportPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

pub fn describe_state(state: &NavigationState) -> String {
    let phase = if state.is_transitioning {
        "transitioning"
    } else {
        "idle"
    };

    format!(
        "current={} previous={} {phase} opacity={:.2}",
        state.current_section, state.previous_section, state.section_opacity
    )
}

impl TourReportPresenterPort for TextReportPresenter {
    fn present(&self, report: &TourReport, out: &mut dyn Write) -> io::Result<()> {
        for record in &report.steps {
            writeln!(
                out,
                "{:>6}ms  {:<20} {}",
                record.at_ms,
                record.step.to_string(),
                record.outcome
            )?;

            for change in &record.changes {
                writeln!(out, "{:>6}ms    {}", change.at_ms, describe_state(&change.state))?;
            }
        }

        writeln!(out)?;
        writeln!(out, "final:   {}", describe_state(&report.final_state))?;
        writeln!(out, "scroll:  {}", report.scroll_y)?;

        let visible: Vec<&str> = report
            .visible_sections
            .iter()
            .map(|section| section.as_str())
            .collect();
        writeln!(out, "visible: {}", visible.join(", "))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortfolioConfig;
    use crate::controllers::tour::{TourRunner, parse_steps};

    fn report(steps: &[&str]) -> TourReport {
        let config = PortfolioConfig::builtin().unwrap();
        let runner = TourRunner::new(
            config.registry().unwrap(),
            config.navigation.timings,
            config.navigation.passive_scroll,
            config.static_page(),
        )
        .unwrap();

        runner.run(&parse_steps(steps).unwrap()).unwrap()
    }

    #[test]
    fn prints_steps_changes_and_summary() {
        let report = report(&["click about", "wait 700"]);
        let mut out = Vec::new();

        TextReportPresenter::new().present(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("click about"));
        assert!(text.contains("transition 1 started"));
        assert!(text.contains("3 steps fired"));
        assert!(text.contains("current=home previous=home transitioning opacity=0.30"));
        assert!(text.contains("final:   current=about previous=home idle opacity=1.00"));
        assert!(text.contains("visible: home, about"));
    }
}
