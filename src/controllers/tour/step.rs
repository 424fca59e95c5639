use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourStepError {
    #[error("empty tour step")]
    Empty,
    #[error("unknown tour step {0:?}, expected click, scroll, wait or section")]
    UnknownVerb(String),
    #[error("tour step {0:?} needs one argument")]
    WrongArity(String),
    #[error("invalid scroll position {0:?}")]
    InvalidScroll(String),
    #[error("invalid wait {0:?}, expected milliseconds")]
    InvalidWait(String),
    #[error("section {0:?} is not on the page")]
    UnknownSection(String),
}

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", content = "arg", rename_all = "kebab-case")]
pub enum TourStep {
    /// Nav click on a section id. Unknown ids are passed through.
    Click(String),
    /// Set the page's scroll position.
    Scroll(f32),
    /// Advance the virtual clock.
    Wait(#[serde(with = "humantime_serde")] Duration),
    /// Scroll straight to a section's top offset.
    Section(String),
}

impl FromStr for TourStep {
    type Err = TourStepError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut words = value.split_whitespace();
        let verb = words.next().ok_or(TourStepError::Empty)?.to_ascii_lowercase();

        if !matches!(verb.as_str(), "click" | "section" | "scroll" | "wait") {
            return Err(TourStepError::UnknownVerb(verb));
        }

        let arg = match (words.next(), words.next()) {
            (Some(arg), None) => arg,
            _ => return Err(TourStepError::WrongArity(value.trim().to_string())),
        };

        match verb.as_str() {
            "click" => Ok(Self::Click(arg.to_string())),
            "section" => Ok(Self::Section(arg.to_string())),
            "scroll" => arg
                .parse::<f32>()
                .ok()
                .filter(|y| y.is_finite())
                .map(Self::Scroll)
                .ok_or_else(|| TourStepError::InvalidScroll(arg.to_string())),
            _ => arg
                .trim_end_matches("ms")
                .parse::<u64>()
                .map(|ms| Self::Wait(Duration::from_millis(ms)))
                .map_err(|_| TourStepError::InvalidWait(arg.to_string())),
        }
    }
}

impl fmt::Display for TourStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Click(id) => write!(f, "click {id}"),
            Self::Scroll(y) => write!(f, "scroll {y}"),
            Self::Wait(duration) => write!(f, "wait {}", duration.as_millis()),
            Self::Section(id) => write!(f, "section {id}"),
        }
    }
}

/// Walkthrough used when no steps are given: a full transition, ignored
/// requests, passive scrolling and an aborted jump to a missing section.
pub const DEFAULT_TOUR: &[&str] = &[
    "click projects",
    "click about",
    "wait 100",
    "wait 200",
    "wait 400",
    "click projects",
    "section skills",
    "scroll 0",
    "click blog",
    "wait 100",
    "click contact",
    "wait 700",
];

pub fn parse_steps<I, S>(steps: I) -> Result<Vec<TourStep>, TourStepError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    steps.into_iter().map(|step| step.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_verb() {
        assert_eq!("click projects".parse(), Ok(TourStep::Click("projects".into())));
        assert_eq!("scroll 1250.5".parse(), Ok(TourStep::Scroll(1250.5)));
        assert_eq!("wait 700".parse(), Ok(TourStep::Wait(Duration::from_millis(700))));
        assert_eq!("wait 50ms".parse(), Ok(TourStep::Wait(Duration::from_millis(50))));
        assert_eq!("section skills".parse(), Ok(TourStep::Section("skills".into())));
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!("CLICK home".parse(), Ok(TourStep::Click("home".into())));
    }

    #[test]
    fn rejects_malformed_steps() {
        assert_eq!("   ".parse::<TourStep>(), Err(TourStepError::Empty));
        assert_eq!(
            "jump home".parse::<TourStep>(),
            Err(TourStepError::UnknownVerb("jump".into()))
        );
        assert_eq!(
            "click".parse::<TourStep>(),
            Err(TourStepError::WrongArity("click".into()))
        );
        assert_eq!(
            "click home about".parse::<TourStep>(),
            Err(TourStepError::WrongArity("click home about".into()))
        );
        assert_eq!(
            "scroll down".parse::<TourStep>(),
            Err(TourStepError::InvalidScroll("down".into()))
        );
        assert_eq!(
            "scroll NaN".parse::<TourStep>(),
            Err(TourStepError::InvalidScroll("NaN".into()))
        );
        assert_eq!(
            "wait -5".parse::<TourStep>(),
            Err(TourStepError::InvalidWait("-5".into()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for raw in DEFAULT_TOUR {
            let step: TourStep = raw.parse().unwrap();

            assert_eq!(step.to_string(), *raw);
        }
    }

    #[test]
    fn parse_steps_stops_at_first_error() {
        let result = parse_steps(["click home", "hop", "wait nope"]);

        assert_eq!(result, Err(TourStepError::UnknownVerb("hop".into())));
    }

    #[test]
    fn unknown_verb_is_reported_before_arity() {
        assert_eq!("hop".parse::<TourStep>(), Err(TourStepError::UnknownVerb("hop".into())));
        assert_eq!(
            "jump a b".parse::<TourStep>(),
            Err(TourStepError::UnknownVerb("jump".into()))
        );
    }

    #[test]
    fn known_verb_with_wrong_arity() {
        assert_eq!("click".parse::<TourStep>(), Err(TourStepError::WrongArity("click".into())));
        assert_eq!(
            "wait 1 2".parse::<TourStep>(),
            Err(TourStepError::WrongArity("wait 1 2".into()))
        );
        assert_eq!("   ".parse::<TourStep>(), Err(TourStepError::Empty));
    }

    #[test]
    fn serializes_as_tagged_json() {
        let json = serde_json::to_string(&TourStep::Click("about".into())).unwrap();

        assert_eq!(json, r#"{"step":"click","arg":"about"}"#);
    }
}
