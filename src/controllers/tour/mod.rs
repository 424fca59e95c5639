//! Scripted navigation tours on a virtual clock.
//!
//! A tour is a list of [`TourStep`]s (nav clicks, scroll positions, waits)
//! replayed against the headless page. Every state change is recorded with
//! its virtual timestamp in the [`TourReport`].

pub mod ports;
mod report;
mod runner;
mod step;

pub use report::{StateChange, StepOutcome, StepRecord, TourReport};
pub use runner::TourRunner;
pub use step::{DEFAULT_TOUR, TourStep, TourStepError, parse_steps};
