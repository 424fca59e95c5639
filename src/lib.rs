pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod logging;
pub mod presenters;

pub use config::{ConfigError, PortfolioConfig};
pub use controllers::navigation::{
    Clock, ManualClock, NavigationController, NavigationRequest, NavigationSetupError,
    NavigationStatePort, PageHost, PassiveUpdate, SubscriptionId, SystemClock,
};
pub use controllers::tour::{TourReport, TourRunner, TourStep, TourStepError};
pub use crate::core::data::{NavigationState, Region, Section, SectionId};
pub use crate::core::navigation::{PassiveScrollPolicy, TransitionTimings};
pub use crate::core::sections::{RegistryError, SectionRegistry};
pub use crate::core::visibility::{SectionVisibility, SectionVisibilityBoard};
pub use presenters::console::{JsonReportPresenter, TextReportPresenter};
pub use presenters::headless::StaticPage;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
