//! Navigation controller for the single-page portfolio.
//!
//! Owns the one mutable [`NavigationState`](crate::core::data::NavigationState)
//! record and turns nav clicks and scroll positions into state changes.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: `navigate_to_section` for clicks, `observe_scroll` for passive
//!   tracking, `pump` to fire deferred transition steps
//! - **Output**: `NavigationStatePort` subscribers and `PageHost::smooth_scroll_to`
//! - **Core**: phases, timings and scroll detection from `core::navigation`

mod controller;
pub mod errors;
pub mod ports;
mod timer_queue;

pub use controller::{NavigationController, NavigationRequest, PassiveUpdate};
pub use errors::NavigationSetupError;
pub use ports::{Clock, ManualClock, NavigationStatePort, PageHost, SubscriptionId, SystemClock};
pub use timer_queue::TimerQueue;
