//! Port definitions for the navigation controller.
//!
//! The controller reads time through [`Clock`], measures and scrolls the page
//! through [`PageHost`], and publishes state through [`NavigationStatePort`].

pub mod clock;
pub mod page_host;
pub mod state_observer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use page_host::PageHost;
pub use state_observer::{NavigationStatePort, SubscriptionId};
