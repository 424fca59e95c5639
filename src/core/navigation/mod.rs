pub mod navbar;
pub mod phase;
pub mod policy;
pub mod scroll_detection;
pub mod smooth_scroll;
pub mod timings;

pub use navbar::NavbarState;
pub use phase::{TransitionPhase, TransitionStep};
pub use policy::PassiveScrollPolicy;
pub use scroll_detection::detect_section;
pub use smooth_scroll::SmoothScroll;
pub use timings::TransitionTimings;
