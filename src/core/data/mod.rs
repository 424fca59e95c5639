pub mod colour;
pub mod navigation_state;
pub mod region;
pub mod section;
pub mod section_id;

pub use colour::Colour;
pub use navigation_state::{FULL_OPACITY, NavigationState};
pub use region::Region;
pub use section::Section;
pub use section_id::{SectionId, SectionIdError};
