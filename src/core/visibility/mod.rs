pub mod board;
pub mod section_visibility;

pub use board::SectionVisibilityBoard;
pub use section_visibility::{SectionVisibility, VisibilityChange};
