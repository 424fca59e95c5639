pub mod navigation;
pub mod tour;
