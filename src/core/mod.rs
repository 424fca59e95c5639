pub mod actions;
pub mod content;
pub mod data;
pub mod navigation;
pub mod sections;
pub mod visibility;
