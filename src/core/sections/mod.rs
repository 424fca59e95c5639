pub mod errors;
pub mod registry;

pub use errors::RegistryError;
pub use registry::{PORTFOLIO_SECTIONS, SectionRegistry};
