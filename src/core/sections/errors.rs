use crate::core::data::SectionId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a page needs at least one section")]
    Empty,
    #[error("section {0} is registered more than once")]
    DuplicateId(SectionId),
}
