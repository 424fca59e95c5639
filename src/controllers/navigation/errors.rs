use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationSetupError {
    #[error("dimmed opacity must be within 0..=1, got {0}")]
    DimmedOpacityOutOfRange(f32),
    #[error("navbar offset must be finite, got {0}")]
    NonFiniteNavbarOffset(f32),
}
