pub mod paint_backdrop;

pub use paint_backdrop::{
    Backdrop, Overlay, PaintBackdropError, TRANSITION_OVERLAY, paint_backdrop_parallel,
};
