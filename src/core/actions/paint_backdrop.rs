use rayon::prelude::*;
use thiserror::Error;

use crate::core::data::Colour;

const BYTES_PER_PIXEL: usize = 4;

/// Gradient pairs per section ordinal; ordinals past the end wrap around.
const SECTION_PALETTE: &[(Colour, Colour)] = &[
    (Colour::new(15, 23, 42), Colour::new(30, 58, 138)),
    (Colour::new(17, 24, 39), Colour::new(55, 48, 163)),
    (Colour::new(20, 20, 30), Colour::new(88, 28, 135)),
    (Colour::new(12, 30, 36), Colour::new(14, 116, 144)),
    (Colour::new(24, 24, 27), Colour::new(21, 128, 61)),
    (Colour::new(28, 25, 23), Colour::new(180, 83, 9)),
];

/// Tint drawn over the whole page while a transition is in flight.
pub const TRANSITION_OVERLAY: Overlay = Overlay {
    colour: Colour::new(37, 99, 235),
    alpha: 0.1,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaintBackdropError {
    #[error("frame holds {actual} bytes but {width}x{height} RGBA needs {expected}")]
    FrameSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub colour: Colour,
    pub alpha: f32,
}

/// Vertical gradient behind the page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub top: Colour,
    pub bottom: Colour,
    /// Colour the gradient fades toward as section opacity drops.
    pub base: Colour,
}

impl Backdrop {
    #[must_use]
    pub fn for_section(ordinal: usize) -> Self {
        let (top, bottom) = SECTION_PALETTE[ordinal % SECTION_PALETTE.len()];

        Self {
            top,
            bottom,
            base: Colour::new(8, 8, 12),
        }
    }

    #[must_use]
    pub fn colour_at(
        &self,
        y: u32,
        height: u32,
        section_opacity: f32,
        overlay: Option<Overlay>,
    ) -> Colour {
        let t = if height > 1 {
            y as f32 / (height - 1) as f32
        } else {
            0.0
        };

        let gradient = self.top.mix(self.bottom, t);
        let faded = self.base.mix(gradient, section_opacity);

        match overlay {
            Some(overlay) => faded.mix(overlay.colour, overlay.alpha),
            None => faded,
        }
    }
}

/// Fills an RGBA frame with the backdrop, one row per rayon task.
pub fn paint_backdrop_parallel(
    frame: &mut [u8],
    width: u32,
    height: u32,
    backdrop: &Backdrop,
    section_opacity: f32,
    overlay: Option<Overlay>,
) -> Result<(), PaintBackdropError> {
    let row_bytes = width as usize * BYTES_PER_PIXEL;
    let expected = row_bytes * height as usize;

    if frame.len() != expected {
        return Err(PaintBackdropError::FrameSizeMismatch {
            width,
            height,
            expected,
            actual: frame.len(),
        });
    }

    if expected == 0 {
        return Ok(());
    }

    frame
        .par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            let colour = backdrop.colour_at(y as u32, height, section_opacity, overlay);

            for pixel in row.chunks_exact_mut(BYTES_PER_PIXEL) {
                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
                pixel[3] = 255;
            }
        });

    Ok(())
}
