#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend; `t = 0` is `self`, `t = 1` is `other`. `t` is clamped.
    #[must_use]
    pub fn mix(self, other: Self, t: f32) -> Self {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let channel = |a: u8, b: u8| -> u8 {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
        };

        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Colour;

    const BLACK: Colour = Colour::new(0, 0, 0);
    const WHITE: Colour = Colour::new(255, 255, 255);

    #[test]
    fn mix_endpoints() {
        assert_eq!(BLACK.mix(WHITE, 0.0), BLACK);
        assert_eq!(BLACK.mix(WHITE, 1.0), WHITE);
    }

    #[test]
    fn mix_midpoint_rounds() {
        assert_eq!(BLACK.mix(WHITE, 0.5), Colour::new(128, 128, 128));
    }

    #[test]
    fn mix_clamps_out_of_range_factors() {
        assert_eq!(BLACK.mix(WHITE, 2.0), WHITE);
        assert_eq!(BLACK.mix(WHITE, -1.0), BLACK);
        assert_eq!(BLACK.mix(WHITE, f32::NAN), BLACK);
    }
}
