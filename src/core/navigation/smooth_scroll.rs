use std::time::Duration;

const SNAP_DISTANCE: f32 = 0.5;

/// Eased scroll animation toward a target offset.
///
/// The remaining distance shrinks exponentially with `rate_per_sec`, and the
/// position snaps onto the target once it is closer than half a pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    position: f32,
    target: Option<f32>,
    rate_per_sec: f32,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(rate_per_sec: f32) -> Self {
        Self {
            position: 0.0,
            target: None,
            rate_per_sec,
        }
    }

    pub fn scroll_to(&mut self, target: f32) {
        self.target = Some(target.max(0.0));
    }

    /// Adopts a position reported by the user's own scrolling and drops any
    /// animation in progress.
    pub fn sync(&mut self, position: f32) {
        self.position = position;
        self.target = None;
    }

    /// Advances the animation and returns the new position.
    pub fn step(&mut self, elapsed: Duration) -> f32 {
        let Some(target) = self.target else {
            return self.position;
        };

        let keep = (-self.rate_per_sec * elapsed.as_secs_f32()).exp();
        let next = target + (self.position - target) * keep;

        if !next.is_finite() || (next - target).abs() < SNAP_DISTANCE {
            self.position = target;
            self.target = None;
        } else {
            self.position = next;
        }

        self.position
    }

    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(12.0)
    }
}
