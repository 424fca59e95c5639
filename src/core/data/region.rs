/// Vertical extent of a rendered section, measured from the page origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f32,
    pub height: f32,
}

impl Region {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }
}
