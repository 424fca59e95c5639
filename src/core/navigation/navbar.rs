/// Scroll distance after which the navbar switches to its solid style.
pub const SCROLLED_THRESHOLD: f32 = 50.0;

/// Local navbar presentation state. It never touches navigation state; clicks
/// are forwarded to the controller by the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavbarState {
    scrolled: bool,
    menu_open: bool,
}

impl NavbarState {
    pub fn observe_scroll(&mut self, scroll_y: f32) {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Called after a nav item was clicked.
    pub fn on_nav_click(&mut self) {
        self.menu_open = false;
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}
