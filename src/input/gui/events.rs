/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The navigation state changed; the page needs a redraw.
    NavigationChanged,
}
