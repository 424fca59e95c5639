use egui::Context as EguiContext;

/// What the backdrop behind the page should show this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropScene {
    pub section_ordinal: usize,
    pub section_opacity: f32,
    pub is_transitioning: bool,
}

pub trait GuiPresenterPort {
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
        scene: BackdropScene,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
