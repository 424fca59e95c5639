use crate::core::actions::paint_backdrop::{Backdrop, TRANSITION_OVERLAY, paint_backdrop_parallel};
use crate::input::gui::app::ports::presenter::{BackdropScene, GuiPresenterPort};
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use tracing::warn;
use winit::window::Window;

/// Paints the section backdrop into the pixels framebuffer and draws egui on
/// top of it.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
    painted: Option<BackdropScene>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
            painted: None,
        })
    }

    /// Repaints the backdrop if the scene changed since the last frame.
    fn paint_backdrop(&mut self, scene: BackdropScene) {
        if self.painted == Some(scene) {
            return;
        }

        let backdrop = Backdrop::for_section(scene.section_ordinal);
        let overlay = scene.is_transitioning.then_some(TRANSITION_OVERLAY);

        match paint_backdrop_parallel(
            self.pixels.frame_mut(),
            self.width,
            self.height,
            &backdrop,
            scene.section_opacity,
            overlay,
        ) {
            Ok(()) => self.painted = Some(scene),
            Err(e) => warn!("backdrop skipped: {e}"),
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
        scene: BackdropScene,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.paint_backdrop(scene);

        self.pixels.render_with(|encoder, render_target, context| {
            // Backdrop first (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep the backdrop
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        self.painted = None;

        Ok(())
    }
}
