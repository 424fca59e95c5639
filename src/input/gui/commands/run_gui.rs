use std::marker::PhantomData;

use tracing::{error, info};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::{Window, WindowBuilder};

use crate::config::PortfolioConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: PortfolioConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: PortfolioConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and runs until it is closed.
    pub fn execute(self) -> anyhow::Result<()> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let title = if self.config.content.profile.name.is_empty() {
            "Portfolio".to_string()
        } else {
            format!("{} - Portfolio", self.config.content.profile.name)
        };

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(title)
                .with_inner_size(LogicalSize::new(1024.0, 768.0))
                .with_min_inner_size(LogicalSize::new(360.0, 480.0))
                .build(&event_loop)?,
        ));

        let presenter = self.presenter_factory.build(window)?;
        let mut app = GuiApp::new(window, &event_loop, presenter, self.config, event_loop_proxy)?;
        let mut redraw_pending = true;

        info!("portfolio window opened");

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;
                        app.pump();

                        let mut egui_output = app.update_ui(window);
                        let platform_output = std::mem::take(&mut egui_output.platform_output);
                        app.egui_state.handle_platform_output(window, platform_output);

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|viewport| viewport.repaint_delay.is_zero())
                            || app.is_animating()
                        {
                            redraw_pending = true;
                        }

                        if let Err(e) = app.render(egui_output) {
                            error!("render error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = app.resize(size.width, size.height) {
                            error!("resize error: {e}");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);

                        let size = window.inner_size();
                        if let Err(e) = app.resize(size.width, size.height) {
                            error!("resize error: {e}");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    _ => {
                        if egui_consumed || egui_repaint {
                            redraw_pending = true;
                        }
                    }
                }
            }
            Event::UserEvent(GuiEvent::NavigationChanged) => {
                redraw_pending = true;
            }
            Event::AboutToWait => {
                if app.pump() > 0 {
                    redraw_pending = true;
                }

                if redraw_pending {
                    window.request_redraw();
                }

                match app.next_wake() {
                    Some(wake_at) => elwt.set_control_flow(ControlFlow::WaitUntil(wake_at)),
                    None => elwt.set_control_flow(ControlFlow::Wait),
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
