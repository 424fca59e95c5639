use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use egui::{Color32, Context, RichText};
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::{EventLoop, EventLoopProxy};
use winit::window::Window;

use crate::config::PortfolioConfig;
use crate::controllers::navigation::{NavigationController, SystemClock};
use crate::core::content::{
    PortfolioContent, SkillCategory, SkillFilter, all_technologies,
};
use crate::core::data::{NavigationState, Region, Section, SectionId};
use crate::core::visibility::{SectionVisibility, SectionVisibilityBoard};
use crate::input::gui::app::page_host::EguiPageHost;
use crate::input::gui::app::ports::presenter::{BackdropScene, GuiPresenterPort};
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::events::GuiEvent;

/// Vertical distance a section slides while it enters.
const ENTRANCE_SLIDE: f32 = 30.0;
/// Window width below which the navbar collapses into a menu.
const COMPACT_WIDTH: f32 = 640.0;
/// Longest frame step fed to the smooth scroll.
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Per-frame snapshot of a section for drawing.
struct SectionView {
    section: Section,
    opacity: f32,
    entrance: f32,
}

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    controller: NavigationController<EguiPageHost, SystemClock>,
    board: Rc<RefCell<SectionVisibilityBoard>>,
    content: PortfolioContent,
    ui_state: GuiAppState,
    last_frame: Instant,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        config: PortfolioConfig,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        let registry = config.registry()?;
        let board = Rc::new(RefCell::new(SectionVisibilityBoard::new(&registry)));
        let mut controller = NavigationController::new(
            registry,
            config.navigation.timings,
            config.navigation.passive_scroll,
            EguiPageHost::default(),
            SystemClock::new(),
        )?;
        board.borrow_mut().observe(controller.state());

        let observer = {
            let board = Rc::clone(&board);

            move |state: &NavigationState| {
                board.borrow_mut().observe(state);
                let _ = event_loop_proxy.send_event(GuiEvent::NavigationChanged);
            }
        };
        controller.subscribe(Rc::new(observer));

        Ok(Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            board,
            content: config.content,
            ui_state: GuiAppState::default(),
            last_frame: Instant::now(),
            egui_ctx,
            egui_state,
        })
    }

    /// Fires due transition steps. Returns how many fired.
    pub fn pump(&mut self) -> usize {
        self.controller.pump()
    }

    /// When the event loop must wake up for the next transition step.
    #[must_use]
    pub fn next_wake(&self) -> Option<Instant> {
        self.controller
            .next_deadline()
            .map(|deadline| self.controller.clock().instant_at(deadline))
    }

    /// True while something on the page moves without input.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controller.host().is_scrolling() || self.ui_state.entrances.is_running(Instant::now())
    }

    #[must_use]
    pub fn scene(&self) -> BackdropScene {
        let state = self.controller.state();

        BackdropScene {
            section_ordinal: self
                .controller
                .registry()
                .get(state.current_section.as_str())
                .map_or(0, Section::ordinal),
            section_opacity: state.section_opacity,
            is_transitioning: state.is_transitioning,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        let scene = self.scene();
        self.presenter.render(egui_output, &self.egui_ctx, scene)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.presenter.resize(width, height)
    }

    fn section_views(&mut self, now: Instant) -> Vec<SectionView> {
        let mut board = self.board.borrow_mut();
        board.tick();

        let state = self.controller.state();
        self.controller
            .registry()
            .iter()
            .map(|section| {
                let visibility = board.get(section.id().as_str());
                let is_visible = visibility.is_some_and(SectionVisibility::is_visible);
                self.ui_state.entrances.update(section.id(), is_visible, now);

                SectionView {
                    section: section.clone(),
                    opacity: visibility.map_or(1.0, |visibility| visibility.opacity(state)),
                    entrance: self.ui_state.entrances.progress(section.id(), now),
                }
            })
            .collect()
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let now = Instant::now();
        let frame_step = now.duration_since(self.last_frame).min(MAX_FRAME_STEP);
        self.last_frame = now;

        let views = self.section_views(now);
        let forced_offset = self.controller.host_mut().advance_scroll(frame_step);
        let current = self.controller.state().current_section.clone();

        let mut requested: Option<SectionId> = None;
        let mut measured: Vec<(SectionId, Region)> = Vec::new();
        let mut scroll_offset = 0.0;

        let ui_state = &mut self.ui_state;
        let content = &self.content;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            if let Some(target) = draw_navbar(ctx, ui_state, content, &views, &current) {
                requested = Some(target);
            }

            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    let viewport = ui.available_height();
                    let mut area = egui::ScrollArea::vertical()
                        .id_source("page")
                        .auto_shrink([false, false]);
                    if let Some(offset) = forced_offset {
                        area = area.vertical_scroll_offset(offset);
                    }

                    let scroll = area.show(ui, |ui| {
                        let origin = ui.min_rect().top();

                        for view in &views {
                            let top = ui.cursor().top() - origin;

                            ui.add_space((1.0 - view.entrance) * ENTRANCE_SLIDE);
                            ui.scope(|ui| {
                                let text = ui
                                    .visuals()
                                    .text_color()
                                    .gamma_multiply(view.opacity * view.entrance);
                                ui.visuals_mut().override_text_color = Some(text);
                                ui.set_min_height(viewport);

                                let clicked =
                                    draw_section(ui, &view.section, content, ui_state);
                                if let Some(target) = clicked {
                                    requested = Some(target);
                                }
                            });
                            ui.add_space(view.entrance * ENTRANCE_SLIDE);

                            let bottom = ui.cursor().top() - origin;
                            let region = Region::new(top, bottom - top);
                            measured.push((view.section.id().clone(), region));
                        }
                    });

                    scroll_offset = scroll.state.offset.y;
                });
        });

        let host = self.controller.host_mut();
        host.set_regions(measured);
        if forced_offset.is_none() {
            host.sync_scroll(scroll_offset);
        }

        if self.ui_state.observe_scroll(scroll_offset) {
            self.controller.observe_scroll(scroll_offset);
        }

        if let Some(target) = requested {
            self.ui_state.navbar.on_nav_click();
            self.controller.navigate_to_section(target.as_str());
        }

        output
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}

fn nav_items(
    ui: &mut egui::Ui,
    views: &[SectionView],
    current: &SectionId,
) -> Option<SectionId> {
    let mut clicked = None;

    for view in views {
        let is_current = view.section.id() == current;
        if ui.selectable_label(is_current, view.section.label()).clicked() {
            clicked = Some(view.section.id().clone());
        }
    }

    clicked
}

fn draw_navbar(
    ctx: &Context,
    ui_state: &mut GuiAppState,
    content: &PortfolioContent,
    views: &[SectionView],
    current: &SectionId,
) -> Option<SectionId> {
    let frame = if ui_state.navbar.is_scrolled() {
        egui::Frame::side_top_panel(&ctx.style())
    } else {
        egui::Frame::none().inner_margin(8.0)
    };

    egui::TopBottomPanel::top("navbar")
        .frame(frame)
        .show(ctx, |ui| {
            let compact = ui.available_width() < COMPACT_WIDTH;
            let mut clicked = None;

            ui.horizontal(|ui| {
                ui.label(RichText::new(&content.profile.name).strong().size(18.0));

                if compact {
                    if ui.button("Menu").clicked() {
                        ui_state.navbar.toggle_menu();
                    }
                } else {
                    clicked = nav_items(ui, views, current);
                }
            });

            if compact && ui_state.navbar.is_menu_open() {
                ui.vertical(|ui| {
                    clicked = nav_items(ui, views, current);
                });
            }

            clicked
        })
        .inner
}

/// Draws one section body. Returns a section to navigate to if a call to
/// action was clicked.
fn draw_section(
    ui: &mut egui::Ui,
    section: &Section,
    content: &PortfolioContent,
    ui_state: &mut GuiAppState,
) -> Option<SectionId> {
    ui.add_space(80.0);

    match section.id().as_str() {
        "home" => return draw_home(ui, content),
        "about" => draw_about(ui, section, content),
        "experience" => draw_experience(ui, section, content),
        "projects" => draw_projects(ui, section, content, ui_state),
        "skills" => draw_skills(ui, section, content, ui_state),
        "contact" => draw_contact(ui, section, content),
        _ => {
            ui.heading(section.label());
        }
    }

    None
}

fn draw_home(ui: &mut egui::Ui, content: &PortfolioContent) -> Option<SectionId> {
    let profile = &content.profile;
    let mut requested = None;

    ui.label(RichText::new(&profile.name).size(48.0).strong());
    ui.label(RichText::new(&profile.title).size(22.0));
    ui.add_space(8.0);
    ui.label(&profile.tagline);
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        if ui.button("View My Projects").clicked() {
            requested = SectionId::new("projects").ok();
        }
        if ui.button("Get In Touch").clicked() {
            requested = SectionId::new("contact").ok();
        }
    });

    requested
}

fn draw_about(ui: &mut egui::Ui, section: &Section, content: &PortfolioContent) {
    ui.heading(section.label());
    ui.add_space(8.0);

    for paragraph in &content.profile.bio {
        ui.label(paragraph);
        ui.add_space(6.0);
    }

    if let Some(location) = &content.profile.location {
        ui.label(format!("Based in {location}"));
    }
}

fn draw_experience(ui: &mut egui::Ui, section: &Section, content: &PortfolioContent) {
    ui.heading(section.label());

    for entry in &content.experience {
        ui.add_space(12.0);
        ui.label(RichText::new(&entry.role).strong());
        ui.label(format!("{} · {}", entry.company, entry.period));

        for highlight in &entry.highlights {
            ui.label(format!("• {highlight}"));
        }
    }
}

fn draw_projects(
    ui: &mut egui::Ui,
    section: &Section,
    content: &PortfolioContent,
    ui_state: &mut GuiAppState,
) {
    let projects = &content.projects;
    let filter = &mut ui_state.project_filter;

    ui.heading(section.label());
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Search");
        let mut search = filter.search().to_string();
        if ui.text_edit_singleline(&mut search).changed() {
            filter.set_search(search);
        }
        if filter.is_active() && ui.button("Clear filters").clicked() {
            filter.clear();
        }
    });

    ui.horizontal_wrapped(|ui| {
        for technology in all_technologies(projects) {
            if ui
                .selectable_label(filter.is_selected(technology), technology)
                .clicked()
            {
                filter.toggle_technology(technology);
            }
        }
    });

    let shown: Vec<_> = filter.apply(projects).collect();
    if filter.is_active() {
        ui.label(format!("Showing {} of {} projects", shown.len(), projects.len()));
    }
    if shown.is_empty() {
        ui.label("No projects match the current filters.");
    }

    for project in shown {
        ui.add_space(12.0);
        ui.group(|ui| {
            ui.label(RichText::new(&project.title).strong().size(18.0));
            ui.label(&project.description);
            ui.label(RichText::new(project.technologies.join(" · ")).small());

            ui.horizontal(|ui| {
                if let Some(url) = &project.live_url {
                    ui.hyperlink_to("Live demo", url);
                }
                if let Some(url) = &project.code_url {
                    ui.hyperlink_to("Code", url);
                }
            });
        });
    }
}

fn draw_skills(
    ui: &mut egui::Ui,
    section: &Section,
    content: &PortfolioContent,
    ui_state: &mut GuiAppState,
) {
    ui.heading(section.label());
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        ui.selectable_value(&mut ui_state.skill_filter, SkillFilter::All, "All");
        for &category in SkillCategory::ALL {
            ui.selectable_value(
                &mut ui_state.skill_filter,
                SkillFilter::Category(category),
                category.display_name(),
            );
        }
    });

    ui.add_space(8.0);
    for skill in ui_state.skill_filter.apply(&content.skills) {
        ui.horizontal(|ui| {
            ui.add_sized([140.0, 18.0], egui::Label::new(&skill.name));
            ui.add(
                egui::ProgressBar::new(skill.level.fraction())
                    .desired_width(200.0)
                    .text(format!("{:?}", skill.level)),
            );
        });
    }
}

fn draw_contact(ui: &mut egui::Ui, section: &Section, content: &PortfolioContent) {
    ui.heading(section.label());
    ui.add_space(8.0);

    if let Some(email) = &content.profile.email {
        ui.hyperlink_to(email, format!("mailto:{email}"));
    }

    ui.horizontal_wrapped(|ui| {
        for social in &content.socials {
            ui.hyperlink_to(&social.name, &social.url);
        }
    });

    ui.add_space(24.0);
    ui.label(RichText::new(format!("© {}", content.profile.name)).small().color(Color32::GRAY));
}
