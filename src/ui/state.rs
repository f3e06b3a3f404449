use egui_macroquad::egui;

use flappy_evo::simulation::events::ActuatorSink;
use flappy_evo::simulation::orchestrator::Orchestrator;
use flappy_evo::simulation::world::GameWorld;

use crate::graphics::PANEL_WIDTH;

pub struct UIState {
    pub stats_panel_width: f32,
    /// Game frames advanced per displayed frame.
    pub simulation_speed: u32,
    pub rendering_enabled: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            stats_panel_width: PANEL_WIDTH,
            simulation_speed: 1,
            rendering_enabled: true,
        }
    }
}

pub fn draw_ui<A: ActuatorSink>(state: &mut UIState, orchestrator: &Orchestrator<GameWorld, A>) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::from_rgb(220, 220, 220);
        visuals.widgets.inactive.fg_stroke.color = egui::Color32::from_rgb(200, 200, 200);
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, orchestrator);
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
