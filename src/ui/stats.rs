use egui_macroquad::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use flappy_evo::simulation::event_log::{EventKind, EventLog};
use flappy_evo::simulation::events::ActuatorSink;
use flappy_evo::simulation::orchestrator::{Orchestrator, RunState};
use flappy_evo::simulation::world::GameWorld;

use super::state::UIState;

fn event_color(kind: EventKind) -> egui::Color32 {
    match kind {
        EventKind::Death => egui::Color32::from_rgb(255, 120, 120),
        EventKind::Restart => egui::Color32::from_rgb(255, 200, 100),
        EventKind::Generation => egui::Color32::from_rgb(100, 150, 255),
        EventKind::Record => egui::Color32::from_rgb(120, 230, 120),
        EventKind::RunComplete => egui::Color32::from_rgb(200, 200, 200),
    }
}

pub(super) fn draw_stats_panel<A: ActuatorSink>(
    egui_ctx: &egui::Context,
    state: &mut UIState,
    orchestrator: &Orchestrator<GameWorld, A>,
) {
    let params = orchestrator.params();
    let engine = orchestrator.engine();
    let population = orchestrator.population();
    let world = orchestrator.env();

    egui::SidePanel::right("stats_panel")
        .default_width(state.stats_panel_width)
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.heading("Run Stats");
            ui.separator();

            ui.horizontal(|ui| {
                let button_text = if state.rendering_enabled {
                    "Rendering: ON"
                } else {
                    "Rendering: OFF"
                };
                if ui.button(button_text).clicked() {
                    state.rendering_enabled = !state.rendering_enabled;
                }
            });

            ui.label("Simulation Speed");
            ui.add(egui::Slider::new(&mut state.simulation_speed, 1..=50).text("x"));

            ui.separator();

            ui.label(format!(
                "Generation: {}/{}",
                engine.generation(),
                params.num_generations
            ));
            ui.label(format!(
                "Bird: {}/{}",
                population.current_index() + 1,
                population.len()
            ));
            ui.label(format!("Fitness: {:.2}", population.current().fitness));
            ui.label(format!("Score: {}", world.bird.score));
            ui.label(format!("High score: {}", world.bird.high_score));
            ui.label(format!("Best so far: {:.2}", engine.best_so_far().fitness));
            if orchestrator.state() == RunState::EpisodeJustEnded {
                ui.label("Press Space to fly this bird again");
            }

            ui.separator();

            ui.heading("Best Fitness Per Generation");
            draw_fitness_plot(ui, engine.history());

            ui.separator();

            ui.heading("Recent Events");
            draw_event_log(ui, orchestrator.event_log());
        });
}

fn draw_fitness_plot(ui: &mut egui::Ui, history: &[f64]) {
    if history.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    let best: PlotPoints = history
        .iter()
        .enumerate()
        .map(|(i, &f)| [(i + 1) as f64, f])
        .collect();
    let record: PlotPoints = history
        .iter()
        .scan(f64::NEG_INFINITY, |max, &f| {
            *max = max.max(f);
            Some(*max)
        })
        .enumerate()
        .map(|(i, f)| [(i + 1) as f64, f])
        .collect();

    Plot::new("fitness_plot")
        .height(180.0)
        .show_axes([true, true])
        .legend(Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nGeneration: {:.0}\nFitness: {:.2}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(best)
                    .color(egui::Color32::from_rgb(100, 150, 255))
                    .name("Generation best"),
            );
            plot_ui.line(
                Line::new(record)
                    .color(egui::Color32::from_rgb(120, 230, 120))
                    .name("Best so far"),
            );
        });
}

fn draw_event_log(ui: &mut egui::Ui, event_log: &EventLog) {
    egui::ScrollArea::vertical()
        .max_height(220.0)
        .show(ui, |ui| {
            for event in event_log.events() {
                ui.colored_label(
                    event_color(event.kind),
                    format!("[gen {}] {}", event.generation, event.description),
                );
            }
        });
}
