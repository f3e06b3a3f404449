use std::error::Error;
use std::fs::OpenOptions;

use clap::Parser;
use macroquad::prelude::{BLACK, Conf, clear_background, next_frame, prevent_quit};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use flappy_evo::simulation::events::{ActuatorSink, InputEvent, NullActuator, WriterActuator};
use flappy_evo::simulation::orchestrator::Orchestrator;
use flappy_evo::simulation::pacing::FramePacer;
use flappy_evo::simulation::params::Params;
use flappy_evo::simulation::world::GameWorld;

mod assets;
mod cli;
mod graphics;
mod input;
mod ui;

type Run = Orchestrator<GameWorld, Box<dyn ActuatorSink>>;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = cli::Cli::parse();
    let params = cli.params()?;

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    tracing::info!(seed, "seeding run");

    let world = GameWorld::new(&params, ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)));
    let actuator = open_actuator(cli.actuator.as_deref());
    let orchestrator: Run = Orchestrator::new(
        &params,
        world,
        actuator,
        ChaCha8Rng::seed_from_u64(seed),
    )?;

    println!("{}", orchestrator.initial_report());

    if cli.headless {
        run_headless(orchestrator, cli.max_frames, cli.save_best);
    } else {
        macroquad::Window::from_config(
            window_conf(&params),
            run_window(orchestrator, cli.assets, cli.save_best),
        );
    }

    Ok(())
}

fn open_actuator(path: Option<&str>) -> Box<dyn ActuatorSink> {
    let Some(path) = path else {
        return Box::new(NullActuator);
    };
    match OpenOptions::new().write(true).open(path) {
        Ok(device) => {
            tracing::info!(path, "actuator attached");
            Box::new(WriterActuator::new(device))
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "actuator unavailable, continuing without it");
            Box::new(NullActuator)
        }
    }
}

fn window_conf(params: &Params) -> Conf {
    let height = 768;
    let width = (params.field_width / params.field_height * f64::from(height)) as i32
        + graphics::PANEL_WIDTH as i32;
    Conf {
        window_title: "Flappy Evo".to_owned(),
        window_width: width,
        window_height: height,
        platform: macroquad::miniquad::conf::Platform {
            swap_interval: Some(0),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn finish_run(orchestrator: &Run, save_best: Option<&str>) {
    println!("{}", "=".repeat(48));
    println!(
        "Run finished {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("{}", "=".repeat(48));
    println!("{}", orchestrator.final_report());

    if let Some(path) = save_best {
        match orchestrator.engine().best_so_far().save_to_file(path) {
            Ok(()) => tracing::info!(path, "best individual saved"),
            Err(e) => tracing::error!(path, error = %e, "failed to save best individual"),
        }
    }
}

fn run_headless(mut orchestrator: Run, max_frames: Option<u64>, save_best: Option<String>) {
    orchestrator.run_to_completion(max_frames, |report| println!("{report}"));
    if !orchestrator.is_complete() {
        tracing::info!(frames = orchestrator.frames(), "frame limit reached");
        orchestrator.quit();
    }
    finish_run(&orchestrator, save_best.as_deref());
}

async fn run_window(mut orchestrator: Run, assets_dir: String, save_best: Option<String>) {
    let assets = assets::Assets::load(&assets_dir).await;
    if !assets.is_complete() {
        tracing::warn!(dir = %assets_dir, "some assets are missing, running degraded");
    }

    prevent_quit();
    let mut ui_state = ui::UIState::new();
    let mut pacer = FramePacer::new(orchestrator.params().tick_rate);

    while !orchestrator.is_complete() {
        let events = input::poll_events();
        for step in 0..ui_state.simulation_speed {
            let events: &[InputEvent] = if step == 0 { &events } else { &[] };
            if let Some(report) = orchestrator.frame(events) {
                println!("{report}");
            }
            if orchestrator.is_complete() {
                break;
            }
        }

        clear_background(BLACK);
        if ui_state.rendering_enabled {
            let world = orchestrator.env();
            let overlay = graphics::Overlay {
                score: world.bird.score,
                high_score: world.bird.high_score,
                bird_id: orchestrator.population().current_index(),
                generation: orchestrator.engine().generation(),
            };
            graphics::draw_world(world, &assets, &overlay);
        }
        ui::draw_ui(&mut ui_state, &orchestrator);
        ui::process_egui();

        pacer.wait();
        next_frame().await;
    }

    finish_run(&orchestrator, save_best.as_deref());
}
