//! The per-frame control loop tying world, policy and evolution together.
//!
//! Run progress is an explicit state machine:
//!
//! ```text
//! EpisodeRunning --death--> EpisodeJustEnded --more birds--> EpisodeRunning
//!                                   |
//!                                   +--last bird--> GenerationComplete --> EpisodeRunning
//!                                                                   \--> RunComplete
//! ```
//!
//! A death detected during frame N is handled at frame N+1, after input. A jump
//! pressed in between restarts the same bird instead.

use rand_chacha::ChaCha8Rng;

use super::error::ConfigError;
use super::event_log::{EventKind, EventLog};
use super::events::{ActuatorSignal, ActuatorSink, InputEvent};
use super::evolution::EvolutionEngine;
use super::params::Params;
use super::population::Population;
use super::report::{FinalReport, GenerationReport, PopulationTable};
use super::world::Environment;

/// Where the run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// The current bird is flying.
    EpisodeRunning,
    /// The current bird died during the previous frame.
    EpisodeJustEnded,
    /// Every bird of the generation has flown; evolution is due.
    GenerationComplete,
    /// All generations are done or the user quit.
    RunComplete,
}

/// Owns everything a run needs and advances it one frame at a time.
pub struct Orchestrator<E: Environment, A: ActuatorSink> {
    params: Params,
    env: E,
    population: Population,
    engine: EvolutionEngine,
    actuator: A,
    rng: ChaCha8Rng,
    state: RunState,
    actuator_flag: bool,
    frames: u64,
    event_log: EventLog,
}

impl<E: Environment, A: ActuatorSink> Orchestrator<E, A> {
    /// Builds generation 1 and resets the environment for its first bird.
    pub fn new(
        params: &Params,
        mut env: E,
        actuator: A,
        mut rng: ChaCha8Rng,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        let population = Population::new_random(params, &mut rng)?;
        let engine = EvolutionEngine::new(params, &mut rng)?;
        env.reset();

        tracing::info!(
            population = params.population_size,
            generations = params.num_generations,
            "starting evolution"
        );

        Ok(Self {
            params: params.clone(),
            env,
            population,
            engine,
            actuator,
            rng,
            state: RunState::EpisodeRunning,
            actuator_flag: false,
            frames: 0,
            event_log: EventLog::default(),
        })
    }

    /// Advances the run by one frame.
    ///
    /// # Arguments
    ///
    /// * `events` - Input events polled since the previous frame
    ///
    /// # Returns
    ///
    /// The generation report if a generation was evolved during this frame.
    pub fn frame(&mut self, events: &[InputEvent]) -> Option<GenerationReport> {
        if self.state == RunState::RunComplete {
            return None;
        }

        self.actuator_flag = false;
        for &event in events {
            self.handle_input(event);
            if self.state == RunState::RunComplete {
                return None;
            }
        }

        let report = match self.state {
            RunState::EpisodeRunning => {
                self.step_episode();
                None
            }
            RunState::EpisodeJustEnded => self.finish_episode(),
            RunState::GenerationComplete => self.complete_generation(),
            RunState::RunComplete => None,
        };

        if self.state != RunState::RunComplete {
            self.actuator.send(ActuatorSignal::Level(self.actuator_flag));
        }
        self.frames += 1;
        report
    }

    /// Runs frames without input until the run completes or `max_frames` is reached.
    pub fn run_to_completion(
        &mut self,
        max_frames: Option<u64>,
        mut on_report: impl FnMut(&GenerationReport),
    ) {
        while !self.is_complete() && max_frames.is_none_or(|max| self.frames < max) {
            if let Some(report) = self.frame(&[]) {
                on_report(&report);
            }
        }
    }

    /// Stops the run as if the user had quit.
    pub fn quit(&mut self) {
        if self.state != RunState::RunComplete {
            self.finish_run("run stopped by user");
        }
    }

    fn handle_input(&mut self, event: InputEvent) {
        match (event, self.state) {
            (InputEvent::Quit, _) => self.quit(),
            (InputEvent::JumpPressed, RunState::EpisodeRunning) => {
                self.env.jump();
                self.actuator_flag = true;
            }
            (InputEvent::JumpPressed, RunState::EpisodeJustEnded) => self.restart_episode(),
            (InputEvent::SpawnPipe, RunState::EpisodeRunning) => self.env.spawn_pipe(),
            _ => {}
        }
    }

    fn step_episode(&mut self) {
        self.env.tick();
        self.population.reward_current(self.params.fitness_per_tick);

        let observation = self.env.observation(self.actuator_flag);
        if self
            .population
            .current()
            .wants_jump(&observation, self.params.jump_threshold)
        {
            self.env.jump();
        }

        if !self.env.is_alive() {
            self.state = RunState::EpisodeJustEnded;
        }
    }

    fn restart_episode(&mut self) {
        self.env.reset();
        self.actuator.send(ActuatorSignal::Level(false));
        self.state = RunState::EpisodeRunning;
        self.event_log.log(
            self.engine.generation(),
            format!("Bird {} restarted", self.population.current_index()),
            EventKind::Restart,
        );
    }

    fn finish_episode(&mut self) -> Option<GenerationReport> {
        let current = self.population.current();
        tracing::debug!(
            generation = self.engine.generation(),
            bird = current.id,
            fitness = current.fitness,
            score = self.env.score(),
            "episode ended"
        );
        self.event_log.log(
            self.engine.generation(),
            format!(
                "Bird {} died, score {}, fitness {:.2}",
                current.id,
                self.env.score(),
                current.fitness
            ),
            EventKind::Death,
        );

        if self.population.advance() {
            self.env.reset();
            self.state = RunState::EpisodeRunning;
            None
        } else {
            self.state = RunState::GenerationComplete;
            self.complete_generation()
        }
    }

    fn complete_generation(&mut self) -> Option<GenerationReport> {
        let report = self.engine.evolve(&mut self.population, &mut self.rng);

        tracing::info!(
            generation = report.generation,
            best = report.best_fitness,
            best_so_far = report.best_so_far,
            "generation complete"
        );
        self.event_log.log(
            report.generation,
            format!(
                "Generation {} best {:.2}",
                report.generation, report.best_fitness
            ),
            EventKind::Generation,
        );
        if report.new_record {
            self.event_log.log(
                report.generation,
                format!("New record {:.2}", report.best_so_far),
                EventKind::Record,
            );
        }

        if report.finished {
            self.finish_run("all generations evaluated");
        } else {
            self.env.reset();
            self.state = RunState::EpisodeRunning;
        }

        Some(report)
    }

    fn finish_run(&mut self, reason: &str) {
        tracing::info!(generation = self.engine.generation(), reason, "run complete");
        self.event_log.log(
            self.engine.generation(),
            reason.to_string(),
            EventKind::RunComplete,
        );
        self.actuator.send(ActuatorSignal::Terminal);
        self.state = RunState::RunComplete;
    }

    /// Current state of the run.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// True once the run is over.
    pub fn is_complete(&self) -> bool {
        self.state == RunState::RunComplete
    }

    /// Whether a manual jump was pressed during the last frame.
    pub fn actuator_flag(&self) -> bool {
        self.actuator_flag
    }

    /// Frames processed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The environment being driven.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// The population under evaluation.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The evolution engine.
    pub fn engine(&self) -> &EvolutionEngine {
        &self.engine
    }

    /// The actuator sink.
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Recent run events.
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Table of the initial population, printed before the first episode.
    pub fn initial_report(&self) -> PopulationTable<'_> {
        PopulationTable {
            generation: 0,
            individuals: self.population.individuals(),
        }
    }

    /// End-of-run summary.
    pub fn final_report(&self) -> FinalReport<'_> {
        FinalReport {
            history: self.engine.history(),
            best_so_far: self.engine.best_so_far(),
        }
    }
}
