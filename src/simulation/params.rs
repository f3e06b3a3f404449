//! Run parameters: playfield geometry, physics constants and genetic algorithm settings.
//!
//! Defaults reproduce the classic game at 120 ticks per second with a population of
//! ten birds evolved over fifty generations.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Simulation parameters that control the game world and the evolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Playfield width.
    pub field_width: f64,
    /// Playfield height. Bottom pipes always reach past this line.
    pub field_height: f64,
    /// Vertical position of the scrolling floor tiles.
    pub floor_y: f64,
    /// Floor tile width; tiles wrap once scrolled past `-floor_width`.
    pub floor_width: f64,
    /// Floor tile height.
    pub floor_height: f64,
    /// Floor scroll velocity per tick.
    pub floor_velocity: f64,
    /// Bird start position (box centre).
    pub bird_start: (f64, f64),
    /// Bird bounding box size.
    pub bird_size: (f64, f64),
    /// Downward acceleration added to the bird velocity every tick.
    pub gravity: f64,
    /// Upward speed set by a jump.
    pub jump_velocity: f64,
    /// The bird dies once its top edge reaches this height.
    pub ceiling_y: f64,
    /// The bird dies once its bottom edge reaches this height.
    pub ground_y: f64,
    /// Pipe bounding box size.
    pub pipe_size: (f64, f64),
    /// Pipe scroll velocity per tick.
    pub pipe_velocity: f64,
    /// Vertical gap between the bottom and the top pipe of a pair.
    pub pipe_gap: f64,
    /// Possible heights of the bottom pipe's top edge.
    pub pipe_heights: Vec<f64>,
    /// Horizontal centre of freshly spawned pipes.
    pub pipe_spawn_x: f64,
    /// Pipes are dropped once their right edge is at or left of this line.
    pub pipe_cull_x: f64,
    /// Pipe spawn period in milliseconds.
    pub pipe_spawn_interval_ms: f64,
    /// Simulation ticks per second; also the frame-rate cap.
    pub tick_rate: u32,
    /// Horizontal window `(min, max)` (exclusive) in which a pipe centre scores.
    pub score_window: (f64, f64),
    /// Score added per pipe object crossing the score window.
    pub score_increment: f64,
    /// Pipes with centre x above this line are candidates for the observation.
    pub sense_min_x: f64,
    /// Pipes with right edge below this line are candidates for the observation.
    pub sense_max_x: f64,
    /// Observation used when no pipe is ahead: (centre x, bottom pipe top, top reference).
    pub sense_default: (f64, f64, f64),
    /// Number of network inputs.
    pub input_size: usize,
    /// Number of hidden neurons.
    pub hidden_size: usize,
    /// Number of network outputs.
    pub output_size: usize,
    /// Individuals per generation.
    pub population_size: usize,
    /// Number of generations before the run ends.
    pub num_generations: u32,
    /// Tournament size used for parent selection.
    pub tournament_size: usize,
    /// Probability that a weight is inherited from the first parent.
    pub crossover_bias: f64,
    /// Per-weight mutation probability.
    pub mutation_rate: f64,
    /// Magnitude of a weight mutation.
    pub mutation_step: f64,
    /// Fitness gained per tick alive.
    pub fitness_per_tick: f64,
    /// Network output at or above which the bird jumps.
    pub jump_threshold: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            field_width: 576.0,
            field_height: 1024.0,
            floor_y: 900.0,
            floor_width: 576.0,
            floor_height: 224.0,
            floor_velocity: 1.0,
            bird_start: (100.0, 512.0),
            bird_size: (68.0, 48.0),
            gravity: 0.3,
            jump_velocity: 9.0,
            ceiling_y: -100.0,
            ground_y: 900.0,
            pipe_size: (104.0, 640.0),
            pipe_velocity: 5.0,
            pipe_gap: 400.0,
            pipe_heights: vec![500.0, 600.0, 700.0],
            pipe_spawn_x: 700.0,
            pipe_cull_x: -50.0,
            pipe_spawn_interval_ms: 1400.0,
            tick_rate: 120,
            score_window: (95.0, 105.0),
            score_increment: 0.5,
            sense_min_x: 100.0,
            sense_max_x: 550.0,
            sense_default: (500.0, 600.0, 900.0),
            input_size: 5,
            hidden_size: 10,
            output_size: 1,
            population_size: 10,
            num_generations: 50,
            tournament_size: 3,
            crossover_bias: 0.8,
            mutation_rate: 0.3,
            mutation_step: 0.2,
            fitness_per_tick: 0.01,
            jump_threshold: 0.5,
        }
    }
}

impl Params {
    /// Duration of one tick in milliseconds.
    pub fn tick_period_ms(&self) -> f64 {
        1000.0 / self.tick_rate as f64
    }

    /// Checks the invariants the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 4 {
            return Err(ConfigError::Invalid(format!(
                "population_size must be at least 4, got {}",
                self.population_size
            )));
        }
        if self.input_size == 0 || self.hidden_size == 0 || self.output_size == 0 {
            return Err(ConfigError::Invalid(
                "network layer sizes must be non-zero".to_string(),
            ));
        }
        // Observation layout is fixed: bird y, pipe x, two pipe heights, actuator flag.
        if self.input_size != 5 {
            return Err(ConfigError::Invalid(format!(
                "input_size must be 5 to match the observation vector, got {}",
                self.input_size
            )));
        }
        if self.num_generations == 0 {
            return Err(ConfigError::Invalid(
                "num_generations must be at least 1".to_string(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::Invalid(
                "tournament_size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_bias) {
            return Err(ConfigError::Invalid(format!(
                "crossover_bias must lie in [0, 1], got {}",
                self.crossover_bias
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::Invalid(format!(
                "mutation_rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.pipe_heights.is_empty() {
            return Err(ConfigError::Invalid(
                "pipe_heights must contain at least one height".to_string(),
            ));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Loads parameters from a JSON file. Missing fields take their default value.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }
}
