//! The game world: bird physics, pipes, collisions, scoring and observations.
//!
//! The orchestrator only talks to the world through the [`Environment`] trait, which
//! lets tests substitute a scripted world.

use ndarray::{Array1, array};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use super::bird::Bird;
use super::floor::Floor;
use super::params::Params;
use super::pipe::{Pipe, PipeKind};
use super::sprite::Positioned;

/// A game episode the evaluator can drive one tick at a time.
pub trait Environment {
    /// Advances the world by one tick.
    fn tick(&mut self);

    /// Makes the bird jump.
    fn jump(&mut self);

    /// Result of the aliveness check made during the last tick.
    fn is_alive(&self) -> bool;

    /// Observation vector fed to the policy network.
    ///
    /// # Arguments
    ///
    /// * `actuator_flag` - Whether a manual jump was pressed this frame
    fn observation(&self, actuator_flag: bool) -> Array1<f64>;

    /// Starts a fresh episode.
    fn reset(&mut self);

    /// Adds a new pipe pair at the right edge.
    fn spawn_pipe(&mut self);

    /// Score of the running episode.
    fn score(&self) -> f64;
}

/// The flappy bird playfield.
#[derive(Debug, Clone)]
pub struct GameWorld {
    /// The bird.
    pub bird: Bird,
    /// Live pipes in spawn order, bottom pipe of a pair first.
    pub pipes: Vec<Pipe>,
    /// Scrolling floor tiles.
    pub floors: [Floor; 2],
    /// Ticks elapsed in the current episode.
    pub ticks: u64,
    alive: bool,
    ticks_since_spawn: u64,
    spawn_every: u64,
    params: Params,
    rng: ChaCha8Rng,
}

impl GameWorld {
    /// Creates a world with the bird at its start position and no pipes.
    pub fn new(params: &Params, rng: ChaCha8Rng) -> Self {
        let spawn_every = (params.pipe_spawn_interval_ms / params.tick_period_ms())
            .round()
            .max(1.0) as u64;
        Self {
            bird: Bird::new(params),
            pipes: Vec::new(),
            floors: Floor::tiles(params),
            ticks: 0,
            alive: true,
            ticks_since_spawn: 0,
            spawn_every,
            params: params.clone(),
            rng,
        }
    }

    /// Creates a world whose pipe heights come from a seeded generator.
    pub fn seeded(params: &Params, seed: u64) -> Self {
        Self::new(params, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Parameters the world was built with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// False if the bird touches a pipe or leaves the vertical playfield.
    pub fn check_alive(&self) -> bool {
        let bird = self.bird.sprite();
        if self.pipes.iter().any(|pipe| bird.overlaps(pipe.sprite())) {
            return false;
        }
        bird.top() > self.params.ceiling_y && bird.bottom() < self.params.ground_y
    }

    /// Adds score for every pipe whose centre lies inside the score window.
    ///
    /// Both pipes of a pair share a centre line, so a pair passing the bird adds two
    /// increments.
    pub fn score_check(&mut self) {
        let (min_x, max_x) = self.params.score_window;
        let hits = self
            .pipes
            .iter()
            .filter(|pipe| {
                let center = pipe.sprite().center_x();
                min_x < center && center < max_x
            })
            .count();
        for _ in 0..hits {
            self.bird.add_score(self.params.score_increment);
        }
    }

    /// First bottom pipe ahead of the bird and still inside the sensing window.
    pub fn pipe_ahead(&self) -> Option<&Pipe> {
        self.pipes.iter().find(|pipe| {
            pipe.kind == PipeKind::Bottom
                && pipe.sprite().center_x() > self.params.sense_min_x
                && pipe.sprite().right() < self.params.sense_max_x
        })
    }

    /// Ticks between two automatic pipe spawns.
    pub fn spawn_every(&self) -> u64 {
        self.spawn_every
    }
}

impl Environment for GameWorld {
    fn tick(&mut self) {
        self.bird.update();
        self.alive = self.check_alive();

        for pipe in &mut self.pipes {
            pipe.update();
        }
        let cull_x = self.params.pipe_cull_x;
        self.pipes.retain(|pipe| !pipe.is_off_screen(cull_x));

        self.score_check();

        for floor in &mut self.floors {
            floor.update();
        }

        self.ticks += 1;
        self.ticks_since_spawn += 1;
        if self.ticks_since_spawn >= self.spawn_every {
            self.ticks_since_spawn = 0;
            self.spawn_pipe();
        }
    }

    fn jump(&mut self) {
        self.bird.jump();
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn observation(&self, actuator_flag: bool) -> Array1<f64> {
        let (default_x, default_bottom, default_top) = self.params.sense_default;
        let (pipe_x, pipe_bottom, pipe_top) = match self.pipe_ahead() {
            Some(pipe) => (
                pipe.sprite().center_x(),
                pipe.sprite().top(),
                pipe.sprite().top() + self.params.pipe_gap,
            ),
            None => (default_x, default_bottom, default_top),
        };
        array![
            self.bird.sprite().top(),
            pipe_x,
            pipe_bottom,
            pipe_top,
            if actuator_flag { 1.0 } else { 0.0 },
        ]
    }

    /// The spawn timer restarts too, so each episode's first pipe arrives exactly
    /// `pipe_spawn_interval_ms` after the reset (168 ticks by default).
    fn reset(&mut self) {
        let (x, y) = self.params.bird_start;
        self.bird.reset(x, y);
        self.pipes.clear();
        self.ticks = 0;
        self.ticks_since_spawn = 0;
        self.alive = true;
    }

    fn spawn_pipe(&mut self) {
        if let Some(&height) = self.params.pipe_heights.choose(&mut self.rng) {
            let (bottom, top) = Pipe::pair(height, &self.params);
            self.pipes.push(bottom);
            self.pipes.push(top);
        }
    }

    fn score(&self) -> f64 {
        self.bird.score
    }
}
