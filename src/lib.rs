//! # Flappy Evo - Neuroevolution for a side-scrolling bird
//!
//! A flappy-bird style game in which every bird is flown by a small neural network.
//! Networks are evaluated one at a time, then bred into the next generation with a
//! genetic algorithm (tournament selection, uniform crossover, step mutation).
//!
//! ## Features
//!
//! - Two-layer sigmoid networks without biases
//! - Frame-stepped world with gravity, scrolling pipes and floor
//! - Tournament selection with best-so-far tracking
//! - Explicit run state machine driven one frame at a time
//! - Text reports per generation and at the end of the run
//! - Optional one-way actuator mirroring the jump key
//!
//! ## Core Modules
//!
//! - [`simulation::brain`] - Neural network policy
//! - [`simulation::world`] - Game physics and the [`simulation::world::Environment`] seam
//! - [`simulation::population`] - Current generation and its offspring
//! - [`simulation::evolution`] - Selection, crossover and mutation
//! - [`simulation::orchestrator`] - Per-frame run control

/// Core game, policy and evolution logic.
pub mod simulation {
    /// Bird entity: gravity, jumping and score.
    pub mod bird;
    /// Two-layer neural network policy.
    pub mod brain;
    /// Error types for configuration and construction.
    pub mod error;
    /// Bounded log of recent run events for display.
    pub mod event_log;
    /// Input events and the actuator output channel.
    pub mod events;
    /// Genetic algorithm: tournament selection, crossover and mutation.
    pub mod evolution;
    /// Scrolling floor tiles.
    pub mod floor;
    /// A policy together with its fitness.
    pub mod individual;
    /// Frame-by-frame run control.
    pub mod orchestrator;
    /// Fixed-rate frame pacing.
    pub mod pacing;
    /// Run parameters.
    pub mod params;
    /// Pipe obstacles.
    pub mod pipe;
    /// The generation under evaluation and its offspring.
    pub mod population;
    /// Printable run reports.
    pub mod report;
    /// Axis-aligned sprite geometry shared by all entities.
    ///
    /// The [`sprite::Positioned`] trait is implemented by every entity that owns a
    /// [`sprite::Sprite`] and moves once per tick (Bird, Pipe, Floor).
    pub mod sprite;
    /// Game world and the environment interface the orchestrator drives.
    pub mod world;
}
