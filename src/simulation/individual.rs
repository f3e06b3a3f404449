//! A bird controller: a brain plus the fitness it earned this generation.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::brain::Brain;
use super::error::ConfigError;
use super::params::Params;

/// One neural-network-controlled agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// Slot index within its generation.
    pub id: usize,
    /// Policy network.
    pub brain: Brain,
    /// Fitness accumulated during the current generation.
    pub fitness: f64,
}

impl Individual {
    /// Creates an individual with random weights and zero fitness.
    pub fn new_random<R: Rng + ?Sized>(
        id: usize,
        params: &Params,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            id,
            brain: Brain::new_random(
                params.input_size,
                params.hidden_size,
                params.output_size,
                rng,
            )?,
            fitness: 0.0,
        })
    }

    /// Queries the policy. Returns `true` when the bird should jump.
    pub fn wants_jump(&self, observation: &Array1<f64>, threshold: f64) -> bool {
        self.brain.think(observation)[0] >= threshold
    }

    /// Adds survival reward.
    pub fn reward(&mut self, amount: f64) {
        self.fitness += amount;
    }

    /// Saves the individual to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads an individual from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let individual = serde_json::from_str(&json)?;
        Ok(individual)
    }
}
