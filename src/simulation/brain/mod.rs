//! Neural policy for the birds.
//!
//! A fixed two-layer feed-forward network: `hidden = σ(W_ih · x)` followed by
//! `output = σ(W_ho · hidden)`. The genetic operators work per weight, so the network
//! exposes uniform crossover and step mutation rather than gradient updates.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

pub mod layer;

pub use layer::{Layer, sigmoid};

/// Two-layer network used as a bird's brain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brain {
    /// Input to hidden weights, `W_ih` (`hidden_size` × `input_size`).
    pub input_hidden: Layer,
    /// Hidden to output weights, `W_ho` (`output_size` × `hidden_size`).
    pub hidden_output: Layer,
}

impl Brain {
    /// Creates a brain with normally distributed weights.
    ///
    /// `W_ih` entries have standard deviation `hidden_size^-0.5` and `W_ho` entries
    /// `output_size^-0.5`.
    pub fn new_random<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let input_hidden =
            Layer::new_random(input_size, hidden_size, (hidden_size as f64).powf(-0.5), rng)?;
        let hidden_output =
            Layer::new_random(hidden_size, output_size, (output_size as f64).powf(-0.5), rng)?;
        Ok(Self {
            input_hidden,
            hidden_output,
        })
    }

    /// Runs a forward pass. Every output lies in `(0, 1)`.
    ///
    /// Panics if the observation length differs from the input size.
    #[inline]
    pub fn think(&self, observation: &Array1<f64>) -> Array1<f64> {
        assert_eq!(
            observation.len(),
            self.input_size(),
            "observation length does not match the network input size"
        );
        let hidden = self.input_hidden.forward(observation);
        self.hidden_output.forward(&hidden)
    }

    /// Creates a child by per-weight uniform crossover of two parents.
    pub fn crossover<R: Rng + ?Sized>(mom: &Brain, dad: &Brain, bias: f64, rng: &mut R) -> Self {
        let hidden_output =
            Layer::crossover_uniform(&mom.hidden_output, &dad.hidden_output, bias, rng);
        let input_hidden = Layer::crossover_uniform(&mom.input_hidden, &dad.input_hidden, bias, rng);
        Self {
            input_hidden,
            hidden_output,
        }
    }

    /// Mutates every weight independently with probability `rate` by `±step`.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rate: f64, step: f64, rng: &mut R) {
        self.hidden_output.mutate_step(rate, step, rng);
        self.input_hidden.mutate_step(rate, step, rng);
    }

    /// Number of observation components expected by [`Brain::think`].
    pub fn input_size(&self) -> usize {
        self.input_hidden.input_size()
    }

    /// Shapes of `(W_ih, W_ho)`.
    pub fn shapes(&self) -> ((usize, usize), (usize, usize)) {
        (self.input_hidden.weights.dim(), self.hidden_output.weights.dim())
    }

    /// Flattens all weights into a single vector, `W_ho` first.
    pub fn to_flat_vector(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(
            self.hidden_output.weights.len() + self.input_hidden.weights.len(),
        );
        flat.extend(self.hidden_output.weights.iter().copied());
        flat.extend(self.input_hidden.weights.iter().copied());
        flat
    }
}
