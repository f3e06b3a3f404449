//! A single fully connected layer without biases.

use ndarray::{Array1, Array2, Zip};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::simulation::error::ConfigError;

/// Logistic activation, `1 / (1 + e^-x)`.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// One layer of the policy network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Weight matrix (`output_size` × `input_size`).
    pub weights: Array2<f64>,
}

impl Layer {
    /// Creates a layer with weights drawn i.i.d. from `Normal(0, std_dev)`.
    pub fn new_random<R: Rng + ?Sized>(
        input_size: usize,
        output_size: usize,
        std_dev: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let normal = Normal::new(0.0, std_dev)?;
        Ok(Self {
            weights: Array2::random_using((output_size, input_size), normal, rng),
        })
    }

    /// Performs a forward pass with sigmoid activation.
    #[inline]
    pub fn forward(&self, inputs: &Array1<f64>) -> Array1<f64> {
        let mut output = self.weights.dot(inputs);
        output.mapv_inplace(sigmoid);
        output
    }

    /// Builds a new layer taking each weight from `mom` with probability `bias`,
    /// otherwise from `dad`.
    pub fn crossover_uniform<R: Rng + ?Sized>(
        mom: &Layer,
        dad: &Layer,
        bias: f64,
        rng: &mut R,
    ) -> Self {
        assert_eq!(
            mom.weights.dim(),
            dad.weights.dim(),
            "crossover parents must share a shape"
        );
        let weights = Zip::from(&mom.weights)
            .and(&dad.weights)
            .map_collect(|&m, &d| if rng.gen_bool(bias) { m } else { d });
        Self { weights }
    }

    /// With probability `rate` per weight, adds `+step` or `-step` (even odds).
    pub fn mutate_step<R: Rng + ?Sized>(&mut self, rate: f64, step: f64, rng: &mut R) {
        for w in self.weights.iter_mut() {
            if rng.gen_bool(rate) {
                let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                *w += sign * step;
            }
        }
    }

    /// Number of inputs the layer accepts.
    pub fn input_size(&self) -> usize {
        self.weights.ncols()
    }

    /// Number of outputs the layer produces.
    pub fn output_size(&self) -> usize {
        self.weights.nrows()
    }
}
