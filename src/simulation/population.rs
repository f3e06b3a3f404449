//! The evaluated population and its offspring buffer.
//!
//! Individuals are evaluated one at a time, in order. Fitness accumulates while the
//! current individual's bird is alive and is kept across the generation's episodes.

use rand::Rng;

use super::error::ConfigError;
use super::individual::Individual;
use super::params::Params;

/// Current generation plus the buffer its offspring are written into.
///
/// Both vectors always have the same length.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
    offspring: Vec<Individual>,
    current: usize,
}

impl Population {
    /// Creates `params.population_size` random individuals.
    pub fn new_random<R: Rng + ?Sized>(params: &Params, rng: &mut R) -> Result<Self, ConfigError> {
        let individuals = (0..params.population_size)
            .map(|i| Individual::new_random(i, params, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_individuals(individuals))
    }

    /// Wraps an existing generation. The offspring buffer starts as a copy.
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        let offspring = individuals.clone();
        Self {
            individuals,
            offspring,
            current: 0,
        }
    }

    /// Number of individuals per generation.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// True if the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Individuals of the current generation.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Offspring buffer for the next generation.
    pub fn offspring(&self) -> &[Individual] {
        &self.offspring
    }

    /// Index of the individual being evaluated.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The individual being evaluated.
    pub fn current(&self) -> &Individual {
        &self.individuals[self.current]
    }

    /// Adds survival reward to the individual being evaluated.
    pub fn reward_current(&mut self, amount: f64) {
        self.individuals[self.current].reward(amount);
    }

    /// True if the current individual is the last one of the generation.
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.individuals.len()
    }

    /// Moves on to the next individual.
    ///
    /// # Returns
    ///
    /// `false` if the current individual was the last one, in which case nothing changes.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Stores the next generation. `children` must match the population size.
    pub fn set_offspring(&mut self, children: Vec<Individual>) {
        assert_eq!(
            children.len(),
            self.individuals.len(),
            "offspring count must equal the population size"
        );
        self.offspring = children;
    }

    /// Makes the offspring the current generation, zeroes every fitness and restarts
    /// evaluation at the first individual.
    pub fn replace_with_offspring(&mut self) {
        std::mem::swap(&mut self.individuals, &mut self.offspring);
        for (id, individual) in self.individuals.iter_mut().enumerate() {
            individual.id = id;
            individual.fitness = 0.0;
        }
        self.current = 0;
    }
}
