//! Generational evolution: tournament selection, uniform crossover and step mutation.
//!
//! Runs once per completed generation. Offspring are always fresh copies built from
//! the parents' weights; parents are never modified.

use rand::Rng;

use super::brain::Brain;
use super::error::ConfigError;
use super::individual::Individual;
use super::params::Params;
use super::population::Population;
use super::report::GenerationReport;

/// Genetic algorithm state that survives across generations.
#[derive(Debug, Clone)]
pub struct EvolutionEngine {
    tournament_size: usize,
    crossover_bias: f64,
    mutation_rate: f64,
    mutation_step: f64,
    num_generations: u32,
    /// Copy of the fittest individual seen so far.
    best_so_far: Individual,
    /// Best fitness of every evaluated generation, oldest first.
    history: Vec<f64>,
    /// Generation currently being evaluated, starting at 1.
    generation: u32,
}

impl EvolutionEngine {
    /// Creates an engine at generation 1.
    ///
    /// The best-so-far record starts as a random individual with zero fitness.
    pub fn new<R: Rng + ?Sized>(params: &Params, rng: &mut R) -> Result<Self, ConfigError> {
        Ok(Self {
            tournament_size: params.tournament_size,
            crossover_bias: params.crossover_bias,
            mutation_rate: params.mutation_rate,
            mutation_step: params.mutation_step,
            num_generations: params.num_generations,
            best_so_far: Individual::new_random(0, params, rng)?,
            history: Vec::with_capacity(params.num_generations as usize),
            generation: 1,
        })
    }

    /// Generation currently being evaluated.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Copy of the fittest individual seen so far.
    pub fn best_so_far(&self) -> &Individual {
        &self.best_so_far
    }

    /// Best fitness of every evaluated generation.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// True once the last generation has been evolved.
    pub fn is_finished(&self) -> bool {
        self.history.len() >= self.num_generations as usize
    }

    /// Picks a parent index by tournament.
    ///
    /// Indices are drawn uniformly with replacement. The second draw must strictly beat
    /// the first; every later draw replaces the winner on a tie.
    pub fn tournament<R: Rng + ?Sized>(&self, individuals: &[Individual], rng: &mut R) -> usize {
        let mut winner = rng.gen_range(0..individuals.len());
        for round in 1..self.tournament_size {
            let challenger = rng.gen_range(0..individuals.len());
            let (c, w) = (individuals[challenger].fitness, individuals[winner].fitness);
            let wins = if round == 1 { c > w } else { c >= w };
            if wins {
                winner = challenger;
            }
        }
        winner
    }

    /// Builds one child from two tournament-selected parents.
    pub fn breed_one<R: Rng + ?Sized>(
        &self,
        id: usize,
        individuals: &[Individual],
        rng: &mut R,
    ) -> Individual {
        let mom = self.tournament(individuals, rng);
        let dad = self.tournament(individuals, rng);
        let mut brain = Brain::crossover(
            &individuals[mom].brain,
            &individuals[dad].brain,
            self.crossover_bias,
            rng,
        );
        brain.mutate(self.mutation_rate, self.mutation_step, rng);
        Individual {
            id,
            brain,
            fitness: 0.0,
        }
    }

    /// Produces a full offspring generation.
    pub fn breed<R: Rng + ?Sized>(&self, individuals: &[Individual], rng: &mut R) -> Vec<Individual> {
        (0..individuals.len())
            .map(|id| self.breed_one(id, individuals, rng))
            .collect()
    }

    /// Closes the current generation.
    ///
    /// Breeds the offspring, updates the best-so-far record and the history, then
    /// replaces the population unless this was the last generation.
    pub fn evolve<R: Rng + ?Sized>(
        &mut self,
        population: &mut Population,
        rng: &mut R,
    ) -> GenerationReport {
        let children = self.breed(population.individuals(), rng);
        population.set_offspring(children);

        let (best_index, best_fitness) = generation_best(population.individuals());
        let new_record = best_fitness > self.best_so_far.fitness;
        if new_record {
            self.best_so_far = population.individuals()[best_index].clone();
            tracing::info!(
                generation = self.generation,
                fitness = best_fitness,
                "new best-so-far record"
            );
        }
        self.history.push(best_fitness);

        let finished = self.is_finished();
        let report = GenerationReport::new(
            self.generation,
            population,
            best_index,
            best_fitness,
            self.best_so_far.fitness,
            new_record,
            finished,
        );

        if !finished {
            population.replace_with_offspring();
            self.generation += 1;
        }

        report
    }
}

/// Index and fitness of the fittest individual. The last one wins ties.
pub fn generation_best(individuals: &[Individual]) -> (usize, f64) {
    individuals
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best_i, best_f), (i, ind)| {
            if ind.fitness >= best_f {
                (i, ind.fitness)
            } else {
                (best_i, best_f)
            }
        })
}
