//! Human-readable run reports printed at generation boundaries and at the end.

use std::fmt;

use ndarray::Array2;

use super::individual::Individual;
use super::population::Population;

const RULE: &str = "------------------------------------------------";

/// Formats a `W_ho` matrix on a single line.
fn weight_summary(weights: &Array2<f64>) -> String {
    let row = weights
        .iter()
        .map(|w| format!("{w:.3}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{row}]")
}

/// Rounds to five decimals for display.
pub fn round5(value: f64) -> f64 {
    (value * 1e5).round() / 1e5
}

/// Table of individuals whose fitness is not known yet.
pub struct PopulationTable<'a> {
    /// Generation label shown in the header.
    pub generation: u32,
    /// Rows of the table.
    pub individuals: &'a [Individual],
}

impl fmt::Display for PopulationTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation : {}", self.generation)?;
        writeln!(f, "Indiv\twho\tFitness")?;
        writeln!(f, "{RULE}")?;
        for individual in self.individuals {
            writeln!(
                f,
                "{}\t{}\tUNKNOWN",
                individual.id,
                weight_summary(&individual.brain.hidden_output.weights)
            )?;
        }
        Ok(())
    }
}

/// Summary of one evaluated generation.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Generation index, starting at 1.
    pub generation: u32,
    /// Fitness of every individual, in evaluation order.
    pub fitness: Vec<f64>,
    /// `W_ho` of every evaluated individual.
    pub weights: Vec<Array2<f64>>,
    /// `W_ho` of every offspring.
    pub offspring_weights: Vec<Array2<f64>>,
    /// Index of the generation's fittest individual.
    pub best_index: usize,
    /// Fitness of the generation's fittest individual.
    pub best_fitness: f64,
    /// Best fitness ever observed, after this generation.
    pub best_so_far: f64,
    /// Whether this generation set a new record.
    pub new_record: bool,
    /// Whether this was the last generation of the run.
    pub finished: bool,
}

impl GenerationReport {
    /// Captures the state of `population` right after its offspring were bred.
    pub fn new(
        generation: u32,
        population: &Population,
        best_index: usize,
        best_fitness: f64,
        best_so_far: f64,
        new_record: bool,
        finished: bool,
    ) -> Self {
        let hidden_output = |ind: &Individual| ind.brain.hidden_output.weights.clone();
        Self {
            generation,
            fitness: population.individuals().iter().map(|i| i.fitness).collect(),
            weights: population.individuals().iter().map(hidden_output).collect(),
            offspring_weights: population.offspring().iter().map(hidden_output).collect(),
            best_index,
            best_fitness,
            best_so_far,
            new_record,
            finished,
        }
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation : {}", self.generation)?;
        writeln!(f, "Indiv\twho\tFitness")?;
        writeln!(f, "{RULE}")?;
        for (i, (weights, fitness)) in self.weights.iter().zip(&self.fitness).enumerate() {
            writeln!(f, "{}\t{}\t{}", i, weight_summary(weights), round5(*fitness))?;
        }
        writeln!(f, "The best fitness is {}", round5(self.best_fitness))?;
        writeln!(f, "The best so far is {}", round5(self.best_so_far))?;
        writeln!(f, "Offspring :")?;
        writeln!(f, "Indiv\twho\tFitness")?;
        writeln!(f, "{RULE}")?;
        for (i, weights) in self.offspring_weights.iter().enumerate() {
            writeln!(f, "{}\t{}\tUNKNOWN", i, weight_summary(weights))?;
        }
        Ok(())
    }
}

/// End-of-run summary: best fitness per generation and the best-ever weights.
pub struct FinalReport<'a> {
    /// Best fitness of every evaluated generation, oldest first.
    pub history: &'a [f64],
    /// Copy of the fittest individual ever seen.
    pub best_so_far: &'a Individual,
}

impl fmt::Display for FinalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation\tBest fitness")?;
        writeln!(f, "------------------------------------")?;
        for (i, best) in self.history.iter().enumerate() {
            writeln!(f, "{}\t{}", i + 1, best)?;
        }
        writeln!(f, "The best so far is {}:", round5(self.best_so_far.fitness))?;
        writeln!(
            f,
            "The best so far who {:.5}:",
            self.best_so_far.brain.hidden_output.weights
        )?;
        writeln!(
            f,
            "The best so far wih {:.5}:",
            self.best_so_far.brain.input_hidden.weights
        )
    }
}
