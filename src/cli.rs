use clap::Parser;

use flappy_evo::simulation::error::ConfigError;
use flappy_evo::simulation::params::Params;

#[derive(Parser, Debug)]
#[command(author, version, about = "Flappy bird flown by evolving neural networks", long_about = None)]
pub struct Cli {
    /// JSON parameter file; defaults apply to every missing field
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of birds per generation
    #[arg(short, long)]
    pub population: Option<usize>,

    /// Number of generations to evaluate
    #[arg(short, long)]
    pub generations: Option<u32>,

    /// Seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Run without a window and without frame pacing
    #[arg(long)]
    pub headless: bool,

    /// Directory holding sprites and the overlay font
    #[arg(long, default_value = "res/asset")]
    pub assets: String,

    /// Device or file receiving the H/L jump signal
    #[arg(long)]
    pub actuator: Option<String>,

    /// Stop a headless run after this many frames
    #[arg(long)]
    pub max_frames: Option<u64>,

    /// Write the best individual of the run to this JSON file
    #[arg(long)]
    pub save_best: Option<String>,
}

impl Cli {
    /// Loads the config file if any, then applies command line overrides.
    pub fn params(&self) -> Result<Params, ConfigError> {
        let mut params = match &self.config {
            Some(path) => Params::load_from_file(path)?,
            None => Params::default(),
        };
        if let Some(population) = self.population {
            params.population_size = population;
        }
        if let Some(generations) = self.generations {
            params.num_generations = generations;
        }
        params.validate()?;
        Ok(params)
    }
}
