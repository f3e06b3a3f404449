//! The player-controlled bird.

use super::params::Params;
use super::sprite::{Positioned, Sprite};

/// The bird: a box falling under gravity that can jump.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Bounding box.
    pub sprite: Sprite,
    /// Vertical velocity, positive pointing down.
    pub velocity: f64,
    /// Score of the current episode.
    pub score: f64,
    /// Best score seen since the program started.
    pub high_score: f64,
    gravity: f64,
    jump_velocity: f64,
}

impl Bird {
    /// Creates a bird resting at the start position.
    pub fn new(params: &Params) -> Self {
        let (x, y) = params.bird_start;
        let (width, height) = params.bird_size;
        Self {
            sprite: Sprite::from_center(x, y, width, height),
            velocity: 0.0,
            score: 0.0,
            high_score: 0.0,
            gravity: params.gravity,
            jump_velocity: params.jump_velocity,
        }
    }

    /// Sets the velocity to the jump speed, discarding the current velocity.
    pub fn jump(&mut self) {
        self.velocity = -self.jump_velocity;
    }

    /// Puts the bird back at `(x, y)` with no velocity and no score.
    pub fn reset(&mut self, x: f64, y: f64) {
        self.sprite.set_center(x, y);
        self.velocity = 0.0;
        self.score = 0.0;
    }

    /// Adds to the score and raises the high score if needed.
    pub fn add_score(&mut self, amount: f64) {
        self.score += amount;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}

impl Positioned for Bird {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    // Position moves first, then gravity applies to the next tick.
    fn update(&mut self) {
        self.sprite.translate(0.0, self.velocity);
        self.velocity += self.gravity;
    }
}
