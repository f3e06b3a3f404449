//! Scrolling floor tiles. Purely visual; the death line lives in [`super::params::Params::ground_y`].

use super::params::Params;
use super::sprite::{Positioned, Sprite};

/// One floor tile. Two tiles side by side give an endless floor.
#[derive(Debug, Clone)]
pub struct Floor {
    /// Bounding box.
    pub sprite: Sprite,
    velocity: f64,
}

impl Floor {
    /// Creates the two tiles covering the field width.
    pub fn tiles(params: &Params) -> [Floor; 2] {
        [0.0, params.floor_width].map(|left| Floor {
            sprite: Sprite::from_top_left(
                left,
                params.floor_y,
                params.floor_width,
                params.floor_height,
            ),
            velocity: params.floor_velocity,
        })
    }
}

impl Positioned for Floor {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn update(&mut self) {
        self.sprite.translate(-self.velocity, 0.0);
        let width = self.sprite.width();
        if self.sprite.left() <= -width {
            self.sprite.set_left(width);
        }
    }
}
