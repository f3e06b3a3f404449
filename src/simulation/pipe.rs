//! Pipe obstacles. Pipes spawn in pairs sharing a centre line.

use super::params::Params;
use super::sprite::{Positioned, Sprite};

/// Which half of a pipe pair a pipe is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeKind {
    /// Rises from below the field up to the gap.
    Bottom,
    /// Hangs from above the field down to the gap.
    Top,
}

/// A single pipe scrolling to the left.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Bounding box.
    pub sprite: Sprite,
    /// Half of the pair this pipe belongs to.
    pub kind: PipeKind,
    velocity: f64,
}

impl Pipe {
    /// Creates the bottom and top pipe for a gap whose lower edge sits at `height`.
    pub fn pair(height: f64, params: &Params) -> (Pipe, Pipe) {
        let (width, length) = params.pipe_size;
        let bottom = Pipe {
            sprite: Sprite::from_mid_top(params.pipe_spawn_x, height, width, length),
            kind: PipeKind::Bottom,
            velocity: params.pipe_velocity,
        };
        let top = Pipe {
            sprite: Sprite::from_mid_bottom(
                params.pipe_spawn_x,
                height - params.pipe_gap,
                width,
                length,
            ),
            kind: PipeKind::Top,
            velocity: params.pipe_velocity,
        };
        (bottom, top)
    }

    /// True once the pipe has scrolled past `cull_x`.
    pub fn is_off_screen(&self, cull_x: f64) -> bool {
        self.sprite.right() <= cull_x
    }
}

impl Positioned for Pipe {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn update(&mut self) {
        self.sprite.translate(-self.velocity, 0.0);
    }
}
