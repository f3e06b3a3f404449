//! Positioned boxes shared by every game entity.
//!
//! Entities do not inherit from a common sprite base; each one owns a [`Sprite`]
//! (an axis-aligned box in field coordinates, y pointing down) and exposes it through
//! the [`Positioned`] trait.

use geo::{Rect, coord};

/// Axis-aligned bounding box of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    rect: Rect<f64>,
}

impl Sprite {
    /// Creates a box from its top-left corner and size.
    pub fn from_top_left(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            rect: Rect::new(
                coord! { x: left, y: top },
                coord! { x: left + width, y: top + height },
            ),
        }
    }

    /// Creates a box from its centre and size.
    pub fn from_center(center_x: f64, center_y: f64, width: f64, height: f64) -> Self {
        Self::from_top_left(
            center_x - width / 2.0,
            center_y - height / 2.0,
            width,
            height,
        )
    }

    /// Creates a box whose top edge is centred on `(center_x, top)`.
    pub fn from_mid_top(center_x: f64, top: f64, width: f64, height: f64) -> Self {
        Self::from_top_left(center_x - width / 2.0, top, width, height)
    }

    /// Creates a box whose bottom edge is centred on `(center_x, bottom)`.
    pub fn from_mid_bottom(center_x: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self::from_top_left(center_x - width / 2.0, bottom - height, width, height)
    }

    /// Left edge.
    pub fn left(&self) -> f64 {
        self.rect.min().x
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.rect.max().x
    }

    /// Top edge.
    pub fn top(&self) -> f64 {
        self.rect.min().y
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.rect.max().y
    }

    /// Horizontal centre.
    pub fn center_x(&self) -> f64 {
        self.rect.center().x
    }

    /// Vertical centre.
    pub fn center_y(&self) -> f64 {
        self.rect.center().y
    }

    /// Box width.
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Box height.
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Moves the box by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        *self = Self::from_top_left(self.left() + dx, self.top() + dy, self.width(), self.height());
    }

    /// Moves the box so that its centre lands on `(x, y)`.
    pub fn set_center(&mut self, x: f64, y: f64) {
        *self = Self::from_center(x, y, self.width(), self.height());
    }

    /// Moves the box vertically so that its top edge lands on `top`.
    pub fn set_top(&mut self, top: f64) {
        self.translate(0.0, top - self.top());
    }

    /// Moves the box horizontally so that its left edge lands on `left`.
    pub fn set_left(&mut self, left: f64) {
        self.translate(left - self.left(), 0.0);
    }

    /// True if the two boxes share interior area. Touching edges do not count.
    pub fn overlaps(&self, other: &Sprite) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Entities that occupy a box on the field and advance once per tick.
pub trait Positioned {
    /// Returns the entity's box.
    fn sprite(&self) -> &Sprite;

    /// Advances the entity by one tick.
    fn update(&mut self);
}
