//! Axis-aligned world rectangle particles are confined to.

use crate::float::Float;
use crate::vec::Vec2;

/// The simulation world, typically the canvas extent in device pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> Bounds<F> {
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Self {
        Bounds { min, max }
    }

    /// A `width x height` rectangle anchored at the origin, like a canvas.
    pub fn from_size(width: F, height: F) -> Self {
        Bounds { min: Vec2::zero(), max: Vec2::new(width, height) }
    }

    pub fn width(&self) -> F { self.max.x - self.min.x }
    pub fn height(&self) -> F { self.max.y - self.min.y }

    pub fn center(&self) -> Vec2<F> {
        Vec2::new(
            (self.min.x + self.max.x) * F::half(),
            (self.min.y + self.max.y) * F::half(),
        )
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Vec2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Finite, with strictly positive width and height.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.width() > F::zero()
            && self.height() > F::zero()
    }

    /// Shrink every side by `margin`.
    pub fn inset(&self, margin: F) -> Self {
        Bounds {
            min: Vec2::new(self.min.x + margin, self.min.y + margin),
            max: Vec2::new(self.max.x - margin, self.max.y - margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_sized_bounds() {
        let b = Bounds::from_size(800.0f32, 600.0);
        assert_eq!(b.width(), 800.0);
        assert_eq!(b.height(), 600.0);
        assert_eq!(b.center(), Vec2::new(400.0, 300.0));
        assert!(b.contains(Vec2::new(0.0, 600.0)));
        assert!(!b.contains(Vec2::new(-0.1, 10.0)));
    }

    #[test]
    fn degenerate_bounds_are_invalid() {
        assert!(!Bounds::from_size(0.0f32, 10.0).is_valid());
        assert!(!Bounds::from_size(10.0f32, f32::NAN).is_valid());
        assert!(Bounds::from_size(1.0f64, 1.0).is_valid());
    }
}
