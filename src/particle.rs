//! Verlet point masses.

use crate::bounds::Bounds;
use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet particle: velocity is implied by `pos - prev_pos`.
///
/// `pinned` and `radius` are fixed at construction. A pinned particle is
/// never moved by forces, integration, constraint correction or bounds
/// confinement.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    radius: F,
    pinned: bool,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec2<F>, radius: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            radius,
            pinned: false,
        }
    }

    pub fn pinned(pos: Vec2<F>, radius: F) -> Self {
        Particle {
            pinned: true,
            ..Particle::new(pos, radius)
        }
    }

    pub fn is_pinned(&self) -> bool { self.pinned }
    pub fn radius(&self) -> F { self.radius }

    /// Accumulate a force for the current step. Unit mass, so force and
    /// acceleration coincide.
    pub fn apply_force(&mut self, force: Vec2<F>) {
        if !self.pinned {
            self.acceleration += force;
        }
    }

    /// Störmer-Verlet step, then clear the accumulator.
    pub fn integrate(&mut self, dt: F) {
        if self.pinned {
            return;
        }
        let velocity = self.pos - self.prev_pos;
        self.prev_pos = self.pos;
        self.pos = self.pos + velocity + self.acceleration.scale(dt * dt);
        self.acceleration = Vec2::zero();
    }

    /// Clamp each axis into `[min + radius, max - radius]`.
    ///
    /// Only `pos` changes, so the clamp also eats the velocity component
    /// pointing out of the box on the next integration.
    pub fn confine_to_bounds(&mut self, bounds: &Bounds<F>) {
        if self.pinned {
            return;
        }
        let inner = bounds.inset(self.radius);
        self.pos.x = self.pos.x.clamp(inner.min.x, inner.max.x);
        self.pos.y = self.pos.y.clamp(inner.min.y, inner.max.y);
    }

    /// Per-step displacement, the implicit velocity.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}
