//! Distance links between particles, relaxed Jakobsen-style.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// A distance link between two particles of a [`Cloth`](crate::Cloth).
///
/// Endpoints are indices into the particle arena. The rest length is
/// frozen at construction. Tearing flips `active` to false for good;
/// the link stays in the sequence so indices and relaxation order never
/// shift.
#[derive(Clone, Debug)]
pub struct Constraint<F: Float> {
    a: usize,
    b: usize,
    rest_length: F,
    active: bool,
}

impl<F: Float> Constraint<F> {
    pub fn with_rest_length(a: usize, b: usize, rest_length: F) -> Self {
        Constraint { a, b, rest_length, active: true }
    }

    /// Link `a` and `b`, taking their current distance as the rest length.
    pub fn between(a: usize, b: usize, particles: &[Particle<F>]) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        Constraint::with_rest_length(a, b, rest_length)
    }

    pub fn a(&self) -> usize { self.a }
    pub fn b(&self) -> usize { self.b }
    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn is_active(&self) -> bool { self.active }

    /// Permanently disable the link. Idempotent.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn endpoints(&self, particles: &[Particle<F>]) -> (Vec2<F>, Vec2<F>) {
        (particles[self.a].pos, particles[self.b].pos)
    }

    pub fn current_length(&self, particles: &[Particle<F>]) -> F {
        let (p1, p2) = self.endpoints(particles);
        p1.distance(p2)
    }

    /// One relaxation pass: each free endpoint moves by half the length
    /// error along the link.
    ///
    /// The correction is not mass- or pin-weighted, so a link with one
    /// pinned end closes only half its error per call. Repeated passes
    /// over the whole mesh are what converge it.
    pub fn satisfy(&self, particles: &mut [Particle<F>]) {
        if !self.active {
            return;
        }

        let delta = particles[self.b].pos - particles[self.a].pos;
        let current_length = delta.length();
        // Coincident endpoints: no direction to push along.
        if current_length <= F::zero() {
            return;
        }

        let strain = (current_length - self.rest_length) / current_length;
        let correction = delta.scale(F::half() * strain);

        if !particles[self.a].is_pinned() {
            particles[self.a].pos += correction;
        }
        if !particles[self.b].is_pinned() {
            particles[self.b].pos -= correction;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: Vec2<f32>, b: Vec2<f32>) -> [Particle<f32>; 2] {
        [Particle::new(a, 1.0), Particle::new(b, 1.0)]
    }

    #[test]
    fn rest_length_measured_at_construction() {
        let particles = pair(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        let c = Constraint::between(0, 1, &particles);
        assert!((c.rest_length() - 5.0).abs() < 1e-6);
        assert!(c.is_active());
    }

    #[test]
    fn free_pair_snaps_to_rest_length() {
        let mut particles = pair(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let c = Constraint::with_rest_length(0, 1, 4.0);
        c.satisfy(&mut particles);
        assert!((particles[0].pos.x - 3.0).abs() < 1e-6);
        assert!((particles[1].pos.x - 7.0).abs() < 1e-6);
    }

    #[test]
    fn pinned_endpoint_gets_half_correction_only() {
        let mut particles = [
            Particle::pinned(Vec2::new(0.0f32, 0.0), 1.0),
            Particle::new(Vec2::new(0.0, 12.0), 1.0),
        ];
        let c = Constraint::with_rest_length(0, 1, 10.0);
        c.satisfy(&mut particles);
        assert_eq!(particles[0].pos, Vec2::new(0.0, 0.0));
        assert!((particles[1].pos.y - 11.0).abs() < 1e-6);
    }

    #[test]
    fn coincident_endpoints_are_left_alone() {
        let mut particles = pair(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
        let c = Constraint::with_rest_length(0, 1, 1.0);
        c.satisfy(&mut particles);
        assert!(particles[0].pos.is_finite());
        assert_eq!(particles[0].pos, Vec2::new(2.0, 2.0));
        assert_eq!(particles[1].pos, Vec2::new(2.0, 2.0));
    }
}
