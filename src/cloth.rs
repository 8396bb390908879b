//! Per-frame cloth simulation state and stepping.

use crate::bounds::Bounds;
use crate::config::SceneConfig;
use crate::constraint::Constraint;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::tear;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A cloth sheet: the particle arena and its constraints, in build order.
///
/// Created by [`MeshBuilder`](crate::MeshBuilder). A reset builds a new
/// `Cloth` and replaces this one wholesale.
#[derive(Clone, Debug)]
pub struct Cloth<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
    rows: usize,
    cols: usize,
}

impl<F: Float> Cloth<F> {
    pub(crate) fn from_parts(
        particles: AllocVec<Particle<F>>,
        constraints: AllocVec<Constraint<F>>,
        rows: usize,
        cols: usize,
    ) -> Self {
        Cloth { particles, constraints, rows, cols }
    }

    /// Advance one frame.
    ///
    /// Every particle gets gravity, one Verlet step of `dt` and a bounds
    /// clamp. Then all constraints are relaxed in build order,
    /// `config.relax_iterations` times. Relaxation is geometric and does
    /// not depend on `dt`. The caller must keep `dt` small (see
    /// [`FrameClock`](crate::FrameClock)).
    pub fn step<O: StepObserver>(
        &mut self,
        dt: F,
        config: &SceneConfig<F>,
        bounds: &Bounds<F>,
        observer: &mut O,
    ) {
        let gravity = Vec2::new(F::zero(), config.gravity);
        for p in self.particles.iter_mut() {
            p.apply_force(gravity);
            p.integrate(dt);
            p.confine_to_bounds(bounds);
        }
        observer.on_integrate();

        for i in 0..config.relax_iterations {
            for c in self.constraints.iter() {
                c.satisfy(&mut self.particles);
            }
            observer.on_relax_iteration(i);
        }

        observer.on_step_complete();
    }

    /// Deactivate the live constraint nearest to `point`, if one lies
    /// within `max_distance`. Returns its index.
    pub fn tear<O: StepObserver>(
        &mut self,
        point: Vec2<F>,
        max_distance: F,
        observer: &mut O,
    ) -> Option<usize> {
        let index = self.nearest_constraint(point, max_distance)?;
        self.constraints[index].deactivate();
        observer.on_tear(index);
        Some(index)
    }

    /// Read-only half of [`tear`](Self::tear).
    pub fn nearest_constraint(&self, point: Vec2<F>, max_distance: F) -> Option<usize> {
        tear::find_nearest(point, &self.constraints, &self.particles, max_distance)
    }

    /// Deactivate a constraint by index. Returns false if out of range.
    pub fn deactivate(&mut self, index: usize) -> bool {
        match self.constraints.get_mut(index) {
            Some(c) => {
                c.deactivate();
                true
            }
            None => false,
        }
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.particles[self.index(col, row)].pos
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// False as soon as any particle position is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.particles.iter().all(|p| p.pos.is_finite())
    }

    pub fn active_constraint_count(&self) -> usize {
        self.constraints.iter().filter(|c| c.is_active()).count()
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[Constraint<F>] { &self.constraints }
    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> { &mut self.particles[index] }
    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
}
