//! Rectangular cloth mesh construction.

use crate::bounds::Bounds;
use crate::cloth::Cloth;
use crate::config::SceneConfig;
use crate::constraint::Constraint;
use crate::error::ClothError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Builds a `rows x cols` grid of particles joined by structural links.
///
/// Particle at (col, row) has index `row * cols + col` and sits at
/// `origin + (col, row) * spacing`. Row 0 is pinned. Each particle links
/// to its right neighbour and to the one below; there are no shear or
/// bend links, so `rows * (cols - 1) + cols * (rows - 1)` constraints in
/// total.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBuilder<F: Float> {
    pub rows: usize,
    pub cols: usize,
    pub spacing: F,
    pub origin: Vec2<F>,
    pub particle_radius: F,
}

impl<F: Float> MeshBuilder<F> {
    /// Grid anchored at the world origin, particle radius `spacing / 10`.
    pub fn new(rows: usize, cols: usize, spacing: F) -> Self {
        MeshBuilder {
            rows,
            cols,
            spacing,
            origin: Vec2::zero(),
            particle_radius: spacing * F::from_f32(0.1),
        }
    }

    /// Grid whose centre coincides with the centre of `bounds`.
    pub fn centered_in(bounds: &Bounds<F>, rows: usize, cols: usize, spacing: F) -> Self {
        let extent = Vec2::new(
            F::from_usize(cols.saturating_sub(1)) * spacing,
            F::from_usize(rows.saturating_sub(1)) * spacing,
        );
        MeshBuilder::new(rows, cols, spacing).with_origin(bounds.center() - extent.scale(F::half()))
    }

    /// Grid sized and placed for a scene: spacing fitted to the viewport,
    /// centred, radius from the configured factor.
    pub fn for_scene(config: &SceneConfig<F>, bounds: &Bounds<F>) -> Self {
        let spacing = fit_spacing(bounds, config.rows);
        MeshBuilder::centered_in(bounds, config.rows, config.cols, spacing)
            .with_particle_radius(spacing * config.particle_radius_factor)
    }

    pub fn with_origin(mut self, origin: Vec2<F>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_particle_radius(mut self, radius: F) -> Self {
        self.particle_radius = radius;
        self
    }

    /// Allocate a fresh cloth. Nothing is shared with any earlier build.
    pub fn build(&self) -> Result<Cloth<F>, ClothError> {
        let (rows, cols) = (self.rows, self.cols);
        if rows == 0 || cols == 0 {
            return Err(ClothError::InvalidGridDimensions { rows, cols });
        }
        if !(self.spacing.is_finite() && self.spacing > F::zero()) {
            return Err(ClothError::InvalidSpacing);
        }
        if !(self.origin.is_finite() && self.particle_radius.is_finite()) {
            return Err(ClothError::InvalidParameter("origin or particle radius"));
        }

        let mut particles = AllocVec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let pos = Vec2::new(
                    self.origin.x + F::from_usize(col) * self.spacing,
                    self.origin.y + F::from_usize(row) * self.spacing,
                );
                particles.push(if row == 0 {
                    Particle::pinned(pos, self.particle_radius)
                } else {
                    Particle::new(pos, self.particle_radius)
                });
            }
        }

        // Right then down, cell by cell. Relaxation runs in this order.
        let mut constraints = AllocVec::with_capacity(rows * (cols - 1) + cols * (rows - 1));
        for row in 0..rows {
            for col in 0..cols {
                let i = row * cols + col;
                if col < cols - 1 {
                    constraints.push(Constraint::between(i, i + 1, &particles));
                }
                if row < rows - 1 {
                    constraints.push(Constraint::between(i, i + cols, &particles));
                }
            }
        }

        Ok(Cloth::from_parts(particles, constraints, rows, cols))
    }
}

/// Default spacing for a viewport: `min(width, height) / (rows + 2)`,
/// which leaves roughly a spacing of margin around the sheet.
pub fn fit_spacing<F: Float>(bounds: &Bounds<F>, rows: usize) -> F {
    bounds.width().min(bounds.height()) / F::from_usize(rows + 2)
}
