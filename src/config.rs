//! Scene parameters supplied by the host's configuration layer.

use crate::error::ClothError;
use crate::float::Float;

/// Scene configuration: gravity, grid shape, relaxation and time stepping.
///
/// Coordinates are screen space, so positive gravity pulls toward +y
/// (down the canvas).
///
/// # Builder Pattern
/// ```
/// use tatter::config::SceneConfig;
///
/// let config: SceneConfig<f32> = SceneConfig::new()
///     .with_grid(20, 30)
///     .with_gravity(9.8)
///     .with_relax_iterations(15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig<F: Float> {
    /// Gravity acceleration along +y. Default: 9.8.
    pub gravity: F,
    /// Grid rows; row 0 is pinned. Default: 40.
    pub rows: usize,
    /// Grid columns. Default: 40.
    pub cols: usize,
    /// Relaxation passes over all constraints per frame. Default: 30.
    pub relax_iterations: usize,
    /// Upper bound on the per-frame time step. Default: 1000/60.
    pub max_time_step: F,
    /// Elapsed real time is multiplied by this to get the time step.
    /// Default: 0.01 (milliseconds in, simulation units out).
    pub time_scale: F,
    /// Tear radius as a multiple of the grid spacing. Default: 2.0.
    pub tear_reach: F,
    /// Particle radius as a fraction of the grid spacing. Default: 0.1.
    pub particle_radius_factor: F,
}

impl<F: Float> SceneConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SceneConfig {
            gravity: F::from_f32(9.8),
            rows: 40,
            cols: 40,
            relax_iterations: 30,
            max_time_step: F::from_f32(1000.0 / 60.0),
            time_scale: F::from_f32(0.01),
            tear_reach: F::two(),
            particle_radius_factor: F::from_f32(0.1),
        }
    }

    /// Set gravity magnitude along +y.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the grid shape.
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the number of relaxation passes per frame.
    pub fn with_relax_iterations(mut self, iterations: usize) -> Self {
        self.relax_iterations = iterations;
        self
    }

    /// Set the per-frame time step ceiling.
    pub fn with_max_time_step(mut self, max_time_step: F) -> Self {
        self.max_time_step = max_time_step;
        self
    }

    /// Set the real-time to simulation-time scale.
    pub fn with_time_scale(mut self, time_scale: F) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Set the tear radius, in grid spacings.
    pub fn with_tear_reach(mut self, reach: F) -> Self {
        self.tear_reach = reach;
        self
    }

    /// Set the particle radius, as a fraction of grid spacing.
    pub fn with_particle_radius_factor(mut self, factor: F) -> Self {
        self.particle_radius_factor = factor;
        self
    }

    /// Reject values the solver assumes never occur.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ClothError::InvalidGridDimensions { rows: self.rows, cols: self.cols });
        }
        if !self.gravity.is_finite() {
            return Err(ClothError::InvalidParameter("gravity"));
        }
        if !(self.max_time_step.is_finite() && self.max_time_step > F::zero()) {
            return Err(ClothError::InvalidTimeStep);
        }
        if !(self.time_scale.is_finite() && self.time_scale > F::zero()) {
            return Err(ClothError::InvalidTimeStep);
        }
        if !(self.tear_reach.is_finite() && self.tear_reach >= F::zero()) {
            return Err(ClothError::InvalidParameter("tear_reach"));
        }
        if !(self.particle_radius_factor.is_finite() && self.particle_radius_factor >= F::zero()) {
            return Err(ClothError::InvalidParameter("particle_radius_factor"));
        }
        Ok(())
    }
}

impl<F: Float> Default for SceneConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
