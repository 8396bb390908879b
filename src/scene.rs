//! Scene lifecycle: frame clock, rebuild-and-swap reset, tearing.

use crate::bounds::Bounds;
use crate::cloth::Cloth;
use crate::config::SceneConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::mesh::MeshBuilder;
use crate::observer::StepObserver;
use crate::render::DrawCommand;
use crate::vec::Vec2;

/// Turns elapsed real time into a bounded simulation time step.
///
/// `time_step = min(max_time_step, elapsed * time_scale)`. Without the
/// ceiling a long stall (hidden tab, debugger) would integrate one huge
/// step and blow the sheet apart.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameClock<F: Float> {
    max_time_step: F,
    time_scale: F,
    total: F,
    skip_next: bool,
}

impl<F: Float> FrameClock<F> {
    pub fn new(max_time_step: F, time_scale: F) -> Self {
        FrameClock { max_time_step, time_scale, total: F::zero(), skip_next: false }
    }

    pub fn from_config(config: &SceneConfig<F>) -> Self {
        FrameClock::new(config.max_time_step, config.time_scale)
    }

    /// Time step for a frame that took `elapsed` real time. Negative or
    /// non-finite input counts as zero.
    pub fn tick(&mut self, elapsed: F) -> F {
        let elapsed = if elapsed.is_finite() && elapsed > F::zero() { elapsed } else { F::zero() };
        if self.skip_next {
            self.skip_next = false;
            return F::zero();
        }
        self.total = self.total + elapsed;
        (elapsed * self.time_scale).min(self.max_time_step)
    }

    /// Drop whatever real time accumulated since the last frame; the next
    /// tick yields a zero step. Call when the view becomes visible again.
    pub fn restart(&mut self) {
        self.skip_next = true;
    }

    /// Real time accounted for so far, excluding skipped frames.
    pub fn total_elapsed(&self) -> F {
        self.total
    }
}

/// Everything a host needs to run the cloth: config, world bounds, the
/// current sheet and the frame clock.
///
/// All mutation goes through `&mut self`, so a tear can never interleave
/// with a step in progress.
#[derive(Clone, Debug)]
pub struct Scene<F: Float> {
    config: SceneConfig<F>,
    bounds: Bounds<F>,
    spacing: F,
    cloth: Cloth<F>,
    clock: FrameClock<F>,
}

impl<F: Float> Scene<F> {
    pub fn new(config: SceneConfig<F>, bounds: Bounds<F>) -> Result<Self, ClothError> {
        config.validate()?;
        let (cloth, spacing) = Self::build(&config, &bounds)?;
        let clock = FrameClock::from_config(&config);
        Ok(Scene { config, bounds, spacing, cloth, clock })
    }

    fn build(config: &SceneConfig<F>, bounds: &Bounds<F>) -> Result<(Cloth<F>, F), ClothError> {
        if !bounds.is_valid() {
            return Err(ClothError::InvalidBounds);
        }
        let builder = MeshBuilder::for_scene(config, bounds);
        let cloth = builder.build()?;
        Ok((cloth, builder.spacing))
    }

    /// Advance one frame given the real time since the previous one.
    /// Returns the time step actually integrated.
    pub fn frame<O: StepObserver>(&mut self, elapsed: F, observer: &mut O) -> F {
        let dt = self.clock.tick(elapsed);
        self.cloth.step(dt, &self.config, &self.bounds, observer);
        dt
    }

    /// Discard the sheet and build a fresh one. The old sheet stays in
    /// place if the build fails.
    pub fn reset<O: StepObserver>(&mut self, observer: &mut O) -> Result<(), ClothError> {
        let (cloth, spacing) = Self::build(&self.config, &self.bounds)?;
        self.swap_in(cloth, spacing, observer);
        Ok(())
    }

    /// New world bounds (canvas resize). Rebuilds the sheet to fit.
    pub fn resize<O: StepObserver>(
        &mut self,
        bounds: Bounds<F>,
        observer: &mut O,
    ) -> Result<(), ClothError> {
        let (cloth, spacing) = Self::build(&self.config, &bounds)?;
        self.bounds = bounds;
        self.swap_in(cloth, spacing, observer);
        Ok(())
    }

    /// Replace the configuration and rebuild.
    pub fn reconfigure<O: StepObserver>(
        &mut self,
        config: SceneConfig<F>,
        observer: &mut O,
    ) -> Result<(), ClothError> {
        config.validate()?;
        let (cloth, spacing) = Self::build(&config, &self.bounds)?;
        self.clock = FrameClock::from_config(&config);
        self.config = config;
        self.swap_in(cloth, spacing, observer);
        Ok(())
    }

    fn swap_in<O: StepObserver>(&mut self, cloth: Cloth<F>, spacing: F, observer: &mut O) {
        self.cloth = cloth;
        self.spacing = spacing;
        self.clock.restart();
        observer.on_reset(self.cloth.particle_count(), self.cloth.constraint_count());
    }

    /// Rip the link nearest to a pointer position, within
    /// [`tear_radius`](Self::tear_radius).
    pub fn tear_at<O: StepObserver>(&mut self, point: Vec2<F>, observer: &mut O) -> Option<usize> {
        let radius = self.tear_radius();
        self.cloth.tear(point, radius, observer)
    }

    pub fn tear_radius(&self) -> F {
        self.spacing * self.config.tear_reach
    }

    pub fn restart_clock(&mut self) {
        self.clock.restart();
    }

    pub fn draw_commands(&self) -> impl Iterator<Item = DrawCommand<F>> + '_ {
        self.cloth.draw_commands()
    }

    pub fn cloth(&self) -> &Cloth<F> { &self.cloth }
    pub fn config(&self) -> &SceneConfig<F> { &self.config }
    pub fn bounds(&self) -> &Bounds<F> { &self.bounds }
    pub fn spacing(&self) -> F { self.spacing }
    pub fn clock(&self) -> &FrameClock<F> { &self.clock }
}
