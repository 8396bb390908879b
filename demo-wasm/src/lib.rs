use tatter::{Bounds, NoOpStepObserver, Scene, SceneConfig, Vec2};
use wasm_bindgen::prelude::*;

// ---- Cloth Demo ----

/// Browser-facing cloth. The page owns the canvas, the animation frame
/// loop, pointer listeners and the settings panel; it calls in here and
/// draws what comes back.
#[wasm_bindgen]
pub struct ClothDemo {
    scene: Scene<f32>,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<ClothDemo, JsError> {
        let scene = Scene::new(SceneConfig::new(), Bounds::from_size(width, height))
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ClothDemo { scene })
    }

    /// Canvas was resized; rebuilds the sheet to fit.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsError> {
        self.scene
            .resize(Bounds::from_size(width, height), &mut NoOpStepObserver)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Apply settings from the panel and rebuild.
    pub fn configure(
        &mut self,
        gravity: f32,
        rows: usize,
        cols: usize,
        relax_iterations: usize,
    ) -> Result<(), JsError> {
        let config = self
            .scene
            .config()
            .clone()
            .with_gravity(gravity)
            .with_grid(rows, cols)
            .with_relax_iterations(relax_iterations);
        self.scene
            .reconfigure(config, &mut NoOpStepObserver)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn reset(&mut self) -> Result<(), JsError> {
        self.scene
            .reset(&mut NoOpStepObserver)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// `elapsed_ms` is the real time since the previous animation frame.
    pub fn update(&mut self, elapsed_ms: f32) {
        self.scene.frame(elapsed_ms, &mut NoOpStepObserver);
    }

    /// Call on `visibilitychange` when the page becomes visible.
    pub fn restart_clock(&mut self) {
        self.scene.restart_clock();
    }

    /// Pointer drag in canvas pixels. Returns true if a link was cut.
    pub fn tear(&mut self, x: f32, y: f32) -> bool {
        self.scene.tear_at(Vec2::new(x, y), &mut NoOpStepObserver).is_some()
    }

    /// Returns flat [x0, y0, r0, x1, y1, r1, ...] in row-major order
    pub fn particles(&self) -> Vec<f32> {
        let particles = self.scene.cloth().particles();
        let mut out = Vec::with_capacity(particles.len() * 3);
        for p in particles {
            out.push(p.pos.x);
            out.push(p.pos.y);
            out.push(p.radius());
        }
        out
    }

    /// Returns flat [x1, y1, x2, y2, ...] for every intact link
    pub fn segments(&self) -> Vec<f32> {
        let cloth = self.scene.cloth();
        let mut out = Vec::with_capacity(cloth.active_constraint_count() * 4);
        for (a, b) in cloth.segments() {
            out.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        }
        out
    }

    pub fn cols(&self) -> usize {
        self.scene.cloth().cols()
    }
    pub fn rows(&self) -> usize {
        self.scene.cloth().rows()
    }
}
