//! Tearable 2D cloth built on Verlet integration.
//!
//! `tatter` simulates a rectangular sheet of point masses joined by
//! distance constraints. Each frame the particles take one Verlet step
//! under gravity, are clamped into the world bounds, and the constraints
//! are relaxed a fixed number of times in build order. A pointer position
//! can rip the nearest link out of the sheet.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity from position history
//! - **Jakobsen relaxation**: symmetric half-corrections, stable order
//! - **Tearing**: nearest active link by point-to-segment distance
//! - **Scene lifecycle**: clamped frame clock, build-then-swap reset
//! - **Render contract**: plain `DrawCommand`s, no backend
//! - **Observable**: monitor steps and tears via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use tatter::{Bounds, NoOpStepObserver, Scene, SceneConfig, Vec2};
//!
//! let config = SceneConfig::<f32>::new().with_grid(10, 10);
//! let mut scene = Scene::new(config, Bounds::from_size(640.0, 480.0)).unwrap();
//! scene.frame(16.0, &mut NoOpStepObserver);
//! scene.tear_at(Vec2::new(320.0, 240.0), &mut NoOpStepObserver);
//! let lines = scene.cloth().segments().count();
//! assert!(lines < scene.cloth().constraint_count());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod bounds;
pub mod particle;
pub mod constraint;
pub mod mesh;
pub mod cloth;
pub mod tear;
pub mod render;
pub mod scene;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use bounds::Bounds;
pub use particle::Particle;
pub use constraint::Constraint;
pub use mesh::{MeshBuilder, fit_spacing};
pub use cloth::Cloth;
pub use tear::{find_nearest, point_to_segment_distance};
pub use render::DrawCommand;
pub use scene::{FrameClock, Scene};
pub use config::SceneConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ClothError;
