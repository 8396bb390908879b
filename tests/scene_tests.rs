use tatter::{Bounds, DrawCommand, MeshBuilder, NoOpStepObserver, Scene, SceneConfig, StepObserver, Vec2};

#[test]
fn small_grid_stays_finite_and_in_bounds() {
    let bounds = Bounds::from_size(100.0f32, 100.0);
    let mut cloth = MeshBuilder::centered_in(&bounds, 3, 3, 10.0).build().unwrap();
    let config = SceneConfig::new().with_grid(3, 3);

    for frame in 0..600 {
        cloth.step(0.16, &config, &bounds, &mut NoOpStepObserver);
        for p in cloth.particles() {
            assert!(p.pos.is_finite(), "frame {}: non-finite position {:?}", frame, p.pos);
            assert!(bounds.contains(p.pos), "frame {}: {:?} outside bounds", frame, p.pos);
        }
    }
}

#[test]
fn loose_pieces_fall_to_the_floor() {
    let bounds = Bounds::from_size(100.0f32, 100.0);
    let mut cloth = MeshBuilder::new(2, 3, 10.0)
        .with_origin(Vec2::new(40.0, 10.0))
        .with_particle_radius(1.0)
        .build()
        .unwrap();
    // Cut every link; row 1 is now free.
    for i in 0..cloth.constraint_count() {
        cloth.deactivate(i);
    }
    let config = SceneConfig::new();
    for _ in 0..400 {
        cloth.step(1000.0 / 60.0, &config, &bounds, &mut NoOpStepObserver);
    }

    for col in 0..cloth.cols() {
        assert_eq!(cloth.position_at(col, 0).y, 10.0);
        assert_eq!(cloth.position_at(col, 1).y, 99.0);
    }
}

#[test]
fn default_scene_survives_a_stall() {
    let mut scene = Scene::new(SceneConfig::new(), Bounds::from_size(800.0f32, 600.0)).unwrap();
    assert_eq!(scene.cloth().particle_count(), 1600);
    assert_eq!(scene.cloth().constraint_count(), 40 * 39 * 2);

    for _ in 0..30 {
        scene.frame(16.7, &mut NoOpStepObserver);
    }
    // Tab was hidden for a minute.
    let dt = scene.frame(60_000.0, &mut NoOpStepObserver);
    assert_eq!(dt, scene.config().max_time_step);
    scene.frame(16.7, &mut NoOpStepObserver);

    assert!(scene.cloth().is_finite());
}

#[test]
fn reset_replaces_torn_sheet() {
    #[derive(Default)]
    struct Resets(Vec<(usize, usize)>);
    impl StepObserver for Resets {
        fn on_reset(&mut self, particles: usize, constraints: usize) {
            self.0.push((particles, constraints));
        }
    }

    let config = SceneConfig::new().with_grid(6, 5);
    let mut scene = Scene::new(config, Bounds::from_size(200.0f32, 160.0)).unwrap();
    let fresh = scene.cloth().positions();
    let center = scene.bounds().center();

    for _ in 0..10 {
        scene.frame(16.0, &mut NoOpStepObserver);
        scene.tear_at(center, &mut NoOpStepObserver);
    }
    assert!(scene.cloth().active_constraint_count() < scene.cloth().constraint_count());

    let mut resets = Resets::default();
    scene.reset(&mut resets).unwrap();
    assert_eq!(resets.0, [(30, 5 * 5 + 6 * 4)]);
    assert_eq!(scene.cloth().active_constraint_count(), scene.cloth().constraint_count());
    assert_eq!(scene.cloth().positions(), fresh);
    // Clock restarted: the first frame after a reset does not move anything.
    assert_eq!(scene.frame(16.0, &mut NoOpStepObserver), 0.0);
}

#[test]
fn resize_refits_the_grid() {
    let config = SceneConfig::new().with_grid(8, 8);
    let mut scene = Scene::new(config, Bounds::from_size(100.0f32, 100.0)).unwrap();
    assert_eq!(scene.spacing(), 10.0);

    scene.resize(Bounds::from_size(400.0, 200.0), &mut NoOpStepObserver).unwrap();
    assert_eq!(scene.spacing(), 20.0);
    // Centred: 7 gaps of 20 around (200, 100).
    assert_eq!(scene.cloth().position_at(0, 0), Vec2::new(130.0, 30.0));
    assert!((scene.cloth().particles()[0].radius() - 2.0).abs() < 1e-6);
}

#[test]
fn reconfigure_rejects_bad_config_and_keeps_scene() {
    let mut scene = Scene::new(SceneConfig::new().with_grid(4, 4), Bounds::from_size(60.0f32, 60.0)).unwrap();
    let bad = SceneConfig::new().with_grid(0, 4);
    assert!(scene.reconfigure(bad, &mut NoOpStepObserver).is_err());
    assert_eq!(scene.cloth().particle_count(), 16);

    scene.reconfigure(SceneConfig::new().with_grid(2, 3), &mut NoOpStepObserver).unwrap();
    assert_eq!(scene.cloth().particle_count(), 6);
}

#[test]
fn draw_commands_skip_torn_links() {
    let config = SceneConfig::new().with_grid(3, 3);
    let mut scene = Scene::new(config, Bounds::from_size(50.0f32, 50.0)).unwrap();
    let before = scene.draw_commands().count();
    assert_eq!(before, 9 + 12);

    let hit = scene.tear_at(scene.bounds().center(), &mut NoOpStepObserver);
    assert!(hit.is_some());

    let segments = scene
        .draw_commands()
        .filter(|c| matches!(c, DrawCommand::Segment { .. }))
        .count();
    assert_eq!(segments, 11);
}
