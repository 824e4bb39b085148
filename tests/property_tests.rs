use proptest::prelude::*;
use slingshot_physics::*;

fn body_strategy() -> impl Strategy<Value = Body> {
    (
        0.0f32..1200.0,
        0.0f32..550.0,
        -500.0f32..500.0,
        -500.0f32..500.0,
        0.5f32..50.0,
    )
        .prop_map(|(x, y, vx, vy, mass)| Body::new(Vec2::new(x, y), Vec2::new(vx, vy), mass))
}

fn invalid_mass_strategy() -> impl Strategy<Value = f32> {
    prop_oneof![
        Just(0.0f32),
        -50.0f32..0.0,
        Just(f32::NAN),
        Just(f32::INFINITY),
    ]
}

fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    (body_strategy(), prop::collection::vec(body_strategy(), 0..12))
        .prop_map(|(projectile, blocks)| Snapshot::new(projectile, blocks))
}

proptest! {
    #[test]
    fn zero_dt_is_identity(snapshot in snapshot_strategy()) {
        let engine = PhysicsEngine::default();
        prop_assert_eq!(engine.step(&snapshot, 0.0), snapshot);
    }

    #[test]
    fn steps_are_deterministic(snapshot in snapshot_strategy(), dt in 0.001f32..0.05) {
        let engine = PhysicsEngine::default();
        let first = engine.step(&snapshot, dt);
        let second = engine.step(&snapshot, dt);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn step_keeps_shape_of_the_scene(snapshot in snapshot_strategy(), dt in 0.001f32..0.05) {
        let engine = PhysicsEngine::default();
        let next = engine.step(&snapshot, dt);

        prop_assert_eq!(next.body_count(), snapshot.body_count());
        for ((_, before), (_, after)) in snapshot.iter().zip(next.iter()) {
            prop_assert_eq!(before.mass, after.mass);
            prop_assert!(after.position.is_finite());
            prop_assert!(after.velocity.is_finite());
        }
    }

    #[test]
    fn pair_resolution_never_adds_energy(
        a in body_strategy(),
        b in body_strategy(),
        offset in (-30.0f32..30.0, -30.0f32..30.0)
    ) {
        let config = SimulationConfig::default();
        let detector = CollisionDetector::from_config(&config);
        let resolver = CollisionResolver::from_config(&config);

        let b = Body { position: a.position + Vec2::new(offset.0, offset.1), ..b };
        let mut bodies = [TaggedBody::block(a), TaggedBody::block(b)];
        let before: f32 = bodies.iter().map(|t| t.body.kinetic_energy()).sum();

        if let Some(contact) = detector.test_pair(&bodies[0], &bodies[1], 0, 1) {
            resolver.resolve(&mut bodies, &contact);
            let after: f32 = bodies.iter().map(|t| t.body.kinetic_energy()).sum();
            let bound = before * config.restitution * config.restitution;
            prop_assert!(after <= bound * (1.0 + 1e-4) + 1e-3, "{} -> {}", before, after);
        }
    }

    #[test]
    fn immovable_partner_never_adds_energy(
        movable in body_strategy(),
        wall in body_strategy(),
        wall_mass in invalid_mass_strategy(),
        offset in (-30.0f32..30.0, -30.0f32..30.0)
    ) {
        let config = SimulationConfig::default();
        let detector = CollisionDetector::from_config(&config);
        let resolver = CollisionResolver::from_config(&config);

        let wall = Body {
            position: movable.position + Vec2::new(offset.0, offset.1),
            mass: wall_mass,
            ..wall
        };
        let mut bodies = [TaggedBody::block(movable), TaggedBody::block(wall)];
        let before = movable.kinetic_energy();

        if let Some(contact) = detector.test_pair(&bodies[0], &bodies[1], 0, 1) {
            resolver.resolve(&mut bodies, &contact);
            let after = bodies[0].body.kinetic_energy();
            prop_assert!(after <= before * (1.0 + 1e-4) + 1e-3, "{} -> {}", before, after);
            prop_assert_eq!(bodies[1].body.position, wall.position);
            prop_assert_eq!(bodies[1].body.velocity, wall.velocity);
        }
    }

    #[test]
    fn lone_block_follows_gravity(y in 0.0f32..200.0, dt in 0.001f32..0.02) {
        let engine = PhysicsEngine::default();
        let snapshot = Snapshot::new(
            Body::at_rest(Vec2::new(-400.0, 0.0), 1.0),
            vec![Body::at_rest(Vec2::new(600.0, y), 10.0)],
        );
        let next = engine.step(&snapshot, dt);
        let expected = engine.config().gravity * dt;
        prop_assert!((next.blocks[0].velocity.y - expected).abs() < 1e-4);
    }
}
