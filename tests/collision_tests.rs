use approx::assert_relative_eq;
use slingshot_physics::*;

/// Engine with gravity switched off so only collisions move bodies.
fn weightless_engine() -> PhysicsEngine {
    PhysicsEngine::new(SimulationConfig::default().with_gravity(0.0))
}

/// Projectile parked far away from the blocks under test.
fn parked_projectile() -> Body {
    Body::at_rest(Vec2::new(50.0, 100.0), 1.0)
}

#[test]
fn overlapping_blocks_are_separated_to_contact_distance() {
    let engine = weightless_engine();
    let snapshot = Snapshot::new(
        parked_projectile(),
        vec![
            Body::at_rest(Vec2::new(400.0, 300.0), 10.0),
            Body::at_rest(Vec2::new(410.0, 300.0), 10.0),
        ],
    );

    let next = engine.step(&snapshot, 1.0 / 60.0);
    let (a, b) = (next.blocks[0].position, next.blocks[1].position);

    assert_eq!(a.distance(b), 40.0);
    assert_eq!((a + b) * 0.5, Vec2::new(405.0, 300.0));
    assert_eq!(a, Vec2::new(385.0, 300.0));
    assert_eq!(b, Vec2::new(425.0, 300.0));
}

#[test]
fn equal_masses_swap_velocities_with_energy_loss() {
    let engine = weightless_engine();
    let snapshot = Snapshot::new(
        parked_projectile(),
        vec![
            Body::new(Vec2::new(400.0, 300.0), Vec2::new(100.0, 0.0), 10.0),
            Body::new(Vec2::new(430.0, 300.0), Vec2::new(-100.0, 0.0), 10.0),
        ],
    );

    let next = engine.step(&snapshot, 0.01);
    let restitution = engine.config().restitution;

    assert_relative_eq!(next.blocks[0].velocity.x, -100.0 * restitution, epsilon = 1e-4);
    assert_relative_eq!(next.blocks[1].velocity.x, 100.0 * restitution, epsilon = 1e-4);
    assert_eq!(next.blocks[0].velocity.y, 0.0);
    assert_eq!(next.blocks[1].velocity.y, 0.0);
}

#[test]
fn collision_drains_kinetic_energy() {
    let config = SimulationConfig::default();
    let detector = CollisionDetector::from_config(&config);
    let resolver = CollisionResolver::from_config(&config);

    let mut bodies = [
        TaggedBody::projectile(Body::new(Vec2::new(0.0, 0.0), Vec2::new(420.0, -35.0), 1.0)),
        TaggedBody::block(Body::new(Vec2::new(25.0, 12.0), Vec2::new(-3.0, 8.0), 10.0)),
    ];
    let energy = |bodies: &[TaggedBody]| -> f32 {
        bodies.iter().map(|tagged| tagged.body.kinetic_energy()).sum()
    };

    let before = energy(&bodies);
    let contact = detector
        .test_pair(&bodies[0], &bodies[1], 0, 1)
        .expect("projectile overlaps block");
    resolver.resolve(&mut bodies, &contact);
    let after = energy(&bodies);

    assert!(after < before, "energy grew: {before} -> {after}");
    assert_relative_eq!(after, before * 0.64, max_relative = 1e-4);
}

#[test]
fn heavy_block_barely_moves_when_hit() {
    let engine = weightless_engine();
    let snapshot = Snapshot::new(
        Body::new(Vec2::new(570.0, 300.0), Vec2::new(300.0, 0.0), 1.0),
        vec![Body::at_rest(Vec2::new(600.0, 300.0), 10.0)],
    );

    let next = engine.step(&snapshot, 0.01);
    let projectile_shift = (next.projectile.position.x - 573.0).abs();
    let block_shift = (next.blocks[0].position.x - 600.0).abs();

    assert!(block_shift < projectile_shift);
    assert!(next.projectile.velocity.x < 0.0, "projectile should bounce back");
    assert!(next.blocks[0].velocity.x > 0.0, "block should be pushed forward");
}

#[test]
fn coincident_centers_separate_along_x() {
    let engine = weightless_engine();
    let snapshot = Snapshot::new(
        parked_projectile(),
        vec![
            Body::at_rest(Vec2::new(500.0, 300.0), 10.0),
            Body::at_rest(Vec2::new(500.0, 300.0), 10.0),
        ],
    );

    let next = engine.step(&snapshot, 1.0 / 60.0);

    assert_eq!(next.blocks[0].position, Vec2::new(480.0, 300.0));
    assert_eq!(next.blocks[1].position, Vec2::new(520.0, 300.0));
    assert!(next.iter().all(|(_, body)| body.position.is_finite()));
}

#[test]
fn pair_push_may_leave_a_block_below_the_floor() {
    let engine = weightless_engine();
    let floor = engine.config().floor_line();
    let snapshot = Snapshot::new(
        parked_projectile(),
        vec![
            Body::at_rest(Vec2::new(400.0, floor - 30.0), 10.0),
            Body::at_rest(Vec2::new(400.0, floor), 10.0),
        ],
    );

    // The ground clamp runs before pair resolution, so the lower block is
    // pushed five units into the ground during this step...
    let next = engine.step(&snapshot, 1.0 / 60.0);
    assert_eq!(next.blocks[1].position.y, floor + 5.0);

    // The next step clamps it back before the pair pushes it down again by
    // half of the remaining overlap.
    let settled = engine.step(&next, 1.0 / 60.0);
    assert_eq!(settled.blocks[1].position.y, floor + 2.5);
}

#[test]
fn immovable_block_does_not_stop_the_step() {
    let engine = weightless_engine();
    let snapshot = Snapshot::new(
        Body::new(Vec2::new(575.0, 300.0), Vec2::new(100.0, 0.0), 1.0),
        vec![Body::at_rest(Vec2::new(600.0, 300.0), 0.0)],
    );

    let (next, stats) = engine.step_with_stats(&snapshot, 0.01);

    assert_eq!(stats.contacts_resolved, 1);
    assert_eq!(next.blocks[0].position, Vec2::new(600.0, 300.0));
    assert_relative_eq!(next.projectile.velocity.x, -80.0, epsilon = 0.5);
}

#[test]
fn moving_invalid_mass_block_adds_no_energy() {
    let engine = weightless_engine();
    let snapshot = Snapshot::new(
        parked_projectile(),
        vec![
            Body::new(Vec2::new(400.0, 300.0), Vec2::new(200.0, 0.0), 0.0),
            Body::at_rest(Vec2::new(430.0, 300.0), 10.0),
        ],
    );

    let before = snapshot.total_kinetic_energy();
    let (next, stats) = engine.step_with_stats(&snapshot, 0.001);
    let after = next.total_kinetic_energy();

    assert_eq!(stats.contacts_resolved, 1);
    assert!(after <= before, "energy grew: {before} -> {after}");
    assert_eq!(next.blocks[1].velocity, Vec2::ZERO);
    assert_eq!(next.blocks[0].velocity, Vec2::new(200.0, 0.0));
}

#[test]
fn overlap_query_does_not_resolve() {
    let engine = weightless_engine();
    let snapshot = Snapshot::new(
        Body::at_rest(Vec2::new(610.0, 300.0), 1.0),
        vec![
            Body::at_rest(Vec2::new(600.0, 300.0), 10.0),
            Body::at_rest(Vec2::new(630.0, 300.0), 10.0),
        ],
    );

    let pairs = engine.world().detector().overlapping_pairs(&snapshot);
    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
}
