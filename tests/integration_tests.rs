use particle_sandbox::*;

fn falling_world(drag_coefficient: f32) -> (SandboxWorld, ParticleId) {
    let config = SimulationConfig {
        gravity: 0.1,
        drag_coefficient,
        ..SimulationConfig::default()
    };
    let mut world = SandboxWorld::with_config(config, WorldBounds::new(800.0, 600.0))
        .expect("config should be valid");
    let id = world.add_particle(100.0, 100.0, 20.0, 1.0);
    (world, id)
}

#[test]
fn particle_falls_until_resting_on_the_floor() {
    let (mut world, id) = falling_world(0.0);
    let mut previous_y = 100.0;
    let mut landed_at = None;

    for tick in 1..=100 {
        world.step();
        let particle = world.store().get(id).expect("particle should exist");

        if landed_at.is_none() && particle.position.y + particle.radius() >= 600.0 {
            landed_at = Some(tick);
        }

        match landed_at {
            None => {
                assert!(
                    particle.position.y > previous_y,
                    "tick {tick}: y should keep increasing, {} <= {previous_y}",
                    particle.position.y
                );
            }
            Some(_) => {
                assert_eq!(particle.position.y, 580.0, "tick {tick}");
                assert_eq!(particle.velocity.y, 0.0, "tick {tick}");
            }
        }
        previous_y = particle.position.y;
    }

    assert_eq!(landed_at, Some(98), "free fall should hit the floor on tick 98");
}

#[test]
fn drag_slows_the_fall_but_keeps_it_monotonic() {
    let (mut world, id) = falling_world(0.05);
    let mut previous_y = 100.0;

    for _ in 0..100 {
        world.step();
        let particle = world.store().get(id).unwrap();
        assert!(particle.position.y > previous_y);
        assert!(particle.velocity.y < 2.0, "terminal velocity is g / drag");
        previous_y = particle.position.y;
    }
}

#[test]
fn forces_are_cleared_after_every_tick() {
    let mut world = SandboxWorld::default();
    world.spawn_seed();
    for i in 0..8 {
        world.add_particle(90.0 + i as f32 * 12.0, 560.0, 10.0, 0.5 + i as f32);
    }

    for _ in 0..30 {
        world.step();
        assert!(world.store().iter().all(|p| p.force == Vec2::ZERO));
    }
}

#[test]
fn snapshots_match_store_after_step() {
    let mut world = SandboxWorld::default();
    world.spawn_seed();
    world.add_particle(300.0, 300.0, 8.0, 2.0);

    let frame = world.step().to_vec();

    assert_eq!(frame.len(), world.store().len());
    for (snapshot, particle) in frame.iter().zip(world.store().iter()) {
        assert_eq!(snapshot.id, particle.id());
        assert_eq!(snapshot.x, particle.position.x);
        assert_eq!(snapshot.y, particle.position.y);
        assert_eq!(snapshot.radius, particle.radius());
        assert_eq!(snapshot.is_dragging, particle.is_dragging);
    }
}

#[test]
fn sliding_particle_is_slowed_by_ground_friction() {
    let config = SimulationConfig {
        drag_coefficient: 0.0,
        ..SimulationConfig::default()
    };
    let mut world = SandboxWorld::with_config(config, WorldBounds::new(800.0, 600.0)).unwrap();
    let id = world.add_particle(100.0, 590.0, 10.0, 1.0);
    world.store_mut().for_each(|p| p.velocity.x = 4.0);

    let mut previous_vx = 4.0;
    for _ in 0..20 {
        world.step();
        let vx = world.store().get(id).unwrap().velocity.x;
        assert!(vx < previous_vx);
        assert!(vx > 0.0);
        previous_vx = vx;
    }
}

#[test]
fn without_ground_friction_sliding_keeps_its_speed() {
    let config = SimulationConfig {
        drag_coefficient: 0.0,
        ground_friction_enabled: false,
        ..SimulationConfig::default()
    };
    let mut world = SandboxWorld::with_config(config, WorldBounds::new(800.0, 600.0)).unwrap();
    let id = world.add_particle(100.0, 590.0, 10.0, 1.0);
    world.store_mut().for_each(|p| p.velocity.x = 4.0);

    for _ in 0..20 {
        world.step();
    }
    assert_eq!(world.store().get(id).unwrap().velocity.x, 4.0);
}
