use approx::assert_relative_eq;
use particle_sandbox::*;

fn overlapping_pair(store: &mut ParticleStore) -> (ParticleId, ParticleId) {
    let a = store.create(200.0, 200.0, 10.0, 1.0);
    let b = store.create(215.0, 200.0, 10.0, 1.0);
    (a, b)
}

fn distance(store: &ParticleStore, a: ParticleId, b: ParticleId) -> f32 {
    let pa = store.get(a).expect("first particle");
    let pb = store.get(b).expect("second particle");
    pa.position.distance(pb.position)
}

#[test]
fn overlapping_pair_separates_monotonically() {
    let mut store = ParticleStore::new();
    let (a, b) = overlapping_pair(&mut store);
    let engine = PhysicsEngine::default();

    let mut previous = distance(&store, a, b);
    assert_relative_eq!(previous, 15.0);

    for pass in 0..300 {
        engine.resolve_collisions(&mut store);
        let current = distance(&store, a, b);
        assert!(
            current >= previous,
            "pass {pass}: distance shrank from {previous} to {current}"
        );
        assert!(current <= 20.0 + 1e-3, "soft correction never overshoots");
        previous = current;
    }

    assert!(previous > 19.99, "distance should converge towards 20, got {previous}");
}

#[test]
fn a_single_pass_is_only_a_partial_correction() {
    let mut store = ParticleStore::new();
    let (a, b) = overlapping_pair(&mut store);

    let contacts = PhysicsEngine::default().resolve_collisions(&mut store);

    assert_eq!(contacts, 1);
    let d = distance(&store, a, b);
    assert_relative_eq!(d, 15.5, epsilon = 1e-3);
}

#[test]
fn find_at_tie_break_is_stable() {
    let mut store = ParticleStore::new();
    let first = store.create(100.0, 100.0, 15.0, 1.0);
    let second = store.create(110.0, 100.0, 15.0, 1.0);

    for _ in 0..10 {
        assert_eq!(store.find_at(105.0, 100.0), Some(first));
    }
    assert_eq!(store.find_at(122.0, 100.0), Some(second));
    assert_eq!(store.find_at(300.0, 300.0), None);
}

#[test]
fn dragged_particle_shoves_neighbours_without_moving() {
    let mut world = SandboxWorld::new(WorldBounds::new(800.0, 600.0));
    let held = world.add_particle(400.0, 300.0, 20.0, 1.0);
    let other = world.add_particle(430.0, 300.0, 20.0, 1.0);

    world.pointer_down(400.0, 300.0);
    for _ in 0..5 {
        world.step();
        assert_eq!(
            world.store().get(held).unwrap().position,
            Vec2::new(400.0, 300.0)
        );
    }

    assert!(world.store().get(other).unwrap().position.x > 430.0);
}

#[test]
fn pile_of_particles_stays_inside_the_world() {
    let bounds = WorldBounds::new(200.0, 200.0);
    let mut world = SandboxWorld::new(bounds);
    for i in 0..30 {
        world.add_particle(20.0 + (i % 10) as f32 * 16.0, 20.0 + (i / 10) as f32 * 16.0, 7.0, 1.0);
    }

    for _ in 0..200 {
        world.step();
    }

    for particle in world.store().iter() {
        let r = particle.radius();
        assert!(particle.position.x >= r && particle.position.x <= bounds.width - r);
        assert!(particle.position.y >= r && particle.position.y <= bounds.height - r);
    }
}
