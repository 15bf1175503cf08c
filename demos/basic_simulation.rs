use particle_sandbox::*;

fn main() {
    let mut world = SandboxWorld::new(WorldBounds::new(800.0, 600.0));
    let id = world.spawn_seed();

    for _ in 0..240 {
        world.step();
    }

    if let Some(particle) = world.store().get(id) {
        println!(
            "Seed particle after 240 ticks: position {:?}, velocity {:?}",
            particle.position, particle.velocity
        );
    }
}
