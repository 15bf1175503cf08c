use particle_sandbox::*;

fn main() {
    let mut world = SandboxWorld::new(WorldBounds::new(800.0, 600.0));
    world.spawn_seed();

    // Sketch three particles next to each other.
    for x in [380.0, 390.0, 400.0] {
        world.pointer_down(x, 100.0);
        world.pointer_move(x + 5.0, 110.0);
        world.pointer_up();
        world.step();
    }

    // Grab the seed and carry it into the pile.
    world.pointer_down(100.0, 100.0);
    for step in 0..60 {
        world.pointer_move(100.0 + step as f32 * 5.0, 100.0 + step as f32 * 7.0);
        world.step();
    }
    world.pointer_up();

    for _ in 0..120 {
        world.step();
    }

    for snapshot in world.snapshots() {
        println!(
            "{} at ({:.1}, {:.1}) r={}",
            snapshot.id, snapshot.x, snapshot.y, snapshot.radius
        );
    }
}
