use particle_sandbox::*;
use std::thread;
use std::time::Duration;

fn main() {
    let mut world = SandboxWorld::new(WorldBounds::new(800.0, 600.0));
    world.spawn_seed();

    let sender = world.input_sender();
    let producer = thread::spawn(move || {
        for i in 0..20 {
            sender.pointer_down(50.0 + i as f32 * 35.0, 50.0);
            sender.pointer_up();
            thread::sleep(Duration::from_millis(2));
        }
    });

    for _ in 0..120 {
        world.step();
        thread::sleep(Duration::from_millis(1));
    }
    producer.join().expect("input thread panicked");
    world.step();

    println!(
        "{} particles after {} ticks, last tick {:?}",
        world.store().len(),
        world.tick_count(),
        world.profiler().total_tick_time
    );
}
