use std::time::Instant;

use log::debug;

use crate::{
    config::{SimulationConfig, DEFAULT_SEED_MASS, DEFAULT_SEED_POSITION, DEFAULT_SEED_RADIUS},
    core::{
        particle::{ParticleId, ParticleSnapshot},
        store::ParticleStore,
        types::WorldBounds,
    },
    engine::PhysicsEngine,
    error::Result,
    input::{
        controller::{Gesture, InputController},
        event::PointerEvent,
        queue::{InputQueue, InputSender},
    },
    utils::{
        logging::{warn_if_frame_budget_exceeded, ScopedTimer},
        profiling::{PhaseTimer, TickProfiler},
    },
};

/// One sandbox session: owns the particles, the stepping logic, the pointer
/// state and the pending input, and advances them one tick at a time.
pub struct SandboxWorld {
    store: ParticleStore,
    engine: PhysicsEngine,
    input: InputController,
    queue: InputQueue,
    bounds: WorldBounds,
    config: SimulationConfig,
    frame: Vec<ParticleSnapshot>,
    profiler: TickProfiler,
    tick: u64,
}

impl Default for SandboxWorld {
    fn default() -> Self {
        Self::new(WorldBounds::default())
    }
}

impl SandboxWorld {
    /// Creates an empty world with the reference configuration.
    pub fn new(bounds: WorldBounds) -> Self {
        Self::build(SimulationConfig::default(), bounds)
    }

    /// Creates an empty world after validating `config`.
    pub fn with_config(config: SimulationConfig, bounds: WorldBounds) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, bounds))
    }

    fn build(config: SimulationConfig, bounds: WorldBounds) -> Self {
        Self {
            store: ParticleStore::new(),
            engine: PhysicsEngine::new(&config),
            input: InputController::new(&config),
            queue: InputQueue::new(),
            bounds,
            config,
            frame: Vec::new(),
            profiler: TickProfiler::default(),
            tick: 0,
        }
    }

    /// Places the reference starting particle.
    pub fn spawn_seed(&mut self) -> ParticleId {
        let [x, y] = DEFAULT_SEED_POSITION;
        let id = self.store.create(x, y, DEFAULT_SEED_RADIUS, DEFAULT_SEED_MASS);
        self.store.snapshots_into(&mut self.frame);
        id
    }

    /// Adds a particle directly, outside of any pointer gesture.
    pub fn add_particle(&mut self, x: f32, y: f32, radius: f32, mass: f32) -> ParticleId {
        let id = self.store.create(x, y, radius, mass);
        self.store.snapshots_into(&mut self.frame);
        id
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    /// Direct store access for hosts and tests; must not be used mid-tick.
    pub fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    pub fn engine(&self) -> &PhysicsEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PhysicsEngine {
        &mut self.engine
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    /// Takes effect from the next tick on.
    pub fn set_bounds(&mut self, bounds: WorldBounds) {
        debug!("world resized to {}x{}", bounds.width, bounds.height);
        self.bounds = bounds;
    }

    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.engine.set_parallel_enabled(enabled);
    }

    /// Producer handle for pointer events from any thread.
    pub fn input_sender(&self) -> InputSender {
        self.queue.sender()
    }

    pub fn pointer_down(&self, x: f32, y: f32) {
        self.queue.push(PointerEvent::Down { x, y });
    }

    pub fn pointer_move(&self, x: f32, y: f32) {
        self.queue.push(PointerEvent::Move { x, y });
    }

    pub fn pointer_up(&self) {
        self.queue.push(PointerEvent::Up);
    }

    pub fn gesture(&self) -> Gesture {
        self.input.gesture()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn profiler(&self) -> &TickProfiler {
        &self.profiler
    }

    /// Snapshots produced by the most recent tick.
    pub fn snapshots(&self) -> &[ParticleSnapshot] {
        &self.frame
    }

    /// Advances the session by one tick: pending input, global forces,
    /// collisions, integration with wall clamping, then a fresh snapshot list.
    pub fn step(&mut self) -> &[ParticleSnapshot] {
        let _timer = ScopedTimer::new("sandbox::step");
        let started = Instant::now();
        self.profiler.reset();

        {
            let _phase = PhaseTimer::new(&mut self.profiler.input_time);
            let events = self.queue.drain();
            self.profiler.input_events = events.len();
            for event in events {
                self.input.apply(&mut self.store, *event);
            }
        }
        {
            let _phase = PhaseTimer::new(&mut self.profiler.force_time);
            self.engine.apply_global_forces(&mut self.store, &self.bounds);
        }
        {
            let _phase = PhaseTimer::new(&mut self.profiler.collision_time);
            self.profiler.contact_count = self.engine.resolve_collisions(&mut self.store);
        }
        {
            let _phase = PhaseTimer::new(&mut self.profiler.integration_time);
            self.engine.integrate(&mut self.store, &self.bounds);
        }

        self.store.snapshots_into(&mut self.frame);
        self.tick += 1;

        self.profiler.particle_count = self.store.len();
        self.profiler.total_tick_time = started.elapsed();
        self.profiler.report();
        if let Some(budget) = self.config.frame_budget_ms {
            warn_if_frame_budget_exceeded(self.profiler.total_tick_time, budget);
        }

        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_waits_for_the_tick_boundary() {
        let mut world = SandboxWorld::default();
        let id = world.spawn_seed();

        world.pointer_down(100.0, 100.0);
        assert!(!world.store().get(id).unwrap().is_dragging);

        world.step();
        assert!(world.store().get(id).unwrap().is_dragging);
        assert_eq!(world.profiler().input_events, 1);
    }

    #[test]
    fn step_publishes_snapshots() {
        let mut world = SandboxWorld::default();
        let id = world.spawn_seed();
        assert_eq!(world.snapshots().len(), 1);

        let frame = world.step().to_vec();
        assert_eq!(frame.len(), 1);
        assert_eq!(frame[0].id, id);
        assert_eq!(frame[0].radius, 20.0);
        assert!(frame[0].y > 100.0);
        assert_eq!(world.tick_count(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SimulationConfig {
            drag_coefficient: -1.0,
            ..SimulationConfig::default()
        };
        assert!(SandboxWorld::with_config(config, WorldBounds::default()).is_err());
    }

    #[test]
    fn resize_applies_on_next_tick() {
        let mut world = SandboxWorld::new(WorldBounds::new(800.0, 600.0));
        let id = world.add_particle(700.0, 300.0, 10.0, 1.0);
        world.set_bounds(WorldBounds::new(400.0, 600.0));
        world.step();
        assert_eq!(world.store().get(id).unwrap().position.x, 390.0);
    }
}
