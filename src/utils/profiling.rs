use std::time::{Duration, Instant};

use log::debug;

/// Timing and load figures for the most recent tick.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TickProfiler {
    pub input_time: Duration,
    pub force_time: Duration,
    pub collision_time: Duration,
    pub integration_time: Duration,
    pub total_tick_time: Duration,

    pub particle_count: usize,
    pub contact_count: usize,
    pub input_events: usize,
}

impl TickProfiler {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn report(&self) {
        let total_us = self.total_tick_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }
        let share = |phase: Duration| (phase.as_micros() as f32 / total_us) * 100.0;

        debug!(
            "tick: {:.3} ms | particles {} contacts {} events {} | input {:.1}% forces {:.1}% collisions {:.1}% integrate {:.1}%",
            self.total_tick_time.as_secs_f32() * 1000.0,
            self.particle_count,
            self.contact_count,
            self.input_events,
            share(self.input_time),
            share(self.force_time),
            share(self.collision_time),
            share(self.integration_time),
        );
    }
}

/// Adds the lifetime of the guard to a profiler field.
pub struct PhaseTimer<'a> {
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> PhaseTimer<'a> {
    pub fn new(output: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            output,
        }
    }
}

impl<'a> Drop for PhaseTimer<'a> {
    fn drop(&mut self) {
        *self.output += self.start.elapsed();
    }
}
