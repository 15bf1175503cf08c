use std::sync::Arc;

use parking_lot::Mutex;

use super::event::PointerEvent;

/// Buffer of pointer events awaiting the next tick boundary.
///
/// Producers push through [`InputSender`] handles from any thread; the world
/// swaps the whole buffer out in one locked operation before the physics
/// passes run, so a tick only ever sees fully delivered input.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Arc<Mutex<Vec<PointerEvent>>>,
    drained: Vec<PointerEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sender(&self) -> InputSender {
        InputSender {
            pending: Arc::clone(&self.pending),
        }
    }

    pub fn push(&self, event: PointerEvent) {
        self.pending.lock().push(event);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.lock().len()
    }

    /// Takes every queued event in arrival order. The returned slice stays
    /// valid until the next drain; its allocation is recycled.
    pub fn drain(&mut self) -> &[PointerEvent] {
        self.drained.clear();
        std::mem::swap(&mut *self.pending.lock(), &mut self.drained);
        &self.drained
    }
}

/// Cloneable, thread-safe producer side of an [`InputQueue`].
#[derive(Debug, Clone)]
pub struct InputSender {
    pending: Arc<Mutex<Vec<PointerEvent>>>,
}

impl InputSender {
    pub fn send(&self, event: PointerEvent) {
        self.pending.lock().push(event);
    }

    pub fn pointer_down(&self, x: f32, y: f32) {
        self.send(PointerEvent::Down { x, y });
    }

    pub fn pointer_move(&self, x: f32, y: f32) {
        self.send(PointerEvent::Move { x, y });
    }

    pub fn pointer_up(&self) {
        self.send(PointerEvent::Up);
    }
}
