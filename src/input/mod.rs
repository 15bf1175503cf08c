//! Pointer input: event types, the cross-thread event queue and the gesture controller.

pub mod controller;
pub mod event;
pub mod queue;

pub use controller::{Gesture, InputController};
pub use event::PointerEvent;
pub use queue::{InputQueue, InputSender};
