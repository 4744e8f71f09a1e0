use std::rc::Rc;

use crate::surface::Surface;
use crate::window::Window;

/// What an animation producer wants to happen after the step it just ran.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Step {
    /// Resume after this many milliseconds.
    Wait(u64),
    /// Resume after the default delay of one second.
    Rest,
    /// The animation is finished; nothing else is scheduled.
    Done,
}

const REST_DELAY_MS: u64 = 1000;

/// Drives a cooperative animation: calls `producer` once immediately, then
/// again after each delay it asks for, until it returns [`Step::Done`].
///
/// The producer runs on the event pump between input and timer callbacks, so
/// each step should do a small amount of work (move a shape, advance a
/// counter) and yield. There is no way to cancel from outside; a producer
/// that should stop early returns [`Step::Done`] on its own.
pub fn run_with_delay(window: &Window, producer: impl FnMut() -> Step + 'static) {
    drive(Rc::clone(&window.core.surface), Box::new(producer));
}

fn drive(surface: Rc<dyn Surface>, mut producer: Box<dyn FnMut() -> Step>) {
    let delay_ms = match producer() {
        Step::Wait(ms) => ms,
        Step::Rest => REST_DELAY_MS,
        Step::Done => return,
    };
    let next = Rc::clone(&surface);
    surface.schedule(delay_ms, Box::new(move || drive(next, producer)));
}
