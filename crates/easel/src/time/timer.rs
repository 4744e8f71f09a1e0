use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::surface::TimerToken;
use crate::window::Window;

/// A repeating callback driven by the window's event pump.
///
/// [`start`](Self::start) runs the callback once immediately, then again
/// after every interval. At most one reschedule is outstanding at a time;
/// [`stop`](Self::stop) cancels it (also from inside the callback itself),
/// and dropping the timer stops it too.
///
/// The callback can capture whatever state it needs, including a shared
/// handle to its own timer; it must not call
/// [`set_callback`](Self::set_callback) on that timer while running.
pub struct Timer {
    inner: Rc<TimerInner>,
}

struct TimerInner {
    window: Window,
    interval_ms: Cell<u64>,
    callback: RefCell<Box<dyn FnMut()>>,
    running: Cell<bool>,
    pending: Cell<Option<TimerToken>>,
}

impl Timer {
    pub fn new(window: &Window, interval_ms: u64, callback: impl FnMut() + 'static) -> Self {
        Self {
            inner: Rc::new(TimerInner {
                window: window.clone(),
                interval_ms: Cell::new(interval_ms),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                pending: Cell::new(None),
            }),
        }
    }

    /// Changes the interval. Takes effect from the next reschedule; an
    /// already-outstanding one keeps its original deadline.
    pub fn set_interval(&self, interval_ms: u64) {
        self.inner.interval_ms.set(interval_ms);
    }

    /// Replaces the callback. Takes effect from the next firing.
    pub fn set_callback(&self, callback: impl FnMut() + 'static) {
        *self.inner.callback.borrow_mut() = Box::new(callback);
    }

    /// Fires the callback now and begins repeating. Restarts cleanly if the
    /// timer was already running.
    pub fn start(&self) {
        self.stop();
        self.inner.running.set(true);
        TimerInner::tick(&self.inner);
    }

    /// Cancels the outstanding reschedule, if any. The current firing, if
    /// one is on the stack, still completes but is not rescheduled.
    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(token) = self.inner.pending.take() {
            self.inner.window.core.surface.cancel(token);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.stop();
    }
}

impl TimerInner {
    fn tick(inner: &Rc<TimerInner>) {
        (inner.callback.borrow_mut())();

        // The callback may have stopped its own timer.
        if !inner.running.get() {
            return;
        }

        // The scheduled closure holds only a weak reference, so a dropped
        // timer never resurrects itself from the queue.
        let weak = Rc::downgrade(inner);
        let token = inner.window.core.surface.schedule(
            inner.interval_ms.get(),
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.pending.set(None);
                    TimerInner::tick(&inner);
                }
            }),
        );
        inner.pending.set(Some(token));
    }
}
