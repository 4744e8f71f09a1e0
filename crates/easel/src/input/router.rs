//! Translates raw surface signals into [`Event`]s and dispatches them to the
//! target object's handler.
//!
//! Key-level signals are bound once globally; the object whose handler was
//! attached most recently is the key target (later bindings replace earlier
//! ones). Pointer-level signals are bound against the object's current
//! presentation handle and must be re-bound whenever that handle changes,
//! which the window does inside every materialize.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::scene::NodeId;
use crate::surface::{InputFn, PrimHandle, RawSignal, Surface};
use crate::window::WindowCore;

use super::{Event, EventHandler, EventKind};

/// Collapses the eleven raw signals into the seven semantic kinds.
pub(crate) fn normalize(signal: RawSignal) -> EventKind {
    match signal {
        RawSignal::KeyDown => EventKind::KeyPress,
        RawSignal::KeyUp => EventKind::KeyRelease,
        RawSignal::PointerEnter => EventKind::MouseEnter,
        RawSignal::PointerLeave => EventKind::MouseLeave,
        RawSignal::PointerMotion => EventKind::MouseMove,
        RawSignal::ButtonDown(_) => EventKind::MousePress,
        RawSignal::ButtonUp(_) => EventKind::MouseRelease,
    }
}

/// Calls the handler slot matching the event's kind.
pub(crate) fn dispatch(handler: &Rc<RefCell<dyn EventHandler>>, event: &Event) {
    let mut handler = handler.borrow_mut();
    match event.kind() {
        EventKind::KeyPress => handler.on_key_press(event),
        EventKind::KeyRelease => handler.on_key_release(event),
        EventKind::MouseEnter => handler.on_mouse_enter(event),
        EventKind::MouseLeave => handler.on_mouse_leave(event),
        EventKind::MouseMove => handler.on_mouse_move(event),
        EventKind::MousePress => handler.on_mouse_press(event),
        EventKind::MouseRelease => handler.on_mouse_release(event),
    }
}

/// One callback serves every signal bound for an object: the raw input
/// carries the signal, and the handler is looked up through the arena at
/// dispatch time so a rebound or replaced handler is always current.
fn object_callback(core: Weak<WindowCore>, id: NodeId) -> InputFn {
    Rc::new(move |raw| {
        let Some(core) = core.upgrade() else {
            return;
        };
        // The scene borrow must end before the handler runs; handlers
        // re-enter the scene through the object handles they hold.
        let handler = {
            let scene = core.scene.borrow();
            match scene.node(id) {
                Ok(node) => node.handler.clone(),
                Err(_) => None,
            }
        };
        let Some(handler) = handler else {
            return;
        };
        let event = Event::from_raw(raw);
        dispatch(&handler, &event);
    })
}

/// Binds the nine pointer-level signals against a presentation handle.
pub(crate) fn bind_pointer(
    core: &Weak<WindowCore>,
    id: NodeId,
    handle: PrimHandle,
    surface: &dyn Surface,
) {
    let callback = object_callback(core.clone(), id);
    for signal in RawSignal::POINTER {
        surface.bind_to_handle(handle, signal, Rc::clone(&callback));
    }
}

/// Binds the two key-level signals globally, replacing any previous key
/// target.
pub(crate) fn bind_keys(core: &Weak<WindowCore>, id: NodeId, surface: &dyn Surface) {
    let callback = object_callback(core.clone(), id);
    for signal in RawSignal::KEYS {
        surface.bind_global(signal, Rc::clone(&callback));
    }
}

#[cfg(test)]
mod tests {
    use crate::input::MouseButton;

    use super::*;

    #[test]
    fn every_button_down_normalizes_to_mouse_press() {
        for button in [MouseButton::Left, MouseButton::Middle, MouseButton::Right] {
            assert_eq!(normalize(RawSignal::ButtonDown(button)), EventKind::MousePress);
            assert_eq!(normalize(RawSignal::ButtonUp(button)), EventKind::MouseRelease);
        }
    }

    #[test]
    fn key_and_pointer_signals_keep_their_kinds() {
        assert_eq!(normalize(RawSignal::KeyDown), EventKind::KeyPress);
        assert_eq!(normalize(RawSignal::KeyUp), EventKind::KeyRelease);
        assert_eq!(normalize(RawSignal::PointerEnter), EventKind::MouseEnter);
        assert_eq!(normalize(RawSignal::PointerLeave), EventKind::MouseLeave);
        assert_eq!(normalize(RawSignal::PointerMotion), EventKind::MouseMove);
    }
}
