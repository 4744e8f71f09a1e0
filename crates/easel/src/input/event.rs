use crate::geom::Point;
use crate::surface::{RawInput, RawSignal};

/// The seven semantic event kinds a handler can react to.
///
/// The backend's three button-down signals all normalize to [`MousePress`]
/// (and the button-up signals to [`MouseRelease`]); which button fired is
/// carried on the event itself.
///
/// [`MousePress`]: EventKind::MousePress
/// [`MouseRelease`]: EventKind::MouseRelease
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventKind {
    KeyPress,
    KeyRelease,
    MousePress,
    MouseRelease,
    MouseMove,
    MouseEnter,
    MouseLeave,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Immutable snapshot of one input occurrence.
///
/// Constructed once per raw input callback and passed by reference to the
/// handler slot matching its kind; never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    kind: EventKind,
    button: Option<MouseButton>,
    key: Option<String>,
    location: Point,
    root_location: Point,
}

impl Event {
    pub(crate) fn from_raw(raw: &RawInput) -> Self {
        let (kind, button) = match raw.signal {
            RawSignal::KeyDown => (EventKind::KeyPress, None),
            RawSignal::KeyUp => (EventKind::KeyRelease, None),
            RawSignal::PointerEnter => (EventKind::MouseEnter, None),
            RawSignal::PointerLeave => (EventKind::MouseLeave, None),
            RawSignal::PointerMotion => (EventKind::MouseMove, None),
            RawSignal::ButtonDown(b) => (EventKind::MousePress, Some(b)),
            RawSignal::ButtonUp(b) => (EventKind::MouseRelease, Some(b)),
        };
        Self {
            kind,
            button,
            key: raw.keysym.clone(),
            location: raw.pos,
            root_location: raw.root_pos,
        }
    }

    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The mouse button attached to the event, or `None` for key and
    /// motion events.
    #[inline]
    pub fn button(&self) -> Option<MouseButton> {
        self.button
    }

    /// The key symbol attached to the event, or `None` for mouse events.
    /// Most keys evaluate to a single character ("a", or "A" with shift).
    #[inline]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Pointer location in canvas coordinates.
    #[inline]
    pub fn mouse_location(&self) -> Point {
        self.location
    }

    /// Pointer location in window-root coordinates. Usually
    /// [`mouse_location`](Self::mouse_location) is what you want.
    #[inline]
    pub fn root_mouse_location(&self) -> Point {
        self.root_location
    }
}
