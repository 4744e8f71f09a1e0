use super::Event;

/// Per-object input callbacks, one slot per [`EventKind`].
///
/// Every slot defaults to a no-op, so a handler only overrides what it
/// reacts to. Slots always receive the [`Event`]; handlers that don't care
/// simply ignore the parameter.
///
/// Key slots fire whenever the window is active; mouse slots fire only
/// while the pointer interacts with the object the handler is attached to
/// (see [`GraphicsObject::add_handler`]).
///
/// [`EventKind`]: super::EventKind
/// [`GraphicsObject::add_handler`]: crate::objects::GraphicsObject::add_handler
pub trait EventHandler: 'static {
    fn on_key_press(&mut self, _event: &Event) {}

    fn on_key_release(&mut self, _event: &Event) {}

    fn on_mouse_enter(&mut self, _event: &Event) {}

    fn on_mouse_leave(&mut self, _event: &Event) {}

    fn on_mouse_move(&mut self, _event: &Event) {}

    fn on_mouse_press(&mut self, _event: &Event) {}

    fn on_mouse_release(&mut self, _event: &Event) {}
}
