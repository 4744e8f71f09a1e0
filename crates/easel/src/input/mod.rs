//! Input events and their routing to per-object handlers.

mod event;
mod handler;

pub(crate) mod router;

pub use event::{Event, EventKind, MouseButton};
pub use handler::EventHandler;
