//! The drawing-surface collaborator.
//!
//! The core never draws pixels itself; it manipulates opaque primitives on a
//! [`Surface`] and lets the backend present them. Primitive stacking order is
//! creation order, which is how the scene registry realizes depth: a refresh
//! deletes and recreates primitives back-to-front.
//!
//! Everything is single-threaded and cooperative, so methods take `&self`;
//! implementations keep their state behind interior mutability and may call
//! bound callbacks re-entrantly from `pump_once`.

mod headless;

use std::rc::Rc;

use crate::geom::Point;
use crate::input::MouseButton;
use crate::paint::Color;
use crate::raster::Bitmap;

pub use headless::{HeadlessSurface, Prim};

/// Opaque id of a live surface primitive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PrimHandle(pub u64);

/// Token for one outstanding scheduled callback.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

/// Result of one pump iteration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PumpStatus {
    Continue,
    /// The surface was closed. Expected termination, not an error; the pump
    /// loop absorbs it exactly once.
    Closed,
}

/// Border and fill appearance of a shape primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeStyle {
    pub border_color: Color,
    pub border_width: i32,
    pub fill_color: Color,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            border_color: Color::BLACK,
            border_width: 2,
            fill_color: Color::WHITE,
        }
    }
}

/// In-place patch applied to a live primitive via [`Surface::configure`].
#[derive(Debug, Clone)]
pub enum PrimAttr {
    FillColor(Color),
    BorderColor(Color),
    BorderWidth(i32),
    FontSize(i32),
    TextContent(String),
    Bitmap(Bitmap),
}

/// Canvas-level attribute applied via [`Surface::set_canvas`].
#[derive(Debug, Clone)]
pub enum CanvasAttr {
    Width(i32),
    Height(i32),
    Background(Color),
    Title(String),
}

/// The raw input signals a backend can deliver: two key-level signals bound
/// globally, and nine pointer-level signals bound per primitive (three
/// buttons each for down and up).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RawSignal {
    KeyDown,
    KeyUp,
    PointerEnter,
    PointerLeave,
    PointerMotion,
    ButtonDown(MouseButton),
    ButtonUp(MouseButton),
}

impl RawSignal {
    /// The nine pointer-level signals, bound against a presentation handle.
    pub const POINTER: [RawSignal; 9] = [
        RawSignal::PointerEnter,
        RawSignal::PointerLeave,
        RawSignal::PointerMotion,
        RawSignal::ButtonDown(MouseButton::Left),
        RawSignal::ButtonDown(MouseButton::Middle),
        RawSignal::ButtonDown(MouseButton::Right),
        RawSignal::ButtonUp(MouseButton::Left),
        RawSignal::ButtonUp(MouseButton::Middle),
        RawSignal::ButtonUp(MouseButton::Right),
    ];

    /// The two key-level signals, bound once on the surface.
    pub const KEYS: [RawSignal; 2] = [RawSignal::KeyDown, RawSignal::KeyUp];
}

/// One raw input occurrence as delivered by the backend.
#[derive(Debug, Clone)]
pub struct RawInput {
    pub signal: RawSignal,
    /// Pointer location in canvas coordinates.
    pub pos: Point,
    /// Pointer location in window-root coordinates.
    pub root_pos: Point,
    /// Key symbol for key-level signals.
    pub keysym: Option<String>,
}

/// Callback invoked for a bound input signal. Stored by the surface; the
/// same callback may be bound to several signals.
pub type InputFn = Rc<dyn Fn(&RawInput)>;

/// One-shot callback invoked when a scheduled delay elapses.
pub type ScheduledFn = Box<dyn FnOnce()>;

/// Operations the core requires from a drawing backend.
pub trait Surface {
    /// Creates a polygon primitive from an outline. The new primitive stacks
    /// above every existing one.
    fn create_shape(&self, points: &[Point], style: &ShapeStyle, visible: bool) -> PrimHandle;

    /// Creates a text primitive centered at `pos`.
    fn create_text(&self, pos: Point, content: &str, size: i32) -> PrimHandle;

    /// Creates an image primitive centered at `pos`.
    fn create_image(&self, pos: Point, bitmap: &Bitmap) -> PrimHandle;

    /// Deletes a primitive and any bindings attached to it.
    fn delete(&self, handle: PrimHandle);

    /// Patches one attribute of a live primitive in place.
    fn configure(&self, handle: PrimHandle, attr: PrimAttr);

    /// Moves a primitive to a new center without recreating it.
    fn move_coords(&self, handle: PrimHandle, pos: Point);

    /// Binds a key-level signal on the whole surface, replacing any
    /// previous binding for that signal.
    fn bind_global(&self, signal: RawSignal, callback: InputFn);

    /// Binds a pointer-level signal against a primitive, replacing any
    /// previous binding for that (handle, signal) pair.
    fn bind_to_handle(&self, handle: PrimHandle, signal: RawSignal, callback: InputFn);

    /// Schedules `callback` to run after `delay_ms` on the UI thread.
    fn schedule(&self, delay_ms: u64, callback: ScheduledFn) -> TimerToken;

    /// Cancels a pending scheduled callback. Unknown tokens are ignored.
    fn cancel(&self, token: TimerToken);

    /// Applies a canvas-level attribute.
    fn set_canvas(&self, attr: CanvasAttr);

    /// Runs one iteration of the backend's event loop: dispatches at most
    /// one due callback, or idles.
    fn pump_once(&self) -> PumpStatus;
}
