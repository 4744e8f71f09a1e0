//! Easel: a retained-mode 2D scene graph for introductory programs.
//!
//! This crate owns the scene registry, the graphical object hierarchy, the
//! event router, and the cooperative timer/animation scheduler. The actual
//! drawing surface and image codec are external collaborators reached through
//! the [`surface::Surface`] and [`raster::ImageCodec`] traits; a recording
//! [`surface::HeadlessSurface`] ships for tests and headless programs.

pub mod error;
pub mod geom;
pub mod input;
pub mod logging;
pub mod objects;
pub mod paint;
pub mod raster;
pub mod surface;
pub mod time;
pub mod window;

mod scene;

pub use error::Error;
pub use geom::Point;
pub use input::{Event, EventHandler, EventKind, MouseButton};
pub use objects::{
    Circle, Fillable, GraphicsObject, Image, Oval, Polygon, Rectangle, Square, Text,
};
pub use paint::Color;
pub use time::{Step, Timer, run_with_delay};
pub use window::{Window, WindowConfig, run};
