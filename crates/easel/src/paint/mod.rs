//! Appearance types shared by objects and the drawing surface.

mod color;

pub use color::Color;
