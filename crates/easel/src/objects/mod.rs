//! The graphical object hierarchy.
//!
//! Every object is a thin public handle over an [`ObjectRef`]: a window plus
//! an id into its scene arena. Shared behavior lives in the two traits,
//! [`GraphicsObject`] for identity and movement and [`Fillable`] for the
//! polygon-backed shapes; the concrete types add only their own constructors
//! and dimension mutators.

mod base;
mod circle;
mod fillable;
mod image;
mod oval;
mod polygon;
mod rectangle;
mod square;
mod text;

pub use base::{GraphicsObject, ObjectRef};
pub use circle::Circle;
pub use fillable::Fillable;
pub use image::Image;
pub use oval::Oval;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use square::Square;
pub use text::Text;
