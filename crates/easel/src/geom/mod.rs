//! Integer 2D geometry.
//!
//! Shared helpers over vertex lists live here as free functions; the object
//! hierarchy calls into them rather than overriding geometry per variant.

mod outline;
mod point;
mod transform;

pub use outline::{ELLIPSE_SEGMENTS, ellipse_outline, rect_corners};
pub use point::Point;
pub use transform::{centroid, rotate_about, scale_about, translate};
