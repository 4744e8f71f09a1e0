use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::geom::Point;
use crate::input::EventHandler;
use crate::raster::Bitmap;
use crate::surface::{PrimHandle, ShapeStyle};

use super::Depth;

/// One live object: identity, paint order, and variant payload.
///
/// `handle` is `Some` exactly while the object is materialized on the
/// drawing surface ("present"); `None` means "absent".
pub struct Node {
    pub kind: NodeKind,
    pub center: Point,
    pub depth: Depth,
    pub pivot: Option<Point>,
    pub visible: bool,
    pub handle: Option<PrimHandle>,
    pub handler: Option<Rc<RefCell<dyn EventHandler>>>,
}

impl Node {
    pub fn new(kind: NodeKind, center: Point, pivot: Option<Point>) -> Self {
        Self {
            kind,
            center,
            depth: Depth::DEFAULT,
            pivot,
            visible: false,
            handle: None,
            handler: None,
        }
    }
}

/// Flat variant payload; shared operations dispatch on this tag instead of
/// an inheritance chain.
pub enum NodeKind {
    Shape(ShapeData),
    Text(TextData),
    Image(ImageData),
}

/// Polygon-backed variants: an explicit vertex outline plus fill/border.
pub struct ShapeData {
    pub variant: ShapeVariant,
    pub points: Vec<Point>,
    pub style: ShapeStyle,
}

/// Which constructor produced a shape, with the dimensions its mutators
/// need. Scaling keeps these in step with the vertex list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShapeVariant {
    Polygon,
    Circle { radius: i32 },
    Oval { rx: i32, ry: i32 },
    Square { side: i32 },
    Rectangle { width: i32, height: i32 },
}

impl ShapeVariant {
    /// Rescales the stored dimensions alongside the vertex list, truncating
    /// toward zero like the vertices do.
    pub fn rescale(&mut self, factor: f64) {
        let scale = |v: i32| (v as f64 * factor) as i32;
        match self {
            ShapeVariant::Polygon => {}
            ShapeVariant::Circle { radius } => *radius = scale(*radius),
            ShapeVariant::Oval { rx, ry } => {
                *rx = scale(*rx);
                *ry = scale(*ry);
            }
            ShapeVariant::Square { side } => *side = scale(*side),
            ShapeVariant::Rectangle { width, height } => {
                *width = scale(*width);
                *height = scale(*height);
            }
        }
    }
}

pub struct TextData {
    pub content: String,
    /// Point size.
    pub size: i32,
}

pub struct ImageData {
    pub path: PathBuf,
    pub width: i32,
    pub height: i32,
    /// Accumulated rotation in degrees, kept in `0..360`.
    pub angle: i32,
    /// Bitmap currently backing the primitive; regenerated by the codec on
    /// resize or rotation.
    pub bitmap: Bitmap,
}
