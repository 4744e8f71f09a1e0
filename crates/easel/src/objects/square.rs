use crate::error::{Error, ensure_positive};
use crate::geom::{self, Point};
use crate::scene::{Node, NodeKind, ShapeData, ShapeVariant};
use crate::surface::ShapeStyle;
use crate::window::Window;

use super::{Fillable, GraphicsObject, ObjectRef};

/// An axis-aligned square.
pub struct Square {
    object: ObjectRef,
}

impl Square {
    pub fn new(window: &Window, side_length: i32, center: Point) -> Result<Self, Error> {
        ensure_positive(side_length, "side_length")?;

        let node = Node::new(
            NodeKind::Shape(ShapeData {
                variant: ShapeVariant::Square { side: side_length },
                points: geom::rect_corners(center, side_length, side_length),
                style: ShapeStyle::default(),
            }),
            center,
            None,
        );
        Ok(Self { object: ObjectRef::register(window, node) })
    }

    pub fn side_length(&self) -> Result<i32, Error> {
        self.object.with_node(|node| match &node.kind {
            NodeKind::Shape(ShapeData { variant: ShapeVariant::Square { side }, .. }) => Ok(*side),
            _ => Err(Error::defect("square object backed by a non-square node")),
        })?
    }

    /// Resizes by scaling about the center, then snaps the stored side
    /// length so the accessor reports the requested value exactly even
    /// though the scaled corners may truncate by a pixel.
    pub fn set_side_length(&self, side_length: i32) -> Result<(), Error> {
        ensure_positive(side_length, "side_length")?;

        let current = self.side_length()?;
        self.scale(side_length as f64 / current as f64)?;
        self.object.with_node_mut(|node| {
            if let NodeKind::Shape(shape) = &mut node.kind {
                shape.variant = ShapeVariant::Square { side: side_length };
            }
        })
    }
}

impl GraphicsObject for Square {
    fn object_ref(&self) -> &ObjectRef {
        &self.object
    }
}

impl Fillable for Square {}
