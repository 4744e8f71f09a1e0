use crate::error::{Error, ensure_positive};
use crate::geom::{self, Point};
use crate::scene::{Node, NodeKind, ShapeData, ShapeVariant};
use crate::surface::ShapeStyle;
use crate::window::Window;

use super::{Fillable, GraphicsObject, ObjectRef};

/// An axis-aligned rectangle.
pub struct Rectangle {
    object: ObjectRef,
}

impl Rectangle {
    pub fn new(window: &Window, width: i32, height: i32, center: Point) -> Result<Self, Error> {
        ensure_positive(width, "width")?;
        ensure_positive(height, "height")?;

        let node = Node::new(
            NodeKind::Shape(ShapeData {
                variant: ShapeVariant::Rectangle { width, height },
                points: geom::rect_corners(center, width, height),
                style: ShapeStyle::default(),
            }),
            center,
            None,
        );
        Ok(Self { object: ObjectRef::register(window, node) })
    }

    /// `(width, height)`.
    pub fn side_lengths(&self) -> Result<(i32, i32), Error> {
        self.object.with_node(|node| match &node.kind {
            NodeKind::Shape(ShapeData { variant: ShapeVariant::Rectangle { width, height }, .. }) => {
                Ok((*width, *height))
            }
            _ => Err(Error::defect("rectangle object backed by a non-rectangle node")),
        })?
    }

    /// Replaces both side lengths, regenerating the corners around the
    /// current center.
    pub fn set_side_lengths(&self, width: i32, height: i32) -> Result<(), Error> {
        ensure_positive(width, "width")?;
        ensure_positive(height, "height")?;

        let restack = self.object.with_node_mut(|node| {
            if let NodeKind::Shape(shape) = &mut node.kind {
                shape.variant = ShapeVariant::Rectangle { width, height };
                shape.points = geom::rect_corners(node.center, width, height);
            }
            node.visible.then_some(node.depth)
        })?;

        if let Some(depth) = restack {
            self.object.window().core.refresh(Some(depth))?;
        }
        Ok(())
    }
}

impl GraphicsObject for Rectangle {
    fn object_ref(&self) -> &ObjectRef {
        &self.object
    }
}

impl Fillable for Rectangle {}
