use crate::error::{Error, ensure_positive};
use crate::geom::{self, Point};
use crate::scene::{Node, NodeKind, ShapeData, ShapeVariant};
use crate::surface::ShapeStyle;
use crate::window::Window;

use super::{Fillable, GraphicsObject, ObjectRef};

/// A circle, approximated by a fixed-resolution polygon outline.
pub struct Circle {
    object: ObjectRef,
}

impl Circle {
    pub fn new(window: &Window, radius: i32, center: Point) -> Result<Self, Error> {
        ensure_positive(radius, "radius")?;

        let node = Node::new(
            NodeKind::Shape(ShapeData {
                variant: ShapeVariant::Circle { radius },
                points: geom::ellipse_outline(center, radius, radius),
                style: ShapeStyle::default(),
            }),
            center,
            None,
        );
        Ok(Self { object: ObjectRef::register(window, node) })
    }

    pub fn radius(&self) -> Result<i32, Error> {
        self.object.with_node(|node| match &node.kind {
            NodeKind::Shape(ShapeData { variant: ShapeVariant::Circle { radius }, .. }) => {
                Ok(*radius)
            }
            _ => Err(Error::defect("circle object backed by a non-circle node")),
        })?
    }

    /// Replaces the radius, regenerating the outline around the current
    /// center.
    pub fn set_radius(&self, radius: i32) -> Result<(), Error> {
        ensure_positive(radius, "radius")?;

        let restack = self.object.with_node_mut(|node| {
            if let NodeKind::Shape(shape) = &mut node.kind {
                shape.variant = ShapeVariant::Circle { radius };
                shape.points = geom::ellipse_outline(node.center, radius, radius);
            }
            node.visible.then_some(node.depth)
        })?;

        if let Some(depth) = restack {
            self.object.window().core.refresh(Some(depth))?;
        }
        Ok(())
    }
}

impl GraphicsObject for Circle {
    fn object_ref(&self) -> &ObjectRef {
        &self.object
    }
}

impl Fillable for Circle {}
