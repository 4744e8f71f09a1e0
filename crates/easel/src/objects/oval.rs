use crate::error::{Error, ensure_positive};
use crate::geom::{self, Point};
use crate::scene::{Node, NodeKind, ShapeData, ShapeVariant};
use crate::surface::ShapeStyle;
use crate::window::Window;

use super::{Fillable, GraphicsObject, ObjectRef};

/// An axis-aligned ellipse with independent horizontal and vertical radii.
pub struct Oval {
    object: ObjectRef,
}

impl Oval {
    pub fn new(window: &Window, radius_x: i32, radius_y: i32, center: Point) -> Result<Self, Error> {
        ensure_positive(radius_x, "radius_x")?;
        ensure_positive(radius_y, "radius_y")?;

        let node = Node::new(
            NodeKind::Shape(ShapeData {
                variant: ShapeVariant::Oval { rx: radius_x, ry: radius_y },
                points: geom::ellipse_outline(center, radius_x, radius_y),
                style: ShapeStyle::default(),
            }),
            center,
            None,
        );
        Ok(Self { object: ObjectRef::register(window, node) })
    }

    /// `(radius_x, radius_y)`.
    pub fn radii(&self) -> Result<(i32, i32), Error> {
        self.object.with_node(|node| match &node.kind {
            NodeKind::Shape(ShapeData { variant: ShapeVariant::Oval { rx, ry }, .. }) => {
                Ok((*rx, *ry))
            }
            _ => Err(Error::defect("oval object backed by a non-oval node")),
        })?
    }

    /// Replaces both radii, regenerating the outline around the current
    /// center.
    pub fn set_radii(&self, radius_x: i32, radius_y: i32) -> Result<(), Error> {
        ensure_positive(radius_x, "radius_x")?;
        ensure_positive(radius_y, "radius_y")?;

        let restack = self.object.with_node_mut(|node| {
            if let NodeKind::Shape(shape) = &mut node.kind {
                shape.variant = ShapeVariant::Oval { rx: radius_x, ry: radius_y };
                shape.points = geom::ellipse_outline(node.center, radius_x, radius_y);
            }
            node.visible.then_some(node.depth)
        })?;

        if let Some(depth) = restack {
            self.object.window().core.refresh(Some(depth))?;
        }
        Ok(())
    }
}

impl GraphicsObject for Oval {
    fn object_ref(&self) -> &ObjectRef {
        &self.object
    }
}

impl Fillable for Oval {}
