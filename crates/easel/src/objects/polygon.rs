use crate::error::Error;
use crate::geom::{self, Point};
use crate::scene::{Node, NodeKind, ShapeData, ShapeVariant};
use crate::surface::ShapeStyle;
use crate::window::Window;

use super::{Fillable, GraphicsObject, ObjectRef};

/// An arbitrary closed polygon. The center is the vertex centroid.
pub struct Polygon {
    object: ObjectRef,
}

impl Polygon {
    pub fn new(window: &Window, points: Vec<Point>) -> Result<Self, Error> {
        if points.len() < 3 {
            return Err(Error::invalid(
                "points",
                format!("a polygon needs at least 3 vertices, got {}", points.len()),
            ));
        }

        let center = geom::centroid(&points);
        let node = Node::new(
            NodeKind::Shape(ShapeData {
                variant: ShapeVariant::Polygon,
                points,
                style: ShapeStyle::default(),
            }),
            center,
            None,
        );
        Ok(Self { object: ObjectRef::register(window, node) })
    }

    /// Current vertex list, in canvas coordinates.
    pub fn points(&self) -> Result<Vec<Point>, Error> {
        self.object.with_node(|node| match &node.kind {
            NodeKind::Shape(shape) => Ok(shape.points.clone()),
            _ => Err(Error::defect("polygon object backed by a non-shape node")),
        })?
    }
}

impl GraphicsObject for Polygon {
    fn object_ref(&self) -> &ObjectRef {
        &self.object
    }
}

impl Fillable for Polygon {}
