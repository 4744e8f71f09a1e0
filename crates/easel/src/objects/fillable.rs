use crate::error::{Error, ensure_scale_factor};
use crate::geom::{self, Point};
use crate::paint::Color;
use crate::scene::NodeKind;
use crate::surface::PrimAttr;

use super::GraphicsObject;

/// Shared behavior of the polygon-backed shapes: fill and border styling,
/// rotation about a pivot, and uniform scaling about the center.
///
/// Style changes patch the live primitive in place; geometry changes rewrite
/// the vertex list and restack via a depth-limited refresh.
pub trait Fillable: GraphicsObject {
    /// Rotates the vertex outline about the pivot (the center unless
    /// [`set_pivot`](Self::set_pivot) was called). Positive degrees turn
    /// clockwise on the y-down canvas. The center itself does not move.
    ///
    /// Vertices round to integer coordinates on every call, so many small
    /// rotations drift slightly where one large rotation would not.
    fn rotate(&self, degrees: i32) -> Result<(), Error> {
        let object = self.object_ref();
        let restack = object.with_node_mut(|node| {
            let pivot = node.pivot.unwrap_or(node.center);
            let radians = (degrees as f64).to_radians();
            if let NodeKind::Shape(shape) = &mut node.kind {
                for p in shape.points.iter_mut() {
                    *p = geom::rotate_about(*p, radians, pivot);
                }
            }
            node.visible.then_some(node.depth)
        })?;

        if let Some(depth) = restack {
            object.window().core.refresh(Some(depth))?;
        }
        Ok(())
    }

    /// Scales the outline about the center by `factor`. Vertex offsets
    /// truncate toward zero; a set pivot rounds to nearest instead.
    fn scale(&self, factor: f64) -> Result<(), Error> {
        ensure_scale_factor(factor, "factor")?;

        let object = self.object_ref();
        let restack = object.with_node_mut(|node| {
            let center = node.center;
            if let NodeKind::Shape(shape) = &mut node.kind {
                for p in shape.points.iter_mut() {
                    *p = geom::scale_about(*p, center, factor);
                }
                shape.variant.rescale(factor);
            }
            if let Some(pivot) = node.pivot.as_mut() {
                *pivot = Point::new(
                    ((pivot.x - center.x) as f64 * factor).round() as i32 + center.x,
                    ((pivot.y - center.y) as f64 * factor).round() as i32 + center.y,
                );
            }
            node.visible.then_some(node.depth)
        })?;

        if let Some(depth) = restack {
            object.window().core.refresh(Some(depth))?;
        }
        Ok(())
    }

    // ── style ─────────────────────────────────────────────────────────────

    fn fill_color(&self) -> Result<Color, Error> {
        self.object_ref().with_node(|node| match &node.kind {
            NodeKind::Shape(shape) => Ok(shape.style.fill_color),
            _ => Err(Error::defect("fillable object backed by a non-shape node")),
        })?
    }

    fn set_fill_color(&self, color: Color) -> Result<(), Error> {
        let object = self.object_ref();
        let handle = object.with_node_mut(|node| {
            if let NodeKind::Shape(shape) = &mut node.kind {
                shape.style.fill_color = color;
            }
            node.handle
        })?;
        if let Some(handle) = handle {
            object.window().core.surface.configure(handle, PrimAttr::FillColor(color));
        }
        Ok(())
    }

    fn border_color(&self) -> Result<Color, Error> {
        self.object_ref().with_node(|node| match &node.kind {
            NodeKind::Shape(shape) => Ok(shape.style.border_color),
            _ => Err(Error::defect("fillable object backed by a non-shape node")),
        })?
    }

    fn set_border_color(&self, color: Color) -> Result<(), Error> {
        let object = self.object_ref();
        let handle = object.with_node_mut(|node| {
            if let NodeKind::Shape(shape) = &mut node.kind {
                shape.style.border_color = color;
            }
            node.handle
        })?;
        if let Some(handle) = handle {
            object.window().core.surface.configure(handle, PrimAttr::BorderColor(color));
        }
        Ok(())
    }

    fn border_width(&self) -> Result<i32, Error> {
        self.object_ref().with_node(|node| match &node.kind {
            NodeKind::Shape(shape) => Ok(shape.style.border_width),
            _ => Err(Error::defect("fillable object backed by a non-shape node")),
        })?
    }

    /// Width zero draws no border.
    fn set_border_width(&self, width: i32) -> Result<(), Error> {
        if width < 0 {
            return Err(Error::invalid(
                "width",
                format!("must be non-negative, got {width}"),
            ));
        }
        let object = self.object_ref();
        let handle = object.with_node_mut(|node| {
            if let NodeKind::Shape(shape) = &mut node.kind {
                shape.style.border_width = width;
            }
            node.handle
        })?;
        if let Some(handle) = handle {
            object.window().core.surface.configure(handle, PrimAttr::BorderWidth(width));
        }
        Ok(())
    }

    // ── pivot ─────────────────────────────────────────────────────────────

    /// The rotation pivot, or `None` while rotation tracks the center.
    fn pivot(&self) -> Result<Option<Point>, Error> {
        self.object_ref().with_node(|node| node.pivot)
    }

    /// Pins the rotation pivot to a fixed point. The pivot translates along
    /// with the object on later moves.
    fn set_pivot(&self, pivot: Point) -> Result<(), Error> {
        self.object_ref().with_node_mut(|node| node.pivot = Some(pivot))
    }
}
