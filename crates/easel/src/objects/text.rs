use crate::error::{Error, ensure_positive};
use crate::geom::Point;
use crate::scene::{Node, NodeKind, TextData};
use crate::surface::PrimAttr;
use crate::window::Window;

use super::{GraphicsObject, ObjectRef};

/// A line of text centered on a point.
///
/// Unlike the shapes, text never needs recreation for its own mutations:
/// moves, content changes and size changes all patch the live primitive in
/// place. Only depth reordering recreates it.
pub struct Text {
    object: ObjectRef,
}

impl Text {
    pub fn new(
        window: &Window,
        content: impl Into<String>,
        size: i32,
        center: Point,
    ) -> Result<Self, Error> {
        ensure_positive(size, "size")?;

        let node = Node::new(
            NodeKind::Text(TextData { content: content.into(), size }),
            center,
            None,
        );
        Ok(Self { object: ObjectRef::register(window, node) })
    }

    pub fn text(&self) -> Result<String, Error> {
        self.object.with_node(|node| match &node.kind {
            NodeKind::Text(text) => Ok(text.content.clone()),
            _ => Err(Error::defect("text object backed by a non-text node")),
        })?
    }

    pub fn set_text(&self, content: impl Into<String>) -> Result<(), Error> {
        let content = content.into();
        let handle = self.object.with_node_mut(|node| {
            if let NodeKind::Text(text) = &mut node.kind {
                text.content = content.clone();
            }
            node.handle
        })?;
        if let Some(handle) = handle {
            self.object
                .window()
                .core
                .surface
                .configure(handle, PrimAttr::TextContent(content));
        }
        Ok(())
    }

    /// Point size.
    pub fn size(&self) -> Result<i32, Error> {
        self.object.with_node(|node| match &node.kind {
            NodeKind::Text(text) => Ok(text.size),
            _ => Err(Error::defect("text object backed by a non-text node")),
        })?
    }

    pub fn set_size(&self, size: i32) -> Result<(), Error> {
        ensure_positive(size, "size")?;

        let handle = self.object.with_node_mut(|node| {
            if let NodeKind::Text(text) = &mut node.kind {
                text.size = size;
            }
            node.handle
        })?;
        if let Some(handle) = handle {
            self.object
                .window()
                .core
                .surface
                .configure(handle, PrimAttr::FontSize(size));
        }
        Ok(())
    }
}

impl GraphicsObject for Text {
    fn object_ref(&self) -> &ObjectRef {
        &self.object
    }
}
