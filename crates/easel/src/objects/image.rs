use std::path::Path;

use crate::error::{Error, ensure_positive, ensure_scale_factor};
use crate::geom::Point;
use crate::scene::{ImageData, Node, NodeKind};
use crate::surface::PrimAttr;
use crate::window::Window;

use super::{GraphicsObject, ObjectRef};

/// A bitmap image loaded from disk, scaled to a target size and optionally
/// rotated.
///
/// The file is decoded eagerly at construction, so a bad path fails here
/// rather than at first paint. Moves and resizes patch the live primitive in
/// place; rotation regenerates the bitmap from the source file and recreates
/// the primitive.
pub struct Image {
    object: ObjectRef,
}

impl Image {
    pub fn new(
        window: &Window,
        path: impl AsRef<Path>,
        width: i32,
        height: i32,
        center: Point,
    ) -> Result<Self, Error> {
        ensure_positive(width, "width")?;
        ensure_positive(height, "height")?;

        let path = path.as_ref().to_path_buf();
        let bitmap = window.core.codec.load_and_resize(&path, width as u32, height as u32)?;

        let node = Node::new(
            NodeKind::Image(ImageData { path, width, height, angle: 0, bitmap }),
            center,
            None,
        );
        Ok(Self { object: ObjectRef::register(window, node) })
    }

    /// `(width, height)`.
    pub fn size(&self) -> Result<(i32, i32), Error> {
        self.object.with_node(|node| match &node.kind {
            NodeKind::Image(image) => Ok((image.width, image.height)),
            _ => Err(Error::defect("image object backed by a non-image node")),
        })?
    }

    /// Accumulated rotation in degrees, in `0..360`.
    pub fn angle(&self) -> Result<i32, Error> {
        self.object.with_node(|node| match &node.kind {
            NodeKind::Image(image) => Ok(image.angle),
            _ => Err(Error::defect("image object backed by a non-image node")),
        })?
    }

    /// Re-decodes the source file at a new target size. The current rotation
    /// is re-applied; the primitive is patched in place.
    pub fn resize(&self, width: i32, height: i32) -> Result<(), Error> {
        ensure_positive(width, "width")?;
        ensure_positive(height, "height")?;

        self.object.with_node_mut(|node| {
            if let NodeKind::Image(image) = &mut node.kind {
                image.width = width;
                image.height = height;
            }
        })?;
        let bitmap = self.regenerate()?;

        let handle = self.object.with_node(|node| node.handle)?;
        if let Some(handle) = handle {
            self.object
                .window()
                .core
                .surface
                .configure(handle, PrimAttr::Bitmap(bitmap));
        }
        Ok(())
    }

    /// Multiplies the target size by `factor`, truncating toward zero.
    pub fn scale(&self, factor: f64) -> Result<(), Error> {
        ensure_scale_factor(factor, "factor")?;

        let (width, height) = self.size()?;
        let width = (width as f64 * factor) as i32;
        let height = (height as f64 * factor) as i32;
        if width <= 0 || height <= 0 {
            return Err(Error::invalid("factor", "scales the image below one pixel"));
        }
        self.resize(width, height)
    }

    /// Adds `degrees` to the accumulated angle (positive turns
    /// counterclockwise) and regenerates the bitmap from the source file,
    /// so repeated rotations never compound resampling error.
    pub fn rotate(&self, degrees: i32) -> Result<(), Error> {
        self.object.with_node_mut(|node| {
            if let NodeKind::Image(image) = &mut node.kind {
                image.angle = (image.angle + degrees).rem_euclid(360);
            }
        })?;
        self.regenerate()?;

        let restack = self
            .object
            .with_node(|node| node.visible.then_some(node.depth))?;
        if let Some(depth) = restack {
            self.object.window().core.refresh(Some(depth))?;
        }
        Ok(())
    }

    /// Rebuilds the backing bitmap from the source file at the stored size
    /// and angle, stores it on the node, and returns a copy for patching.
    fn regenerate(&self) -> Result<crate::raster::Bitmap, Error> {
        let core = &self.object.window().core;
        let (path, width, height, angle) = self.object.with_node(|node| match &node.kind {
            NodeKind::Image(image) => {
                Ok((image.path.clone(), image.width, image.height, image.angle))
            }
            _ => Err(Error::defect("image object backed by a non-image node")),
        })??;

        let mut bitmap = core.codec.load_and_resize(&path, width as u32, height as u32)?;
        if angle != 0 {
            bitmap = core.codec.rotate(&bitmap, angle);
        }

        let copy = bitmap.clone();
        self.object.with_node_mut(|node| {
            if let NodeKind::Image(image) = &mut node.kind {
                image.bitmap = bitmap;
            }
        })?;
        Ok(copy)
    }
}

impl GraphicsObject for Image {
    fn object_ref(&self) -> &ObjectRef {
        &self.object
    }
}
