use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Error;
use crate::geom::{self, Point};
use crate::input::{EventHandler, router};
use crate::scene::{Depth, Node, NodeId, NodeKind};
use crate::window::{Window, register_node};

/// Shared identity of every graphical object: the window it was constructed
/// against plus its id in that window's scene arena.
///
/// All object state lives in the arena node; the handle types themselves are
/// cheap clones of this pair.
#[derive(Clone)]
pub struct ObjectRef {
    window: Window,
    id: NodeId,
}

impl ObjectRef {
    pub(crate) fn register(window: &Window, node: Node) -> Self {
        let id = register_node(window, node);
        Self { window: window.clone(), id }
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn id(&self) -> NodeId {
        self.id
    }

    /// Runs `f` against the object's node. The scene borrow ends when the
    /// closure returns, so `f` must not call back into the window.
    pub(crate) fn with_node<T>(&self, f: impl FnOnce(&Node) -> T) -> Result<T, Error> {
        let scene = self.window.core.scene.borrow();
        Ok(f(scene.node(self.id)?))
    }

    pub(crate) fn with_node_mut<T>(&self, f: impl FnOnce(&mut Node) -> T) -> Result<T, Error> {
        let mut scene = self.window.core.scene.borrow_mut();
        Ok(f(scene.node_mut(self.id)?))
    }
}

/// What a move has to do to the surface once the node is updated.
enum MovePatch {
    /// Point-list variants restack via a depth-limited refresh.
    Restack(Depth),
    /// Text and images patch their primitive in place.
    Slide(crate::surface::PrimHandle, Point),
    None,
}

/// Behavior common to every object: identity, paint depth, movement, and
/// event-handler attachment.
///
/// Everything here returns `Err` once the object has been
/// [`discard`](Self::discard)ed; a merely [`remove`](Window::remove)d object
/// keeps working and can be added back.
pub trait GraphicsObject {
    /// The object's shared identity; every provided method goes through it.
    fn object_ref(&self) -> &ObjectRef;

    fn center(&self) -> Result<Point, Error> {
        self.object_ref().with_node(|node| node.center)
    }

    fn depth(&self) -> Result<i32, Error> {
        self.object_ref().with_node(|node| node.depth.value())
    }

    /// Changes the paint depth. Restacks everything at or above the new
    /// depth; objects strictly below keep their primitives untouched.
    fn set_depth(&self, depth: i32) -> Result<(), Error> {
        let object = self.object_ref();
        let visible = object.with_node_mut(|node| {
            node.depth = Depth::new(depth);
            node.visible
        })?;
        if visible {
            object.window().core.refresh(Some(Depth::new(depth)))?;
        }
        Ok(())
    }

    /// Translates the object by integer deltas: center, vertices for
    /// point-list variants, and the pivot if one is set.
    fn move_by(&self, dx: i32, dy: i32) -> Result<(), Error> {
        let object = self.object_ref();
        let patch = object.with_node_mut(|node| {
            node.center = node.center.offset(dx, dy);
            if let Some(pivot) = node.pivot.as_mut() {
                *pivot = pivot.offset(dx, dy);
            }
            match &mut node.kind {
                NodeKind::Shape(shape) => {
                    geom::translate(&mut shape.points, dx, dy);
                    if node.visible {
                        MovePatch::Restack(node.depth)
                    } else {
                        MovePatch::None
                    }
                }
                NodeKind::Text(_) | NodeKind::Image(_) => match node.handle {
                    Some(handle) => MovePatch::Slide(handle, node.center),
                    None => MovePatch::None,
                },
            }
        })?;

        match patch {
            MovePatch::Restack(depth) => object.window().core.refresh(Some(depth)),
            MovePatch::Slide(handle, pos) => {
                object.window().core.surface.move_coords(handle, pos);
                Ok(())
            }
            MovePatch::None => Ok(()),
        }
    }

    fn move_to(&self, center: Point) -> Result<(), Error> {
        let current = self.center()?;
        self.move_by(center.x - current.x, center.y - current.y)
    }

    /// Attaches an event handler, replacing any previous one.
    ///
    /// Mouse events reach the handler while the pointer interacts with this
    /// object's primitive; key events are window-wide, and the object whose
    /// handler was attached most recently receives them.
    fn add_handler(&self, handler: impl EventHandler) -> Result<(), Error>
    where
        Self: Sized,
    {
        self.add_shared_handler(Rc::new(RefCell::new(handler)))
    }

    /// [`add_handler`](Self::add_handler) for a handler shared between
    /// several objects.
    fn add_shared_handler(&self, handler: Rc<RefCell<dyn EventHandler>>) -> Result<(), Error> {
        let object = self.object_ref();
        let handle = object.with_node_mut(|node| {
            node.handler = Some(handler);
            node.handle
        })?;

        let core = &object.window().core;
        router::bind_keys(&core.weak, object.id(), core.surface.as_ref());
        if let Some(handle) = handle {
            router::bind_pointer(&core.weak, object.id(), handle, core.surface.as_ref());
        }
        Ok(())
    }

    /// Permanently removes the object from its window and deregisters it
    /// from the scene. Clones of the handle error from here on.
    fn discard(self) -> Result<(), Error>
    where
        Self: Sized,
    {
        let object = self.object_ref();
        let node = object.window().core.scene.borrow_mut().deregister(object.id())?;
        if let Some(handle) = node.handle {
            object.window().core.surface.delete(handle);
        }
        Ok(())
    }
}
