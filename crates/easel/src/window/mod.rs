//! The window: canvas attributes, the scene registry, and the refresh engine.
//!
//! A [`Window`] is a cheap clonable handle over a single shared core. The
//! core owns the scene and the two backend collaborators (surface and image
//! codec); everything else in the crate reaches them through here.

mod run;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;

use crate::error::{Error, ensure_positive};
use crate::input::router;
use crate::objects::GraphicsObject;
use crate::paint::Color;
use crate::raster::ImageCodec;
use crate::scene::{Depth, Node, NodeId, NodeKind, Scene};
use crate::surface::{CanvasAttr, Surface};

pub use run::run;

/// Initial canvas attributes for [`Window::new`].
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub background: Color,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            background: Color::WHITE,
            title: "Graphics Window".to_owned(),
        }
    }
}

/// Shared state behind every [`Window`] clone and every object handle.
///
/// `weak` is the core's own back-reference, handed to input callbacks so
/// they never keep the window alive on their own.
pub(crate) struct WindowCore {
    pub(crate) surface: Rc<dyn Surface>,
    pub(crate) codec: Rc<dyn ImageCodec>,
    pub(crate) scene: RefCell<Scene>,
    pub(crate) weak: Weak<WindowCore>,
    width: Cell<i32>,
    height: Cell<i32>,
    background: Cell<Color>,
    title: RefCell<String>,
}

/// A window with a drawing canvas and an ordered collection of objects.
///
/// Objects are constructed against a window but stay hidden until
/// [`add`](Self::add); [`remove`](Self::remove) hides them again without
/// losing their state, so add/remove/add round-trips preserve center, depth
/// and appearance.
#[derive(Clone)]
pub struct Window {
    pub(crate) core: Rc<WindowCore>,
}

impl Window {
    /// Opens a window over the given backend collaborators.
    pub fn new(
        config: WindowConfig,
        surface: Rc<dyn Surface>,
        codec: Rc<dyn ImageCodec>,
    ) -> Result<Self, Error> {
        ensure_positive(config.width, "width")?;
        ensure_positive(config.height, "height")?;

        let core = Rc::new_cyclic(|weak| WindowCore {
            surface,
            codec,
            scene: RefCell::new(Scene::new()),
            weak: weak.clone(),
            width: Cell::new(config.width),
            height: Cell::new(config.height),
            background: Cell::new(config.background),
            title: RefCell::new(config.title),
        });

        core.surface.set_canvas(CanvasAttr::Width(config.width));
        core.surface.set_canvas(CanvasAttr::Height(config.height));
        core.surface.set_canvas(CanvasAttr::Background(config.background));
        core.surface.set_canvas(CanvasAttr::Title(core.title.borrow().clone()));

        Ok(Self { core })
    }

    // ── canvas attributes ─────────────────────────────────────────────────

    pub fn width(&self) -> i32 {
        self.core.width.get()
    }

    pub fn height(&self) -> i32 {
        self.core.height.get()
    }

    pub fn set_width(&self, width: i32) -> Result<(), Error> {
        ensure_positive(width, "width")?;
        self.core.width.set(width);
        self.core.surface.set_canvas(CanvasAttr::Width(width));
        Ok(())
    }

    pub fn set_height(&self, height: i32) -> Result<(), Error> {
        ensure_positive(height, "height")?;
        self.core.height.set(height);
        self.core.surface.set_canvas(CanvasAttr::Height(height));
        Ok(())
    }

    pub fn background(&self) -> Color {
        self.core.background.get()
    }

    pub fn set_background(&self, color: Color) {
        self.core.background.set(color);
        self.core.surface.set_canvas(CanvasAttr::Background(color));
    }

    pub fn title(&self) -> String {
        self.core.title.borrow().clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.core.surface.set_canvas(CanvasAttr::Title(title.clone()));
        *self.core.title.borrow_mut() = title;
    }

    // ── object membership ─────────────────────────────────────────────────

    /// Shows an object: absent becomes present, and everything at or above
    /// its depth is restacked so the newcomer lands in the right place.
    pub fn add(&self, object: &dyn GraphicsObject) -> Result<(), Error> {
        let object = object.object_ref();
        self.check_same_window(object.window())?;

        let depth = {
            let mut scene = self.core.scene.borrow_mut();
            let node = scene.node_mut(object.id())?;
            node.visible = true;
            node.depth
        };
        self.core.refresh(Some(depth))
    }

    /// Hides an object: present becomes absent. Its registry entry and all
    /// logical state survive, so it can be added again later.
    pub fn remove(&self, object: &dyn GraphicsObject) -> Result<(), Error> {
        let object = object.object_ref();
        self.check_same_window(object.window())?;

        let mut scene = self.core.scene.borrow_mut();
        let node = scene.node_mut(object.id())?;
        node.visible = false;
        if let Some(handle) = node.handle.take() {
            self.core.surface.delete(handle);
        }
        Ok(())
    }

    fn check_same_window(&self, other: &Window) -> Result<(), Error> {
        if !Rc::ptr_eq(&self.core, &other.core) {
            return Err(Error::invalid(
                "object",
                "object belongs to a different window",
            ));
        }
        Ok(())
    }
}

impl WindowCore {
    /// Re-synchronizes the surface with the scene, restacking every visible
    /// object whose depth is at or above `from` (all of them when `None`).
    ///
    /// Recreation order is paint order: primitives stack in creation order,
    /// so walking the plan back-to-front puts each recreated object above
    /// the untouched lower-depth ones and below its shallower peers.
    pub(crate) fn refresh(&self, from: Option<Depth>) -> Result<(), Error> {
        let mut scene = self.scene.borrow_mut();
        let plan = scene.paint_order(from)?;
        debug!("refresh from {from:?}: {} entries", plan.len());

        for id in plan {
            let node = scene.node_mut(id)?;
            if let Some(handle) = node.handle.take() {
                self.surface.delete(handle);
            }
            if !node.visible {
                continue;
            }

            let handle = match &node.kind {
                NodeKind::Shape(shape) => {
                    self.surface.create_shape(&shape.points, &shape.style, true)
                }
                NodeKind::Text(text) => {
                    self.surface.create_text(node.center, &text.content, text.size)
                }
                NodeKind::Image(image) => self.surface.create_image(node.center, &image.bitmap),
            };
            node.handle = Some(handle);

            if node.handler.is_some() {
                router::bind_pointer(&self.weak, id, handle, self.surface.as_ref());
            }
        }
        Ok(())
    }
}

/// Registers a freshly constructed node. Crate-internal; the object
/// constructors are the only callers.
pub(crate) fn register_node(window: &Window, node: Node) -> NodeId {
    window.core.scene.borrow_mut().insert(node)
}
