use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::geom::Point;
use crate::paint::Color;
use crate::raster::Bitmap;

use super::{
    CanvasAttr, InputFn, PrimAttr, PrimHandle, PumpStatus, RawInput, RawSignal, ScheduledFn,
    ShapeStyle, Surface, TimerToken,
};

/// Recorded state of one live primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Prim {
    Shape {
        points: Vec<Point>,
        style: ShapeStyle,
        visible: bool,
    },
    Text {
        pos: Point,
        content: String,
        size: i32,
    },
    Image {
        pos: Point,
        width: u32,
        height: u32,
    },
}

/// A recording, virtual-clock [`Surface`] with no real window behind it.
///
/// Primitives are kept in stacking order (creation order). Scheduled
/// callbacks run from [`pump_once`](Surface::pump_once) in due order on a
/// virtual clock that jumps straight to the next deadline, so timer-driven
/// programs run instantly under test. Input is injected by the host through
/// [`inject_global`](Self::inject_global) and
/// [`inject_to_handle`](Self::inject_to_handle).
pub struct HeadlessSurface {
    inner: RefCell<Inner>,
}

#[derive(Default)]
struct Inner {
    next_handle: u64,
    next_token: u64,
    /// Stacking order, bottom first.
    items: Vec<(PrimHandle, Prim)>,
    global_bindings: HashMap<RawSignal, InputFn>,
    handle_bindings: HashMap<(PrimHandle, RawSignal), InputFn>,
    queue: BinaryHeap<Reverse<DueEntry>>,
    callbacks: HashMap<u64, ScheduledFn>,
    now_ms: u64,
    closed: bool,
    canvas: Canvas,
}

#[derive(Debug, Clone, Default)]
struct Canvas {
    width: i32,
    height: i32,
    background: Option<Color>,
    title: String,
}

/// Heap entry ordered by deadline, then submission order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct DueEntry {
    due_ms: u64,
    seq: u64,
    token: u64,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self { inner: RefCell::new(Inner::default()) }
    }

    /// Marks the surface closed; the next pump reports [`PumpStatus::Closed`].
    pub fn close(&self) {
        self.inner.borrow_mut().closed = true;
    }

    /// Virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Number of scheduled callbacks that have not yet fired or been
    /// cancelled.
    pub fn pending(&self) -> usize {
        self.inner.borrow().callbacks.len()
    }

    /// Live primitive handles, bottom first.
    pub fn paint_order(&self) -> Vec<PrimHandle> {
        self.inner.borrow().items.iter().map(|(h, _)| *h).collect()
    }

    /// Snapshot of one primitive, if it is still alive.
    pub fn prim(&self, handle: PrimHandle) -> Option<Prim> {
        self.inner
            .borrow()
            .items
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, p)| p.clone())
    }

    /// Canvas title as set through [`CanvasAttr::Title`].
    pub fn title(&self) -> String {
        self.inner.borrow().canvas.title.clone()
    }

    /// Canvas `(width, height)` as set through [`CanvasAttr`].
    pub fn canvas_size(&self) -> (i32, i32) {
        let inner = self.inner.borrow();
        (inner.canvas.width, inner.canvas.height)
    }

    /// Canvas background, or `None` if never set.
    pub fn background(&self) -> Option<Color> {
        self.inner.borrow().canvas.background
    }

    /// Delivers a key-level input occurrence to the global binding, if any.
    pub fn inject_global(&self, input: RawInput) {
        let callback = self.inner.borrow().global_bindings.get(&input.signal).cloned();
        if let Some(callback) = callback {
            callback(&input);
        }
    }

    /// Delivers a pointer-level input occurrence to the binding attached to
    /// `handle`, if any. The host performs hit testing; a real backend would
    /// do it from pointer coordinates.
    pub fn inject_to_handle(&self, handle: PrimHandle, input: RawInput) {
        let callback = self
            .inner
            .borrow()
            .handle_bindings
            .get(&(handle, input.signal))
            .cloned();
        if let Some(callback) = callback {
            callback(&input);
        }
    }

    fn alloc_handle(inner: &mut Inner) -> PrimHandle {
        inner.next_handle += 1;
        PrimHandle(inner.next_handle)
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for HeadlessSurface {
    fn create_shape(&self, points: &[Point], style: &ShapeStyle, visible: bool) -> PrimHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = Self::alloc_handle(&mut inner);
        inner.items.push((
            handle,
            Prim::Shape { points: points.to_vec(), style: *style, visible },
        ));
        handle
    }

    fn create_text(&self, pos: Point, content: &str, size: i32) -> PrimHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = Self::alloc_handle(&mut inner);
        inner
            .items
            .push((handle, Prim::Text { pos, content: content.to_owned(), size }));
        handle
    }

    fn create_image(&self, pos: Point, bitmap: &Bitmap) -> PrimHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = Self::alloc_handle(&mut inner);
        inner.items.push((
            handle,
            Prim::Image { pos, width: bitmap.width(), height: bitmap.height() },
        ));
        handle
    }

    fn delete(&self, handle: PrimHandle) {
        let mut inner = self.inner.borrow_mut();
        inner.items.retain(|(h, _)| *h != handle);
        inner.handle_bindings.retain(|(h, _), _| *h != handle);
    }

    fn configure(&self, handle: PrimHandle, attr: PrimAttr) {
        let mut inner = self.inner.borrow_mut();
        let Some((_, prim)) = inner.items.iter_mut().find(|(h, _)| *h == handle) else {
            log::warn!("configure on unknown primitive {handle:?}");
            return;
        };
        match (prim, attr) {
            (Prim::Shape { style, .. }, PrimAttr::FillColor(c)) => style.fill_color = c,
            (Prim::Shape { style, .. }, PrimAttr::BorderColor(c)) => style.border_color = c,
            (Prim::Shape { style, .. }, PrimAttr::BorderWidth(w)) => style.border_width = w,
            (Prim::Text { size, .. }, PrimAttr::FontSize(s)) => *size = s,
            (Prim::Text { content, .. }, PrimAttr::TextContent(t)) => *content = t,
            (Prim::Image { width, height, .. }, PrimAttr::Bitmap(bm)) => {
                *width = bm.width();
                *height = bm.height();
            }
            (_, attr) => log::warn!("attribute {attr:?} does not apply to primitive {handle:?}"),
        }
    }

    fn move_coords(&self, handle: PrimHandle, new_pos: Point) {
        let mut inner = self.inner.borrow_mut();
        match inner.items.iter_mut().find(|(h, _)| *h == handle) {
            Some((_, Prim::Text { pos, .. })) | Some((_, Prim::Image { pos, .. })) => {
                *pos = new_pos;
            }
            Some(_) => log::warn!("move_coords on a shape primitive {handle:?}"),
            None => log::warn!("move_coords on unknown primitive {handle:?}"),
        }
    }

    fn bind_global(&self, signal: RawSignal, callback: InputFn) {
        self.inner.borrow_mut().global_bindings.insert(signal, callback);
    }

    fn bind_to_handle(&self, handle: PrimHandle, signal: RawSignal, callback: InputFn) {
        self.inner
            .borrow_mut()
            .handle_bindings
            .insert((handle, signal), callback);
    }

    fn schedule(&self, delay_ms: u64, callback: ScheduledFn) -> TimerToken {
        let mut inner = self.inner.borrow_mut();
        inner.next_token += 1;
        let token = inner.next_token;
        let due_ms = inner.now_ms + delay_ms;
        let seq = token;
        inner.queue.push(Reverse(DueEntry { due_ms, seq, token }));
        inner.callbacks.insert(token, callback);
        TimerToken(token)
    }

    fn cancel(&self, token: TimerToken) {
        // The heap entry is left behind and skipped lazily during pump.
        self.inner.borrow_mut().callbacks.remove(&token.0);
    }

    fn set_canvas(&self, attr: CanvasAttr) {
        let mut inner = self.inner.borrow_mut();
        match attr {
            CanvasAttr::Width(w) => inner.canvas.width = w,
            CanvasAttr::Height(h) => inner.canvas.height = h,
            CanvasAttr::Background(c) => inner.canvas.background = Some(c),
            CanvasAttr::Title(t) => inner.canvas.title = t,
        }
    }

    fn pump_once(&self) -> PumpStatus {
        // The borrow must be released before the callback runs: callbacks
        // re-enter the surface to reschedule or mutate primitives.
        let callback = {
            let mut inner = self.inner.borrow_mut();
            if inner.closed {
                return PumpStatus::Closed;
            }
            loop {
                let Some(Reverse(entry)) = inner.queue.pop() else {
                    break None;
                };
                if let Some(callback) = inner.callbacks.remove(&entry.token) {
                    inner.now_ms = inner.now_ms.max(entry.due_ms);
                    break Some(callback);
                }
                // Cancelled entry; keep draining.
            }
        };

        if let Some(callback) = callback {
            callback();
        }
        PumpStatus::Continue
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    // ── stacking order ────────────────────────────────────────────────────

    #[test]
    fn creation_order_is_stacking_order() {
        let s = HeadlessSurface::new();
        let a = s.create_text(Point::zero(), "a", 12);
        let b = s.create_text(Point::zero(), "b", 12);
        let c = s.create_text(Point::zero(), "c", 12);
        assert_eq!(s.paint_order(), vec![a, b, c]);

        s.delete(b);
        let d = s.create_text(Point::zero(), "d", 12);
        assert_eq!(s.paint_order(), vec![a, c, d]);
    }

    // ── scheduler ─────────────────────────────────────────────────────────

    #[test]
    fn pump_runs_callbacks_in_due_order_on_the_virtual_clock() {
        let s = Rc::new(HeadlessSurface::new());
        let log = Rc::new(RefCell::new(Vec::new()));

        let l = Rc::clone(&log);
        s.schedule(50, Box::new(move || l.borrow_mut().push("late")));
        let l = Rc::clone(&log);
        s.schedule(10, Box::new(move || l.borrow_mut().push("early")));

        assert_eq!(s.pump_once(), PumpStatus::Continue);
        assert_eq!(s.now_ms(), 10);
        assert_eq!(s.pump_once(), PumpStatus::Continue);
        assert_eq!(s.now_ms(), 50);
        assert_eq!(*log.borrow(), vec!["early", "late"]);
    }

    #[test]
    fn cancelled_callbacks_never_fire() {
        let s = HeadlessSurface::new();
        let fired = Rc::new(Cell::new(false));
        let f = Rc::clone(&fired);
        let token = s.schedule(10, Box::new(move || f.set(true)));
        s.cancel(token);

        s.pump_once();
        assert!(!fired.get());
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn callbacks_may_reschedule_from_inside_the_pump() {
        let s = Rc::new(HeadlessSurface::new());
        let count = Rc::new(Cell::new(0));

        fn arm(s: &Rc<HeadlessSurface>, count: &Rc<Cell<u32>>) {
            let s2 = Rc::clone(s);
            let c2 = Rc::clone(count);
            s.schedule(
                5,
                Box::new(move || {
                    c2.set(c2.get() + 1);
                    if c2.get() < 3 {
                        arm(&s2, &c2);
                    }
                }),
            );
        }

        arm(&s, &count);
        for _ in 0..5 {
            s.pump_once();
        }
        assert_eq!(count.get(), 3);
        assert_eq!(s.now_ms(), 15);
    }

    #[test]
    fn closed_surface_reports_closed_and_stops_firing() {
        let s = HeadlessSurface::new();
        let fired = Rc::new(Cell::new(false));
        let f = Rc::clone(&fired);
        s.schedule(1, Box::new(move || f.set(true)));

        s.close();
        assert_eq!(s.pump_once(), PumpStatus::Closed);
        assert!(!fired.get());
    }

    // ── bindings ──────────────────────────────────────────────────────────

    #[test]
    fn deleting_a_primitive_drops_its_bindings() {
        let s = HeadlessSurface::new();
        let h = s.create_text(Point::zero(), "x", 12);
        let fired = Rc::new(Cell::new(false));
        let f = Rc::clone(&fired);
        s.bind_to_handle(h, RawSignal::PointerEnter, Rc::new(move |_| f.set(true)));

        s.delete(h);
        s.inject_to_handle(
            h,
            RawInput {
                signal: RawSignal::PointerEnter,
                pos: Point::zero(),
                root_pos: Point::zero(),
                keysym: None,
            },
        );
        assert!(!fired.get());
    }
}
