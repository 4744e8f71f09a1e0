//! Depth ordering and membership behavior observed through the headless
//! surface.

use std::rc::Rc;

use easel::raster::FlatCodec;
use easel::surface::{HeadlessSurface, Prim, Surface};
use easel::{Color, Error, GraphicsObject, Point, Text, Window, WindowConfig};

fn window() -> (Window, Rc<HeadlessSurface>) {
    let surface = Rc::new(HeadlessSurface::new());
    let codec = Rc::new(FlatCodec::new(Color::BLUE));
    let window = Window::new(WindowConfig::default(), surface.clone() as Rc<dyn Surface>, codec).unwrap();
    (window, surface)
}

/// Bottom-first text contents of every live primitive.
fn stacking(surface: &HeadlessSurface) -> Vec<String> {
    surface
        .paint_order()
        .into_iter()
        .filter_map(|h| match surface.prim(h) {
            Some(Prim::Text { content, .. }) => Some(content),
            _ => None,
        })
        .collect()
}

#[test]
fn equal_depths_stack_in_registration_order() {
    let (window, surface) = window();

    let a = Text::new(&window, "a", 12, Point::zero()).unwrap();
    let c = Text::new(&window, "c", 12, Point::zero()).unwrap();
    let b = Text::new(&window, "b", 12, Point::zero()).unwrap();
    a.set_depth(10).unwrap();
    c.set_depth(10).unwrap();
    b.set_depth(20).unwrap();

    window.add(&a).unwrap();
    window.add(&c).unwrap();
    window.add(&b).unwrap();

    assert_eq!(stacking(&surface), ["a", "c", "b"]);
}

#[test]
fn lowering_a_depth_restacks_without_touching_lower_objects() {
    let (window, surface) = window();

    let low = Text::new(&window, "low", 12, Point::zero()).unwrap();
    let a = Text::new(&window, "a", 12, Point::zero()).unwrap();
    let c = Text::new(&window, "c", 12, Point::zero()).unwrap();
    let b = Text::new(&window, "b", 12, Point::zero()).unwrap();
    low.set_depth(2).unwrap();
    a.set_depth(10).unwrap();
    c.set_depth(10).unwrap();
    b.set_depth(20).unwrap();
    for t in [&low, &a, &c, &b] {
        window.add(t).unwrap();
    }

    let low_handle = surface.paint_order()[0];

    b.set_depth(5).unwrap();

    assert_eq!(stacking(&surface), ["low", "b", "a", "c"]);
    // The object strictly below the new depth kept its primitive.
    assert_eq!(surface.paint_order()[0], low_handle);
}

#[test]
fn raising_a_depth_restacks_from_the_new_depth() {
    let (window, surface) = window();

    let a = Text::new(&window, "a", 12, Point::zero()).unwrap();
    let b = Text::new(&window, "b", 12, Point::zero()).unwrap();
    a.set_depth(10).unwrap();
    b.set_depth(20).unwrap();
    window.add(&b).unwrap();
    window.add(&a).unwrap();
    assert_eq!(stacking(&surface), ["a", "b"]);

    a.set_depth(30).unwrap();
    assert_eq!(stacking(&surface), ["b", "a"]);
}

#[test]
fn remove_then_add_preserves_state_but_not_the_handle() {
    let (window, surface) = window();

    let label = Text::new(&window, "hello", 12, Point::new(40, 40)).unwrap();
    label.set_depth(7).unwrap();
    window.add(&label).unwrap();
    let first_handle = surface.paint_order()[0];

    window.remove(&label).unwrap();
    assert!(surface.paint_order().is_empty());
    // Logical state survives while absent.
    assert_eq!(label.center().unwrap(), Point::new(40, 40));
    assert_eq!(label.depth().unwrap(), 7);
    assert_eq!(label.text().unwrap(), "hello");

    window.add(&label).unwrap();
    let second_handle = surface.paint_order()[0];
    assert_ne!(first_handle, second_handle);
    assert_eq!(stacking(&surface), ["hello"]);
}

#[test]
fn objects_cannot_join_a_foreign_window() {
    let (home, _) = window();
    let (other, _) = window();

    let label = Text::new(&home, "stray", 12, Point::zero()).unwrap();
    let err = other.add(&label).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { param: "object", .. }));
}

#[test]
fn discard_deregisters_permanently() {
    let (window, surface) = window();

    let label = Text::new(&window, "gone", 12, Point::zero()).unwrap();
    window.add(&label).unwrap();
    let probe = Text::new(&window, "probe", 12, Point::zero()).unwrap();

    label.discard().unwrap();
    assert!(surface.paint_order().is_empty());

    // Unrelated objects keep working afterwards.
    window.add(&probe).unwrap();
    assert_eq!(stacking(&surface), ["probe"]);
}

#[test]
fn canvas_attributes_reach_the_surface() {
    let (window, surface) = window();

    assert_eq!(window.title(), "Graphics Window");
    window.set_title("Pond");
    assert_eq!(window.title(), "Pond");
    assert_eq!(surface.title(), "Pond");

    window.set_width(640).unwrap();
    window.set_height(480).unwrap();
    assert_eq!((window.width(), window.height()), (640, 480));
    assert_eq!(surface.canvas_size(), (640, 480));
    assert!(window.set_width(0).is_err());

    window.set_background(Color::BLACK);
    assert_eq!(window.background(), Color::BLACK);
    assert_eq!(surface.background(), Some(Color::BLACK));
}
