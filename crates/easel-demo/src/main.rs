//! Bouncing-ball demo on the headless surface.
//!
//! Runs the whole animation on the virtual clock, so it finishes instantly
//! while exercising the same refresh, event and scheduling paths a windowed
//! backend would.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Context;
use log::info;

use easel::logging::{LoggingConfig, init_logging};
use easel::raster::FlatCodec;
use easel::surface::HeadlessSurface;
use easel::{
    Circle, Color, Fillable, GraphicsObject, Point, Step, Text, Window, WindowConfig,
    run, run_with_delay,
};

const FLOOR: i32 = 360;
const STEPS: u32 = 120;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let surface = Rc::new(HeadlessSurface::new());
    let codec = Rc::new(FlatCodec::new(Color::WHITE));

    let pump = Rc::clone(&surface);
    run(
        WindowConfig { title: "Bouncing Ball".to_owned(), ..WindowConfig::default() },
        surface,
        codec,
        move |window| {
            build_scene(window, pump)?;
            Ok(())
        },
    )
    .context("demo event loop failed")?;

    info!("animation complete");
    Ok(())
}

fn build_scene(window: &Window, surface: Rc<HeadlessSurface>) -> Result<(), easel::Error> {
    let ball = Circle::new(window, 20, Point::new(200, 80))?;
    ball.set_fill_color(Color::RED)?;

    let label = Text::new(window, "bouncing...", 14, Point::new(200, 30))?;
    window.add(&ball)?;
    window.add(&label)?;

    // Simple ballistic bounce: integer velocity, gravity of one pixel per
    // step, energy loss on each floor hit.
    let velocity = Cell::new(0i32);
    let remaining = Cell::new(STEPS);
    run_with_delay(window, move || {
        let mut v = velocity.get() + 1;
        let center = match ball.center() {
            Ok(c) => c,
            Err(_) => return Step::Done,
        };

        let mut y = center.y + v;
        if y >= FLOOR {
            y = FLOOR;
            v = -(v * 3 / 4);
        }
        velocity.set(v);
        if ball.move_to(Point::new(center.x, y)).is_err() {
            return Step::Done;
        }

        remaining.set(remaining.get() - 1);
        if remaining.get() == 0 || (v == 0 && y == FLOOR) {
            let _ = label.set_text("done");
            surface.close();
            return Step::Done;
        }
        Step::Wait(16)
    });

    Ok(())
}
