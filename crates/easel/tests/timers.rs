//! Timer and animation scheduling on the headless virtual clock.

use std::cell::Cell;
use std::rc::Rc;

use easel::raster::FlatCodec;
use easel::surface::{HeadlessSurface, Surface};
use easel::{Color, Step, Timer, Window, WindowConfig, run_with_delay};

fn window() -> (Window, Rc<HeadlessSurface>) {
    let surface = Rc::new(HeadlessSurface::new());
    let codec = Rc::new(FlatCodec::new(Color::WHITE));
    let window = Window::new(WindowConfig::default(), surface.clone() as Rc<dyn Surface>, codec).unwrap();
    (window, surface)
}

// ── Timer ─────────────────────────────────────────────────────────────────

#[test]
fn start_fires_immediately_then_repeats_on_the_interval() {
    let (window, surface) = window();
    let count = Rc::new(Cell::new(0u32));
    let c = Rc::clone(&count);
    let timer = Timer::new(&window, 100, move || c.set(c.get() + 1));

    timer.start();
    assert_eq!(count.get(), 1);
    assert!(timer.is_running());

    surface.pump_once();
    surface.pump_once();
    surface.pump_once();
    assert_eq!(count.get(), 4);
    assert_eq!(surface.now_ms(), 300);
}

#[test]
fn stop_cancels_the_outstanding_reschedule() {
    let (window, surface) = window();
    let count = Rc::new(Cell::new(0u32));
    let c = Rc::clone(&count);
    let timer = Timer::new(&window, 100, move || c.set(c.get() + 1));

    timer.start();
    timer.stop();
    assert!(!timer.is_running());

    surface.pump_once();
    assert_eq!(count.get(), 1);
    assert_eq!(surface.pending(), 0);
}

#[test]
fn interval_changes_apply_from_the_next_reschedule() {
    let (window, surface) = window();
    let timer = Timer::new(&window, 100, || {});

    timer.start();
    timer.set_interval(10);

    // The outstanding reschedule keeps its original deadline.
    surface.pump_once();
    assert_eq!(surface.now_ms(), 100);
    // The next one uses the new interval.
    surface.pump_once();
    assert_eq!(surface.now_ms(), 110);
}

#[test]
fn restarting_does_not_double_schedule() {
    let (window, surface) = window();
    let count = Rc::new(Cell::new(0u32));
    let c = Rc::clone(&count);
    let timer = Timer::new(&window, 50, move || c.set(c.get() + 1));

    timer.start();
    timer.start();
    assert_eq!(count.get(), 2);
    assert_eq!(surface.pending(), 1);

    surface.pump_once();
    assert_eq!(count.get(), 3);
}

#[test]
fn dropping_the_timer_stops_it() {
    let (window, surface) = window();
    let count = Rc::new(Cell::new(0u32));

    {
        let c = Rc::clone(&count);
        let timer = Timer::new(&window, 100, move || c.set(c.get() + 1));
        timer.start();
    }

    surface.pump_once();
    assert_eq!(count.get(), 1);
    assert_eq!(surface.pending(), 0);
}

#[test]
fn a_timer_may_stop_itself_from_its_callback() {
    let (window, surface) = window();
    let count = Rc::new(Cell::new(0u32));

    // The callback is installed after construction so it can capture the
    // timer it belongs to.
    let timer = Rc::new(Timer::new(&window, 10, || {}));
    let c = Rc::clone(&count);
    let t = Rc::clone(&timer);
    timer.set_callback(move || {
        c.set(c.get() + 1);
        if c.get() == 3 {
            t.stop();
        }
    });

    timer.start();
    for _ in 0..10 {
        surface.pump_once();
    }
    assert_eq!(count.get(), 3);
    assert_eq!(surface.pending(), 0);
}

// ── run_with_delay ────────────────────────────────────────────────────────

#[test]
fn the_producer_runs_immediately_and_then_on_its_own_schedule() {
    let (window, surface) = window();
    let count = Rc::new(Cell::new(0u32));

    let c = Rc::clone(&count);
    run_with_delay(&window, move || {
        c.set(c.get() + 1);
        if c.get() < 3 { Step::Wait(5) } else { Step::Done }
    });
    assert_eq!(count.get(), 1);

    surface.pump_once();
    surface.pump_once();
    assert_eq!(count.get(), 3);
    assert_eq!(surface.now_ms(), 10);

    // Done scheduled nothing further.
    surface.pump_once();
    assert_eq!(count.get(), 3);
    assert_eq!(surface.pending(), 0);
}

#[test]
fn rest_pauses_for_one_second() {
    let (window, surface) = window();
    let count = Rc::new(Cell::new(0u32));

    let c = Rc::clone(&count);
    run_with_delay(&window, move || {
        c.set(c.get() + 1);
        if c.get() == 1 { Step::Rest } else { Step::Done }
    });

    surface.pump_once();
    assert_eq!(count.get(), 2);
    assert_eq!(surface.now_ms(), 1000);
}

#[test]
fn a_finished_animation_schedules_nothing() {
    let (window, surface) = window();
    let fired = Rc::new(Cell::new(false));

    let f = Rc::clone(&fired);
    run_with_delay(&window, move || {
        f.set(true);
        Step::Done
    });

    assert!(fired.get());
    assert_eq!(surface.pending(), 0);
}
