//! Cooperative timers and animation pacing.
//!
//! Both facilities ride on [`Surface::schedule`]: there is no thread and no
//! blocking wait, only callbacks resumed by the window's event pump. A
//! long-running callback stalls everything else until it returns.
//!
//! [`Surface::schedule`]: crate::surface::Surface::schedule

mod animation;
mod timer;

pub use animation::{Step, run_with_delay};
pub use timer::Timer;
