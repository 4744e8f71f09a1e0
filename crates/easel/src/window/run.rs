use std::rc::Rc;

use log::info;

use crate::error::Error;
use crate::raster::ImageCodec;
use crate::surface::{PumpStatus, Surface};

use super::{Window, WindowConfig};

/// Opens a window, hands it to `entry` for scene setup, then drives the
/// surface's event pump until the surface closes.
///
/// The pump is the sole source of forward progress: input dispatch and timer
/// callbacks all run from inside [`Surface::pump_once`]. A closed surface is
/// the normal way out and returns `Ok`.
pub fn run(
    config: WindowConfig,
    surface: Rc<dyn Surface>,
    codec: Rc<dyn ImageCodec>,
    entry: impl FnOnce(&Window) -> Result<(), Error>,
) -> Result<(), Error> {
    let window = Window::new(config, surface, codec)?;
    entry(&window)?;

    info!("scene set up, entering event pump");
    loop {
        if window.core.surface.pump_once() == PumpStatus::Closed {
            info!("surface closed, shutting down");
            return Ok(());
        }
    }
}
