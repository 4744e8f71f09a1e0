use std::path::Path;

use image::imageops::FilterType;

use crate::error::Error;
use crate::paint::Color;

use super::Bitmap;

/// Produces displayable bitmaps for image objects.
///
/// `rotate` turns counterclockwise for positive degrees and keeps the canvas
/// size; corners that rotate out of frame are clipped and uncovered pixels
/// are transparent.
pub trait ImageCodec {
    fn load_and_resize(&self, path: &Path, width: u32, height: u32) -> Result<Bitmap, Error>;

    fn rotate(&self, bitmap: &Bitmap, degrees: i32) -> Bitmap;
}

/// File-backed codec over the `image` crate.
pub struct RasterCodec;

impl RasterCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RasterCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for RasterCodec {
    fn load_and_resize(&self, path: &Path, width: u32, height: u32) -> Result<Bitmap, Error> {
        let decoded = image::open(path).map_err(|e| {
            Error::invalid("image_path", format!("cannot load {}: {e}", path.display()))
        })?;
        let resized = image::imageops::resize(&decoded.to_rgba8(), width, height, FilterType::Triangle);
        Bitmap::from_rgba(width, height, resized.into_raw())
    }

    fn rotate(&self, bitmap: &Bitmap, degrees: i32) -> Bitmap {
        rotate_nearest(bitmap, degrees)
    }
}

/// Codec that ignores the file system and produces solid bitmaps.
///
/// Lets image objects run against the headless surface without assets on
/// disk; also the test double for codec interactions.
pub struct FlatCodec {
    color: Color,
}

impl FlatCodec {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl ImageCodec for FlatCodec {
    fn load_and_resize(&self, _path: &Path, width: u32, height: u32) -> Result<Bitmap, Error> {
        Ok(Bitmap::solid(width, height, self.color))
    }

    fn rotate(&self, bitmap: &Bitmap, _degrees: i32) -> Bitmap {
        // A solid bitmap is rotation-invariant on a fixed canvas.
        bitmap.clone()
    }
}

/// Inverse-mapped nearest-neighbour rotation about the bitmap center.
fn rotate_nearest(src: &Bitmap, degrees: i32) -> Bitmap {
    let theta = (degrees as f64).to_radians();
    let (sin, cos) = theta.sin_cos();

    let w = src.width();
    let h = src.height();
    let cx = (w.saturating_sub(1)) as f64 / 2.0;
    let cy = (h.saturating_sub(1)) as f64 / 2.0;

    let mut out = Bitmap::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            // Counterclockwise output; sample the source at the inverse map.
            let sx = cx + dx * cos - dy * sin;
            let sy = cy + dx * sin + dy * cos;
            let sx = sx.round();
            let sy = sy.round();
            if sx >= 0.0 && sy >= 0.0 && sx < w as f64 && sy < h as f64 {
                out.set_pixel(x, y, src.pixel(sx as u32, sy as u32));
            }
        }
    }
    out
}
