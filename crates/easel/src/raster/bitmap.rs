use crate::error::Error;
use crate::paint::Color;

/// An RGBA8 pixel buffer, row-major, straight alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// A fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// A bitmap filled with one color.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let mut bm = Self::new(width, height);
        let rgba = color.to_rgba_bytes();
        for chunk in bm.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
        bm
    }

    /// Wraps an existing RGBA8 buffer. The buffer length must be
    /// `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, Error> {
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(Error::invalid(
                "pixels",
                format!("expected {expected} bytes for {width}x{height} RGBA, got {}", pixels.len()),
            ));
        }
        Ok(Self { width, height, pixels })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA bytes of one pixel. Out-of-range coordinates read transparent.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        let i = ((y * self.width + x) * 4) as usize;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }

    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }
}
