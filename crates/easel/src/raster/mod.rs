//! Bitmaps and the image-codec collaborator.
//!
//! The core never decodes or transforms pixels itself; image objects ask an
//! [`ImageCodec`] to produce a displayable bitmap of a requested size,
//! optionally rotated. [`RasterCodec`] is the file-backed implementation;
//! [`FlatCodec`] produces solid bitmaps for headless runs and tests.

mod bitmap;
mod codec;

pub use bitmap::Bitmap;
pub use codec::{FlatCodec, ImageCodec, RasterCodec};
