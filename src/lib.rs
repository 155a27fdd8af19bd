
//! Antialiased polygon rasterizer for fixed-size pixel buffers
//!
//! How does this work
//!    canvas = Canvas::<Rgb565, W, H>::new()
//!    poly   = Polygon::new() + add_point() ...     -- convexity tracked here
//!  Fill
//!    canvas.fill_polygon(&poly, color, alpha)
//!      pixel_bounds()                -- rows to visit
//!      convex:     row_segments()    -- mixed | inside | mixed
//!      not convex: row_mix_and_out() -- one mixed span
//!        covered_areas()             -- N x N subpixel counts -> line buffer
//!        coverage_alpha()
//!        blend()                     -- 0 opaque, 128 transparent
//!          PixelFormat::decode / encode
//!  Stroke
//!    draw_segments()     -- one line quad per edge
//!    draw_segments_hq()  -- StrokeOutline::outline() -> fill, not convex
//!  Output
//!    save_bmp() / save_image() / pixeldata() -> FrameSink
//!
//! Coordinates are `f32` by default; the `fixed-point` feature stores them
//! as `i16` scaled by 10.

pub mod coord;
pub mod point;
pub mod clip;
pub mod polygon;
pub mod scan;
pub mod color;
pub mod pixfmt;
pub mod math;
pub mod buffer;
pub mod canvas;
pub mod render;
pub mod stroke;
pub mod picture;
pub mod bmp;
pub mod export;
pub mod display;

pub use coord::{Coord, PixelIndex, INTERNAL_SCALE, SUBPIXEL_DIVISIONS, SUBPIXELS};
pub use point::*;
pub use clip::*;
pub use polygon::*;
pub use scan::*;
pub use color::*;
pub use pixfmt::*;
pub use math::*;
pub use buffer::*;
pub use canvas::*;
pub use stroke::*;
pub use picture::*;
pub use bmp::*;
pub use export::*;
pub use display::*;

/// Raw bytes of a pixel buffer
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}

/// Ordered vertices of a path or polygon
pub trait VertexSource {
    fn vertices(&self) -> &[Point];
}

/// Color with one byte per channel
///
/// Channel values are in the depth of the pixel format using them, e.g.
/// 0..=31 for the red channel of [`Rgb565`].
pub trait Color: Copy + Default + PartialEq + std::fmt::Debug {
    /// Channel values
    fn channels(&self) -> &[u8];
    /// Mutable channel values
    fn channels_mut(&mut self) -> &mut [u8];
}

/// Encoding of one color into a fixed number of bytes
///
/// Resolved at compile time as the pixel format parameter of [`Canvas`].
pub trait PixelFormat {
    /// Bytes used by one pixel
    const BYTES_PER_PIXEL: usize;
    /// Tag handed to a [`FrameSink`] with each frame
    const LAYOUT: PixelLayout;
    /// Color stored by this format
    type Color: Color;
    /// Read the pixel at the start of `data`
    fn decode(data: &[u8]) -> Self::Color;
    /// Write `c` to the start of `data`
    fn encode(data: &mut [u8], c: Self::Color);
    /// Expand to 8 bits per channel
    fn to_rgb24(c: Self::Color) -> Rgb;
}
