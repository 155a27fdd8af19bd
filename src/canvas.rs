//! Fixed size canvas

use crate::buffer::{BufferState, RenderingBuffer};
use crate::clip::clip_min_max;
use crate::coord::PixelIndex;
use crate::math::{blend, TRANSPARENT};
use crate::PixelData;
use crate::PixelFormat;

use std::marker::PhantomData;
use std::path::Path;

use log::debug;

/// Pixel buffer of `W` x `H` pixels encoded by the format `F`
///
/// Owns the pixel bytes, a buffer state and a line buffer of `W` coverage
/// counts used while filling. Pixel centers are at integer coordinates;
/// pixel (0,0) covers `[-0.5, 0.5)` in both axes.
///
///     use polycanvas::{Canvas, Rgb888, Rgb};
///
///     let mut canvas = Canvas::<Rgb888, 4, 2>::new();
///     assert!(canvas.is_writable());
///     canvas.set((3,1), Rgb::new(1,2,3));
///     assert_eq!(canvas.get((3,1)), Some(Rgb::new(1,2,3)));
///     assert_eq!(canvas.get((4,1)), None);
///
///     canvas.mark_readable();
///     canvas.set((0,0), Rgb::new(9,9,9)); // Ignored, not writable
///     assert_eq!(canvas.get((0,0)), Some(Rgb::black()));
///
pub struct Canvas<F, const W: usize, const H: usize> {
    pub(crate) rbuf: RenderingBuffer,
    pub(crate) line: Vec<u8>,
    phantom: PhantomData<F>,
}

impl<F: PixelFormat, const W: usize, const H: usize> Canvas<F, W, H> {
    /// Width in pixels
    pub const WIDTH: usize = W;
    /// Height in pixels
    pub const HEIGHT: usize = H;

    /// Create a zeroed, writable canvas
    pub fn new() -> Self {
        if W == 0 || H == 0 {
            panic!("Cannot create canvas with 0 width or height");
        }
        Self { rbuf: RenderingBuffer::new(W, H, F::BYTES_PER_PIXEL),
               line: vec![0u8; W],
               phantom: PhantomData,
        }
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        W
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        H
    }
    /// Size of the pixel data in bytes
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Current buffer state
    pub fn state(&self) -> BufferState {
        self.rbuf.state()
    }
    /// Hand the finished frame to the consumer
    pub fn mark_readable(&mut self) {
        self.rbuf.mark_readable();
    }
    /// Return the canvas to the producer
    pub fn mark_writable(&mut self) {
        self.rbuf.mark_writable();
    }
    /// Check if the consumer may read
    pub fn is_readable(&self) -> bool {
        self.rbuf.is_readable()
    }
    /// Check if the producer may draw
    pub fn is_writable(&self) -> bool {
        self.rbuf.is_writable()
    }
    pub(crate) fn writable(&self, op: &str) -> bool {
        if self.rbuf.is_writable() {
            true
        } else {
            debug!("{}: canvas is {:?}, skipped", op, self.rbuf.state());
            false
        }
    }

    /// Set every byte of the pixel data to `val`
    pub fn clear(&mut self, val: u8) {
        if self.writable("clear") {
            self.rbuf.clear(val);
        }
    }
    /// Copy the pixels of `other`, e.g. a prepared background
    pub fn copy_pixels_from(&mut self, other: &Self) {
        if self.writable("copy_pixels_from") {
            self.rbuf.data.copy_from_slice(&other.rbuf.data);
        }
    }
    /// Byte offset of pixel (x,y); coordinates outside are moved to the
    /// nearest edge pixel
    pub fn pixel_offset(&self, x: PixelIndex, y: PixelIndex) -> usize {
        let x = clip_min_max(x, 0, W as PixelIndex - 1) as usize;
        let y = clip_min_max(y, 0, H as PixelIndex - 1) as usize;
        self.rbuf.offset(x, y)
    }
    /// Color of pixel (x,y), `None` outside
    pub fn get(&self, (x, y): (usize, usize)) -> Option<F::Color> {
        if x >= W || y >= H {
            return None;
        }
        Some(F::decode(&self.rbuf[(x, y)]))
    }
    /// Store `c` at (x,y)
    ///
    /// Locations outside the canvas are ignored
    pub fn set(&mut self, (x, y): (usize, usize), c: F::Color) {
        if x >= W || y >= H || !self.writable("set") {
            return;
        }
        F::encode(&mut self.rbuf[(x, y)], c);
    }
    /// Blend `c` into pixel (x,y), no range or state check
    #[inline]
    pub(crate) fn blend_pixel(&mut self, x: usize, y: usize, c: F::Color, alpha: u8) {
        if alpha >= TRANSPARENT {
            return;
        }
        let px = &mut self.rbuf[(x, y)];
        let org = F::decode(px);
        F::encode(px, blend(&org, &c, alpha));
    }
    /// Blend `c` into pixels `x1 .. x2` of row `y`, no range or state check
    pub(crate) fn blend_hline(&mut self, x1: PixelIndex, x2: PixelIndex, y: PixelIndex, c: F::Color, alpha: u8) {
        for x in x1 .. x2 {
            self.blend_pixel(x as usize, y as usize, c, alpha);
        }
    }

    /// Pixels expanded to 8 bit RGB, row-major
    pub fn to_rgb24(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(W * H * 3);
        for px in self.rbuf.data.chunks_exact(F::BYTES_PER_PIXEL) {
            out.extend_from_slice(&F::to_rgb24(F::decode(px)).0);
        }
        out
    }
    /// Write a 24 bit BMP image to `out`
    pub fn write_bmp<Wr: std::io::Write>(&self, out: &mut Wr) -> std::io::Result<()> {
        crate::bmp::write_bmp(out, &self.to_rgb24(), W, H)
    }
    /// Save as a 24 bit BMP file
    pub fn save_bmp<P: AsRef<Path>>(&self, filename: P) -> std::io::Result<()> {
        crate::bmp::save_bmp(filename, &self.to_rgb24(), W, H)
    }
    /// Save through the `image` crate, format chosen by the file extension
    pub fn save_image<P: AsRef<Path>>(&self, filename: P) -> Result<(), image::ImageError> {
        crate::export::write_file(&self.to_rgb24(), W, H, filename)
    }
}

impl<F: PixelFormat, const W: usize, const H: usize> Default for Canvas<F, W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, const W: usize, const H: usize> Clone for Canvas<F, W, H> {
    fn clone(&self) -> Self {
        Self { rbuf: self.rbuf.clone(), line: vec![0u8; W], phantom: PhantomData }
    }
}

impl<F, const W: usize, const H: usize> std::fmt::Debug for Canvas<F, W, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &W)
            .field("height", &H)
            .field("bpp", &self.rbuf.bpp)
            .field("state", &self.rbuf.state())
            .finish()
    }
}

impl<F, const W: usize, const H: usize> PixelData for Canvas<F, W, H> {
    fn pixeldata(&self) -> &[u8] {
        &self.rbuf.data
    }
}
