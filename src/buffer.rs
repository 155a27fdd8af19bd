//! Rendering buffer

/// Who may touch a buffer
///
/// A producer draws only into `Writable` buffers and hands them over with
/// [`RenderingBuffer::mark_readable`]. A consumer reads only `Readable`
/// buffers and returns them with [`RenderingBuffer::mark_writable`].
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum BufferState {
    /// Consumer may read, producer must not write
    Readable,
    /// Producer may write, consumer must not read
    Writable,
}

impl Default for BufferState {
    fn default() -> Self {
        BufferState::Writable
    }
}

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format)
#[derive(Debug,Default,Clone)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per pixel
    pub bpp: usize,
    state: BufferState,
}

impl RenderingBuffer {
    /// Create a new buffer of width, height, and bpp
    ///
    /// Data is zeroed and the buffer starts out writable
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        RenderingBuffer {
            width, height, bpp, data: vec![0u8; width * height * bpp],
            state: BufferState::Writable,
        }
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Check for a zero sized buffer
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Byte offset of pixel (x,y), no range check
    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * self.bpp
    }
    /// Bytes of row `i`
    pub fn row(&self, i: usize) -> &[u8] {
        let n = self.width * self.bpp;
        &self.data[i * n .. (i + 1) * n]
    }
    /// Set every byte to `val`
    pub fn clear(&mut self, val: u8) {
        self.data.iter_mut().for_each(|v| *v = val);
    }
    /// Current state
    pub fn state(&self) -> BufferState {
        self.state
    }
    /// Hand the buffer to the consumer
    pub fn mark_readable(&mut self) {
        self.state = BufferState::Readable;
    }
    /// Hand the buffer back to the producer
    pub fn mark_writable(&mut self) {
        self.state = BufferState::Writable;
    }
    /// Check if the consumer may read
    pub fn is_readable(&self) -> bool {
        self.state == BufferState::Readable
    }
    /// Check if the producer may write
    pub fn is_writable(&self) -> bool {
        self.state == BufferState::Writable
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = self.offset(index.0, index.1);
        &self.data[i .. i + self.bpp]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = self.offset(index.0, index.1);
        let n = self.bpp;
        &mut self.data[i .. i + n]
    }
}
