//! Handoff of finished frames to a display
//!
//! A [`DisplayController`] owns a ring of canvases. The producer draws into
//! the canvas at its cursor and submits it; the consumer side sends every
//! readable canvas, in ring order, to a [`FrameSink`] and hands it back.
//!
//!     use polycanvas::{DisplayController, FrameSink, PixelLayout, Rgb565, Rgb, Point, Polygon};
//!
//!     #[derive(Default)]
//!     struct Count(usize);
//!     impl FrameSink for Count {
//!         fn send_frame(&mut self, _frame: &[u8], _layout: PixelLayout) {
//!             self.0 += 1;
//!         }
//!     }
//!
//!     let mut dc = DisplayController::<Rgb565, Count, 96, 64>::new(Count::default(), 2);
//!     assert_eq!(dc.sink().0, 1); // blank first frame
//!
//!     let mut sq = Polygon::new();
//!     sq.rectangle(Point::new(10.0, 10.0), Point::new(20.0, 20.0));
//!     if let Some(canvas) = dc.producer_canvas() {
//!         canvas.fill_polygon(&sq, Rgb::new(31, 0, 0), 0);
//!     }
//!     dc.submit();
//!     assert!(dc.poll());
//!     assert!(!dc.poll());
//!     assert_eq!(dc.sink().0, 2);
//!
use crate::canvas::Canvas;
use crate::pixfmt::PixelLayout;
use crate::PixelData;
use crate::PixelFormat;

use std::time::Duration;

use log::trace;

/// Display power state
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum PowerMode {
    On,
    Dim,
    Off,
}

/// Receiver of finished frames, usually a display driver
pub trait FrameSink {
    /// Send one frame of raw pixel bytes in `layout`
    fn send_frame(&mut self, frame: &[u8], layout: PixelLayout);
    /// Change the power state
    fn set_power(&mut self, _mode: PowerMode) {}
    /// Show frames rotated by 180 degrees, or back to normal
    fn set_rotated(&mut self, _rotated: bool) {}
}

/// Ring of canvases shared by a producer and a frame sink
pub struct DisplayController<F, S, const W: usize, const H: usize> {
    canvases: Vec<Canvas<F, W, H>>,
    sink: S,
    producer: usize,
    consumer: usize,
    rotated: bool,
    poll_delay: Duration,
}

impl<F: PixelFormat, S: FrameSink, const W: usize, const H: usize> DisplayController<F, S, W, H> {
    /// Create a ring of `n` canvases, at least one
    ///
    /// The first canvas is cleared and sent once, then the sink is powered on.
    pub fn new(mut sink: S, n: usize) -> Self {
        let n = n.max(1);
        let canvases: Vec<_> = (0 .. n).map(|_| Canvas::new()).collect();
        sink.send_frame(canvases[0].pixeldata(), F::LAYOUT);
        sink.set_power(PowerMode::On);
        trace!("display ring of {} canvases", n);
        Self {
            canvases, sink,
            producer: 0,
            consumer: 0,
            rotated: false,
            poll_delay: Duration::from_millis(2),
        }
    }
    /// Number of canvases in the ring
    pub fn len(&self) -> usize {
        self.canvases.len()
    }
    /// Always false, the ring holds at least one canvas
    pub fn is_empty(&self) -> bool {
        self.canvases.is_empty()
    }
    /// Canvas `i` of the ring
    pub fn canvas(&self, i: usize) -> Option<&Canvas<F, W, H>> {
        self.canvases.get(i)
    }
    /// The frame sink
    pub fn sink(&self) -> &S {
        &self.sink
    }
    /// The frame sink, mutable
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
    /// Set the delay between unsuccessful polls in [`service`](Self::service)
    pub fn set_poll_delay(&mut self, delay: Duration) {
        self.poll_delay = delay;
    }

    /// Canvas to draw the next frame into
    ///
    /// `None` while the consumer still holds it.
    pub fn producer_canvas(&mut self) -> Option<&mut Canvas<F, W, H>> {
        let c = &mut self.canvases[self.producer];
        if c.is_writable() {
            Some(c)
        } else {
            None
        }
    }
    /// Hand the producer canvas to the consumer and move to the next one
    ///
    /// Returns false, doing nothing, if the producer canvas is not writable.
    pub fn submit(&mut self) -> bool {
        let c = &mut self.canvases[self.producer];
        if !c.is_writable() {
            return false;
        }
        c.mark_readable();
        trace!("canvas {} submitted", self.producer);
        self.producer = (self.producer + 1) % self.canvases.len();
        true
    }
    /// Send the next frame if it is ready
    pub fn poll(&mut self) -> bool {
        let c = &mut self.canvases[self.consumer];
        if !c.is_readable() {
            return false;
        }
        self.sink.send_frame(c.pixeldata(), F::LAYOUT);
        c.mark_writable();
        trace!("canvas {} sent", self.consumer);
        self.consumer = (self.consumer + 1) % self.canvases.len();
        true
    }
    /// Poll up to `attempts` times, sleeping between misses
    ///
    /// Returns the number of frames sent.
    pub fn service(&mut self, attempts: usize) -> usize {
        let mut sent = 0;
        for _ in 0 .. attempts {
            if self.poll() {
                sent += 1;
            } else {
                std::thread::sleep(self.poll_delay);
            }
        }
        sent
    }

    /// Toggle between normal and rotated output
    pub fn rotate(&mut self) {
        self.rotated = !self.rotated;
        self.sink.set_rotated(self.rotated);
    }
    /// Check if output is rotated
    pub fn is_rotated(&self) -> bool {
        self.rotated
    }
    /// Turn the display on
    pub fn on(&mut self) {
        self.sink.set_power(PowerMode::On);
    }
    /// Dim the display
    pub fn dim(&mut self) {
        self.sink.set_power(PowerMode::Dim);
    }
    /// Turn the display off
    pub fn off(&mut self) {
        self.sink.set_power(PowerMode::Off);
    }
}
