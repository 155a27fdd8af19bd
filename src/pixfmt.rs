//! Pixel Formats
//!
//! Each format is a zero sized type implementing [`PixelFormat`]; the
//! canvas is generic over it so encode and decode are resolved at compile
//! time.

use crate::color::{Gray, Rgb};
use crate::PixelFormat;

/// Byte layout tag handed to a display with each frame
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum PixelLayout {
    /// 16 bits, `RRRRRGGG GGGBBBBB`, first byte high
    Rgb565,
    /// 24 bits, red first
    Rgb888,
    /// 8 bit intensity
    Gray8,
}

/// 16 bit color: 5 bits red, 6 bits green, 5 bits blue
///
/// Channels of [`Rgb`] are 0..=31, 0..=63, 0..=31.
///
///     use polycanvas::{PixelFormat, Rgb, Rgb565};
///
///     let mut px = [0u8; 2];
///     Rgb565::encode(&mut px, Rgb::new(31, 0, 31));
///     assert_eq!(px, [0b1111_1000, 0b0001_1111]);
///     assert_eq!(Rgb565::decode(&px), Rgb::new(31, 0, 31));
///     assert_eq!(Rgb565::to_rgb24(Rgb::new(31, 63, 0)), Rgb::new(255, 255, 0));
///
#[derive(Debug,Copy,Clone,Default)]
pub struct Rgb565;

impl PixelFormat for Rgb565 {
    const BYTES_PER_PIXEL: usize = 2;
    const LAYOUT: PixelLayout = PixelLayout::Rgb565;
    type Color = Rgb;
    fn decode(data: &[u8]) -> Rgb {
        let (b0, b1) = (data[0], data[1]);
        Rgb::new(b0 >> 3, ((b0 & 0x7) << 3) | (b1 >> 5), b1 & 0x1f)
    }
    fn encode(data: &mut [u8], c: Rgb) {
        let (r, g, b) = (c.r() & 0x1f, c.g() & 0x3f, c.b() & 0x1f);
        data[0] = (r << 3) | (g >> 3);
        data[1] = ((g & 0x7) << 5) | b;
    }
    fn to_rgb24(c: Rgb) -> Rgb {
        let (r, g, b) = (c.r() & 0x1f, c.g() & 0x3f, c.b() & 0x1f);
        Rgb::new((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
    }
}

/// 24 bit color, one byte per channel
#[derive(Debug,Copy,Clone,Default)]
pub struct Rgb888;

impl PixelFormat for Rgb888 {
    const BYTES_PER_PIXEL: usize = 3;
    const LAYOUT: PixelLayout = PixelLayout::Rgb888;
    type Color = Rgb;
    fn decode(data: &[u8]) -> Rgb {
        Rgb::new(data[0], data[1], data[2])
    }
    fn encode(data: &mut [u8], c: Rgb) {
        data[.. 3].copy_from_slice(&c.0);
    }
    fn to_rgb24(c: Rgb) -> Rgb {
        c
    }
}

/// 8 bit gray scale
#[derive(Debug,Copy,Clone,Default)]
pub struct Gray8;

impl PixelFormat for Gray8 {
    const BYTES_PER_PIXEL: usize = 1;
    const LAYOUT: PixelLayout = PixelLayout::Gray8;
    type Color = Gray;
    fn decode(data: &[u8]) -> Gray {
        Gray(data[0])
    }
    fn encode(data: &mut [u8], c: Gray) {
        data[0] = c.0;
    }
    fn to_rgb24(c: Gray) -> Rgb {
        c.into()
    }
}
