use crate::coord::SUBPIXELS;
use crate::Color;

/// Fully opaque alpha
pub const OPAQUE: u8 = 0;
/// Fully transparent alpha
pub const TRANSPARENT: u8 = 128;

/// Blend one channel
///
/// `out = ((alpha * (original - overlay)) >> 7) + overlay`
///
/// Alpha is inverted: 0 gives `overlay`, 128 gives `original`. Larger
/// values are treated as 128.
pub fn blend_channel(original: u8, overlay: u8, alpha: u8) -> u8 {
    let a = i16::from(alpha.min(TRANSPARENT));
    let d = i16::from(original) - i16::from(overlay);
    (((a * d) >> 7) + i16::from(overlay)) as u8
}

/// Blend `overlay` onto `original` channel by channel
///
///     use polycanvas::{blend, Rgb};
///
///     let bg = Rgb::new(10, 20, 30);
///     let fg = Rgb::new(200, 100, 0);
///     assert_eq!(blend(&bg, &fg, 0), fg);
///     assert_eq!(blend(&bg, &fg, 128), bg);
///     assert_eq!(blend(&bg, &fg, 64), Rgb::new(105, 60, 15));
///
pub fn blend<C: Color>(original: &C, overlay: &C, alpha: u8) -> C {
    let mut out = *overlay;
    for (o, &p) in out.channels_mut().iter_mut().zip(original.channels()) {
        *o = blend_channel(p, *o, alpha);
    }
    out
}

/// Alpha for a pixel with `count` of [`SUBPIXELS`] samples covered
///
/// `128 - (128 - alpha) * count / SUBPIXELS`: a fully covered pixel gets
/// `alpha`, an uncovered one is transparent.
///
///     use polycanvas::{coverage_alpha, SUBPIXELS};
///
///     assert_eq!(coverage_alpha(0, SUBPIXELS as u8), 0);
///     assert_eq!(coverage_alpha(0, 0), 128);
///     assert_eq!(coverage_alpha(64, 0), 128);
///
pub fn coverage_alpha(alpha: u8, count: u8) -> u8 {
    let alpha = i32::from(alpha.min(TRANSPARENT));
    (128 - (128 - alpha) * i32::from(count) / SUBPIXELS as i32) as u8
}
