//! Internal coordinate representation
//!
//! Coordinates are stored either as `f32` with a scale of one (default) or
//! as `i16` multiplied by 10 when the `fixed-point` feature is enabled.
//! Pixel centers sit on integer user coordinates, so pixel `i` spans
//! `[i - 0.5, i + 0.5)`.
//!
//! Everything outside this module reaches the representation only through
//! the type aliases, the constants and the conversion helpers, which lets the
//! geometry code compile unchanged under both builds.

/// Pixel row or column index; may be negative or beyond the buffer
pub type PixelIndex = i32;

/// Number of subpixel samples along one axis of a pixel
pub const SUBPIXEL_DIVISIONS: usize = 5;
/// Number of subpixel samples per pixel
pub const SUBPIXELS: usize = SUBPIXEL_DIVISIONS * SUBPIXEL_DIVISIONS;

#[cfg(not(feature = "fixed-point"))]
mod repr {
    use super::PixelIndex;
    use super::SUBPIXEL_DIVISIONS;

    /// Internal coordinate scalar
    pub type Coord = f32;
    /// Product of two coordinates
    pub type CoordSq = f32;

    /// User to internal scale factor
    pub const INTERNAL_SCALE: Coord = 1.0;
    /// Half a pixel in internal units
    pub const HALF_SCALE: Coord = 0.5;
    /// Shift applied to an edge endpoint lying exactly on a scan line
    pub const NUDGE: f32 = 0.005;
    /// Offset of the first subpixel sample from the pixel center
    pub const SAMPLE_START: Coord = -0.5 + 0.5 / SUBPIXEL_DIVISIONS as f32;
    /// Distance between subpixel samples
    pub const SAMPLE_STEP: Coord = 1.0 / SUBPIXEL_DIVISIONS as f32;

    /// Convert an internal value computed in `f32`
    #[inline]
    pub fn from_f32(v: f32) -> Coord {
        v
    }
    /// Internal coordinate of a pixel center
    #[inline]
    pub fn from_px(i: PixelIndex) -> Coord {
        i as Coord
    }
    /// Pixel containing `c`: `floor(c + 0.5)`
    #[inline]
    pub fn px_floor(c: Coord) -> PixelIndex {
        (c + HALF_SCALE).floor() as PixelIndex
    }
    /// First pixel whose left edge is at or after `c`: `ceil(c + 0.5)`
    #[inline]
    pub fn px_ceil(c: Coord) -> PixelIndex {
        (c + HALF_SCALE).ceil() as PixelIndex
    }
    /// Last pixel whose center is at or before `c`: `ceil(c - 0.5)`
    #[inline]
    pub fn px_last(c: Coord) -> PixelIndex {
        (c - HALF_SCALE).ceil() as PixelIndex
    }
    /// Pixel boundary at or below `c`
    #[inline]
    pub fn edge_floor(c: Coord) -> PixelIndex {
        c.floor() as PixelIndex
    }
    /// Pixel boundary at or above `c`
    #[inline]
    pub fn edge_ceil(c: Coord) -> PixelIndex {
        c.ceil() as PixelIndex
    }
    /// `c * n / 128`
    #[inline]
    pub fn mul_128(c: Coord, n: i16) -> Coord {
        c * f32::from(n) / 128.0
    }
    /// `c * 128 / n`, `n` must not be zero
    #[inline]
    pub fn div_128(c: Coord, n: i16) -> Coord {
        c * 128.0 / f32::from(n)
    }
}

#[cfg(feature = "fixed-point")]
mod repr {
    use super::PixelIndex;
    use super::SUBPIXEL_DIVISIONS;

    /// Internal coordinate scalar
    pub type Coord = i16;
    /// Product of two coordinates
    pub type CoordSq = i32;

    /// User to internal scale factor
    pub const INTERNAL_SCALE: Coord = 10;
    /// Half a pixel in internal units
    pub const HALF_SCALE: Coord = 5;
    /// Shift applied to an edge endpoint lying exactly on a scan line
    pub const NUDGE: f32 = 1.0;
    /// Offset of the first subpixel sample from the pixel center
    pub const SAMPLE_START: Coord = -HALF_SCALE + INTERNAL_SCALE / (2 * SUBPIXEL_DIVISIONS as Coord);
    /// Distance between subpixel samples
    pub const SAMPLE_STEP: Coord = INTERNAL_SCALE / SUBPIXEL_DIVISIONS as Coord;

    /// Convert an internal value computed in `f32`, rounding to nearest
    #[inline]
    pub fn from_f32(v: f32) -> Coord {
        v.round() as Coord
    }
    /// Internal coordinate of a pixel center
    #[inline]
    pub fn from_px(i: PixelIndex) -> Coord {
        (i * INTERNAL_SCALE as PixelIndex) as Coord
    }
    #[inline]
    fn div(c: PixelIndex) -> PixelIndex {
        c.div_euclid(INTERNAL_SCALE as PixelIndex)
    }
    /// Pixel containing `c`
    #[inline]
    pub fn px_floor(c: Coord) -> PixelIndex {
        div(c as PixelIndex + HALF_SCALE as PixelIndex)
    }
    /// First pixel whose left edge is at or after `c`
    #[inline]
    pub fn px_ceil(c: Coord) -> PixelIndex {
        div(c as PixelIndex + HALF_SCALE as PixelIndex - 1) + 1
    }
    /// Last pixel whose center is at or before `c`
    #[inline]
    pub fn px_last(c: Coord) -> PixelIndex {
        div(c as PixelIndex + HALF_SCALE as PixelIndex - 1)
    }
    /// Pixel boundary at or below `c`
    #[inline]
    pub fn edge_floor(c: Coord) -> PixelIndex {
        div(c as PixelIndex)
    }
    /// Pixel boundary at or above `c`
    #[inline]
    pub fn edge_ceil(c: Coord) -> PixelIndex {
        div(c as PixelIndex + INTERNAL_SCALE as PixelIndex - 1)
    }
    /// `c * n / 128` with an arithmetic shift
    #[inline]
    pub fn mul_128(c: Coord, n: i16) -> Coord {
        ((i32::from(c) * i32::from(n)) >> 7) as Coord
    }
    /// `c * 128 / n` through the reciprocal `16384 / n`, `n` must not be zero
    #[inline]
    pub fn div_128(c: Coord, n: i16) -> Coord {
        let inv = 16384 / i32::from(n);
        ((i32::from(c) * inv) >> 7) as Coord
    }
}

pub use self::repr::*;

/// Internal value as `f32`, still in internal units
#[inline]
pub fn to_f32(c: Coord) -> f32 {
    c as f32
}

/// Convert a user coordinate to internal units
#[inline]
pub fn from_user(v: f32) -> Coord {
    from_f32(v * INTERNAL_SCALE as f32)
}

/// Convert an internal coordinate to user units
#[inline]
pub fn to_user(c: Coord) -> f32 {
    c as f32 / INTERNAL_SCALE as f32
}
