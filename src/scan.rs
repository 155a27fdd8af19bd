//! Scanline geometry
//!
//! Every query here is built from a single primitive, [`is_crossing`]: does
//! the rightward ray from a point cross one edge? Rows are probed half a
//! pixel above and below the pixel center; the probes tell where a row
//! changes from outside to partially covered to fully covered.
//!
//! ```text
//!     polygon rows
//!       pixel_bounds()          -- rows / columns touched
//!       row_mix_and_out(iy)     -- any polygon: one mixed span
//!       row_segments(iy)        -- convex: mixed | inside | mixed
//!     mixed spans
//!       covered_areas(iy, ..)   -- N x N samples per pixel
//!         is_point_inside()     -- even-odd over all edges
//!           is_crossing()
//! ```

use crate::clip::Rectangle;
use crate::coord::*;
use crate::point::Point;
use crate::polygon::Polygon;

/// Crossing of the rightward ray from `(x, y)` with the edge `[p0, p1)`
///
/// Horizontal edges never cross. An endpoint lying exactly on the ray is
/// moved down by [`NUDGE`] so the ray never passes through a vertex.
/// Returns the x coordinate of the crossing when it lies at or right of `x`.
pub fn is_crossing(x: Coord, y: Coord, p0: Point, p1: Point) -> Option<Coord> {
    if p0.x < x && p1.x < x {
        return None;
    }
    if p0.y == p1.y {
        return None;
    }
    let yf = to_f32(y);
    let mut y0 = to_f32(p0.y);
    let mut y1 = to_f32(p1.y);
    if p0.y == y { y0 += NUDGE; }
    if p1.y == y { y1 += NUDGE; }
    if (y0 - yf) * (y1 - yf) > 0.0 {
        return None;
    }
    let (x0, x1) = (to_f32(p0.x), to_f32(p1.x));
    let cross = from_f32((x1 - x0) * (yf - y0) / (y1 - y0) + x0);
    if x <= cross {
        Some(cross)
    } else {
        None
    }
}

/// Span boundaries of one row of a convex polygon
///
/// Pixels `mix0 .. inc` and `mix1 ..= out` need coverage sampling,
/// pixels `inc .. mix1` are fully inside.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct RowSegments {
    /// First pixel that may be touched
    pub mix0: PixelIndex,
    /// First fully covered pixel
    pub inc: PixelIndex,
    /// First pixel of the right mixed span
    pub mix1: PixelIndex,
    /// Last pixel of the right mixed span
    pub out: PixelIndex,
}

impl RowSegments {
    fn mixed(mix: PixelIndex, out: PixelIndex) -> Self {
        RowSegments { mix0: mix, inc: mix, mix1: mix, out }
    }
    fn all_mixed(mix: PixelIndex, end: PixelIndex) -> Self {
        RowSegments { mix0: mix, inc: end, mix1: end, out: end }
    }
    fn split(mix0: PixelIndex, inc: PixelIndex, mix1: PixelIndex, out: PixelIndex) -> Self {
        let inc = if inc > mix1 { mix1 } else { inc };
        RowSegments { mix0, inc, mix1, out }
    }
}

// Leftmost and rightmost crossing of one probe line
#[derive(Debug,Copy,Clone)]
struct Probe {
    first: Coord,
    last: Coord,
}

impl Probe {
    fn add(&mut self, c: Coord) {
        if c < self.first { self.first = c; }
        if c > self.last { self.last = c; }
    }
    fn is_empty(&self) -> bool {
        self.first > self.last
    }
}

impl Polygon {
    /// Edges in order, including the closing edge from the last vertex back
    /// to the first
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0 .. n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Even-odd test for the point `(x, y)`
    ///
    /// Also returns the leftmost crossing found at or right of `x`, starting
    /// from `limit`. The classification of `(x', y)` is the same for every
    /// `x'` between `x` and that crossing.
    pub fn is_point_inside(&self, x: Coord, y: Coord, limit: Coord) -> (bool, Coord) {
        let mut inside = false;
        let mut first = limit;
        for (p0, p1) in self.edges() {
            if let Some(c) = is_crossing(x, y, p0, p1) {
                inside = !inside;
                if c < first {
                    first = c;
                }
            }
        }
        (inside, first)
    }

    /// Inclusive pixel rows and columns whose centers the polygon spans
    ///
    /// Pixel centers are on integer coordinates, so the box is
    /// `floor(min + 0.5) ..= ceil(max - 0.5)`; it may lie outside any buffer.
    pub fn pixel_bounds(&self) -> Rectangle<PixelIndex> {
        Rectangle {
            x1: px_floor(self.min_x),
            y1: px_floor(self.min_y),
            x2: px_last(self.max_x),
            y2: px_last(self.max_y),
        }
    }

    fn probe_row(&self, iy: PixelIndex, first: Coord, last: Coord) -> (Probe, Probe) {
        let y = from_px(iy);
        let x = self.min_x - INTERNAL_SCALE;
        let mut above = Probe { first, last };
        let mut below = above;
        for (p0, p1) in self.edges() {
            if let Some(c) = is_crossing(x, y - HALF_SCALE, p0, p1) {
                above.add(c);
            }
            if let Some(c) = is_crossing(x, y + HALF_SCALE, p0, p1) {
                below.add(c);
            }
        }
        (above, below)
    }

    /// First and one-past-last pixel of row `iy` that need sampling
    ///
    /// Works for any polygon; between the two bounds the row may enter and
    /// leave the polygon any number of times. When neither probe line
    /// crosses the polygon (a sliver within one row) the bounds cover the
    /// whole bounding box.
    pub fn row_mix_and_out(&self, iy: PixelIndex) -> (PixelIndex, PixelIndex) {
        let (above, below) = self.probe_row(iy,
                                            self.max_x - INTERNAL_SCALE,
                                            self.min_x + INTERNAL_SCALE);
        if above.is_empty() && below.is_empty() {
            return (edge_floor(self.min_x), edge_ceil(self.max_x));
        }
        let mut mix = above.first;
        let mut out = above.last;
        if below.first < mix { mix = below.first; }
        if below.last > out { out = below.last; }
        (px_floor(mix), px_ceil(out))
    }

    /// Row `iy` of a convex polygon split into mixed, inside and mixed spans
    ///
    /// The probe lines `iy - 0.5` and `iy + 0.5` each give one inside
    /// interval. The two intervals are merged according to their relative
    /// order; a row the polygon does not cross at all (a sliver within one
    /// row) becomes a single mixed span over the bounding box.
    pub fn row_segments(&self, iy: PixelIndex) -> RowSegments {
        let (top, bot) = self.probe_row(iy,
                                        self.max_x + INTERNAL_SCALE,
                                        self.min_x - INTERNAL_SCALE);
        let (m0, o0, m1, o1) = (top.first, top.last, bot.first, bot.last);

        if top.is_empty() && bot.is_empty() {
            let end = edge_ceil(self.max_x);
            return RowSegments { mix0: edge_floor(self.min_x), inc: end, mix1: end, out: end };
        }
        if top.is_empty() {
            return RowSegments::mixed(px_floor(m1), px_ceil(o1));
        }
        if bot.is_empty() {
            return RowSegments::mixed(px_floor(m0), px_ceil(o0));
        }
        if m0 < m1 {
            if o0 < m1 {
                // m0 o0 m1 o1
                RowSegments::all_mixed(px_floor(m0), px_ceil(o1))
            } else if o0 < o1 {
                // m0 m1 o0 o1
                RowSegments::split(px_floor(m0), px_ceil(m1), px_floor(o0), px_ceil(o1))
            } else {
                // m0 m1 o1 o0
                RowSegments::split(px_floor(m0), px_ceil(m1), px_floor(o1), px_ceil(o0))
            }
        } else if o1 < m0 {
            // m1 o1 m0 o0
            RowSegments::all_mixed(px_floor(m1), px_ceil(o0))
        } else if o0 < o1 {
            // m1 m0 o0 o1
            RowSegments::split(px_floor(m1), px_ceil(m0), px_floor(o0), px_ceil(o1))
        } else {
            // m1 m0 o1 o0
            RowSegments::split(px_floor(m1), px_ceil(m0), px_floor(o1), px_ceil(o0))
        }
    }

    /// Count covered subpixel samples for pixels `x_start ..= x_end` of row `iy`
    ///
    /// `areas[i]` receives the count for pixel `x_start + i`, in
    /// `0 ..= SUBPIXELS`. Sample rows are scanned left to right; while a
    /// sample lies left of the leftmost crossing seen by the last full test,
    /// the previous classification is reused.
    ///
    /// An empty range (`x_end < x_start`) leaves `areas` untouched. Pixels
    /// past the end of `areas` are not sampled.
    pub fn covered_areas(&self, iy: PixelIndex, x_start: PixelIndex, x_end: PixelIndex, areas: &mut [u8]) {
        if x_end < x_start || areas.is_empty() {
            return;
        }
        let n = ((x_end - x_start) as usize + 1).min(areas.len());
        let x_end = x_start + n as PixelIndex - 1;
        let areas = &mut areas[.. n];
        areas.iter_mut().for_each(|a| *a = 0);

        let reset = from_px(x_end) + INTERNAL_SCALE;
        let y0 = from_px(iy) + SAMPLE_START;
        for j in 0 .. SUBPIXEL_DIVISIONS {
            let y = y0 + SAMPLE_STEP * j as Coord;
            let mut first = reset;
            let mut fresh = true;
            let mut inside = false;
            for (k, area) in areas.iter_mut().enumerate() {
                let x0 = from_px(x_start + k as PixelIndex) + SAMPLE_START;
                for i in 0 .. SUBPIXEL_DIVISIONS {
                    let x = x0 + SAMPLE_STEP * i as Coord;
                    if x > first {
                        first = reset;
                        fresh = true;
                    }
                    if fresh {
                        let (v, f) = self.is_point_inside(x, y, first);
                        inside = v;
                        first = f;
                        fresh = false;
                    }
                    if inside {
                        *area += 1;
                    }
                }
            }
        }
    }
}
