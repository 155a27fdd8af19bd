//! Polygon rendering onto a [`Canvas`]
//!
//! Rows of a polygon are split into spans. Spans fully inside the polygon
//! are blended at the requested alpha; spans touching an edge are sampled
//! with [`Polygon::covered_areas`] and blended at an alpha scaled by the
//! covered fraction of each pixel.

use crate::canvas::Canvas;
use crate::clip::clip_min_max;
use crate::coord::PixelIndex;
use crate::math::{coverage_alpha, TRANSPARENT};
use crate::picture::{ColoredPolygon, VectorPicture};
use crate::point::Point;
use crate::polygon::Polygon;
use crate::stroke::{Closing, StrokeOutline};
use crate::PixelFormat;
use crate::VertexSource;

impl<F: PixelFormat, const W: usize, const H: usize> Canvas<F, W, H> {
    /// Fill `poly` with `color` at `alpha`
    ///
    /// Polygons with fewer than 3 vertices are ignored. The filled region is
    /// the even-odd interior, so self-intersecting outlines leave holes.
    ///
    ///     use polycanvas::{Canvas, Gray, Gray8, Point, Polygon};
    ///
    ///     let mut canvas = Canvas::<Gray8, 8, 8>::new();
    ///     let mut sq = Polygon::new();
    ///     sq.rectangle(Point::new(1.5, 1.5), Point::new(5.5, 5.5));
    ///     canvas.fill_polygon(&sq, Gray(200), 0);
    ///
    ///     assert_eq!(canvas.get((2,2)), Some(Gray(200)));
    ///     assert_eq!(canvas.get((5,5)), Some(Gray(200)));
    ///     assert_eq!(canvas.get((6,5)), Some(Gray(0)));
    ///
    pub fn fill_polygon(&mut self, poly: &Polygon, color: F::Color, alpha: u8) {
        if !self.writable("fill_polygon") {
            return;
        }
        self.fill(poly, color, alpha);
    }

    // Fill without the state check
    fn fill(&mut self, poly: &Polygon, color: F::Color, alpha: u8) {
        self.fill_rows(poly, color, alpha, poly.is_convex());
    }

    fn fill_rows(&mut self, poly: &Polygon, color: F::Color, alpha: u8, convex: bool) {
        if poly.len() < 3 || alpha >= TRANSPARENT {
            return;
        }
        let b = poly.pixel_bounds();
        let (xmax, ymax) = (W as PixelIndex - 1, H as PixelIndex - 1);
        if b.x2 < 0 || b.x1 > xmax || b.y2 < 0 || b.y1 > ymax {
            return;
        }
        let y1 = clip_min_max(b.y1, 0, ymax);
        let y2 = clip_min_max(b.y2, 0, ymax);
        if convex {
            self.fill_convex(poly, y1, y2, color, alpha);
        } else {
            self.fill_nonconvex(poly, y1, y2, color, alpha);
        }
    }

    fn fill_convex(&mut self, poly: &Polygon, y1: PixelIndex, y2: PixelIndex, color: F::Color, alpha: u8) {
        let xmax = W as PixelIndex - 1;
        for iy in y1 ..= y2 {
            let s = poly.row_segments(iy);
            let mix0 = clip_min_max(s.mix0, 0, xmax);
            let inc  = clip_min_max(s.inc,  0, xmax);
            let mix1 = clip_min_max(s.mix1, 0, xmax);
            let out  = clip_min_max(s.out,  0, xmax);
            self.blend_covered(poly, iy, mix0, inc - 1, color, alpha);
            self.blend_hline(inc, mix1, iy, color, alpha);
            self.blend_covered(poly, iy, mix1, out, color, alpha);
        }
    }

    fn fill_nonconvex(&mut self, poly: &Polygon, y1: PixelIndex, y2: PixelIndex, color: F::Color, alpha: u8) {
        let xmax = W as PixelIndex - 1;
        for iy in y1 ..= y2 {
            let (mix, out) = poly.row_mix_and_out(iy);
            let mix = clip_min_max(mix, 0, xmax);
            let out = clip_min_max(out, 0, xmax);
            self.blend_covered(poly, iy, mix, out, color, alpha);
        }
    }

    // Sample pixels x1 ..= x2 of row iy and blend by coverage
    fn blend_covered(&mut self, poly: &Polygon, iy: PixelIndex, x1: PixelIndex, x2: PixelIndex,
                     color: F::Color, alpha: u8) {
        if x2 < x1 {
            return;
        }
        poly.covered_areas(iy, x1, x2, &mut self.line);
        for x in x1 ..= x2 {
            let count = self.line[(x - x1) as usize];
            let a = coverage_alpha(alpha, count);
            self.blend_pixel(x as usize, iy as usize, color, a);
        }
    }

    /// Blend the single pixel containing `p`
    ///
    /// Points outside the canvas are ignored.
    pub fn draw_dot(&mut self, p: Point, color: F::Color, alpha: u8) {
        if !self.writable("draw_dot") {
            return;
        }
        let x = (p.x() + 0.5).floor();
        let y = (p.y() + 0.5).floor();
        if x < 0.0 || y < 0.0 || x >= W as f32 || y >= H as f32 {
            return;
        }
        self.blend_pixel(x as usize, y as usize, color, alpha);
    }

    /// Draw a straight line of `weight` from `p0` to `p1`, with butt ends
    pub fn draw_line(&mut self, p0: Point, p1: Point, weight: f32, color: F::Color, alpha: u8) {
        if !self.writable("draw_line") {
            return;
        }
        self.line_segment(p0, p1, weight, color, alpha);
    }

    fn line_segment(&mut self, p0: Point, p1: Point, weight: f32, color: F::Color, alpha: u8) {
        if p0 == p1 {
            return;
        }
        let mut quad = Polygon::new();
        quad.line_segment(p0, p1, weight);
        self.fill(&quad, color, alpha);
    }

    /// Draw the closed outline of `poly`, each edge as a separate line
    ///
    /// Fast, but corners show notches and overlaps.
    pub fn draw_polygon(&mut self, poly: &Polygon, weight: f32, color: F::Color, alpha: u8) {
        self.draw_segments(poly, weight, color, alpha, Closing::Close);
    }

    /// Draw each edge of `path` as a separate line
    ///
    /// The closing edge is added for closed paths of 3 or more vertices.
    pub fn draw_segments<V: VertexSource>(&mut self, path: &V, weight: f32, color: F::Color,
                                          alpha: u8, closing: Closing) {
        if !self.writable("draw_segments") {
            return;
        }
        let v = path.vertices();
        for w in v.windows(2) {
            self.line_segment(w[0], w[1], weight, color, alpha);
        }
        if closing == Closing::Close && v.len() >= 3 {
            self.line_segment(v[v.len() - 1], v[0], weight, color, alpha);
        }
    }

    /// Draw the closed outline of `poly` with mitered corners
    pub fn draw_polygon_hq(&mut self, poly: &Polygon, weight: f32, color: F::Color, alpha: u8) {
        self.draw_segments_hq(poly, weight, color, alpha, Closing::Close);
    }

    /// Draw `path` as one outline with mitered corners
    ///
    /// The outline is filled as a single polygon, so semi-transparent
    /// strokes do not darken at the joins. Two vertex paths are drawn as a
    /// plain line, shorter paths are ignored.
    pub fn draw_segments_hq<V: VertexSource>(&mut self, path: &V, weight: f32, color: F::Color,
                                             alpha: u8, closing: Closing) {
        if !self.writable("draw_segments_hq") {
            return;
        }
        let v = path.vertices();
        match v.len() {
            0 | 1 => {},
            2 => self.line_segment(v[0], v[1], weight, color, alpha),
            _ => {
                let outline = StrokeOutline::new(weight).outline(path, closing);
                self.fill_rows(&outline, color, alpha, false);
            }
        }
    }

    /// Fill a polygon with its own color and alpha
    pub fn fill_colored_polygon(&mut self, poly: &ColoredPolygon<F::Color>) {
        self.fill_polygon(&poly.polygon, poly.color, poly.alpha);
    }

    /// Stroke a polygon in its own color and alpha
    pub fn draw_colored_polygon(&mut self, poly: &ColoredPolygon<F::Color>, weight: f32) {
        self.draw_polygon_hq(&poly.polygon, weight, poly.color, poly.alpha);
    }

    /// Fill every polygon of `pic` moved by `offset`, first to last
    pub fn draw_picture(&mut self, pic: &VectorPicture<F::Color>, offset: Point) {
        if !self.writable("draw_picture") {
            return;
        }
        for p in pic {
            let poly = p.polygon.clone() + offset;
            self.fill(&poly, p.color, p.alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn convex_and_general_paths_agree() {
        let mut tri = Polygon::new();
        tri.add_xy(3.2, 2.7).add_xy(27.9, 9.1).add_xy(11.4, 24.6);
        assert!(tri.is_convex());

        let mut a = Canvas::<Gray8, 32, 32>::new();
        a.fill_polygon(&tri, Gray(255), 0);

        // Same outline, with a collinear extra vertex fed first so the
        // polygon never becomes convex
        let mut b = Canvas::<Gray8, 32, 32>::new();
        let mut slow = Polygon::new();
        slow.add_xy(3.2, 2.7).add_xy(3.2, 2.7).add_xy(27.9, 9.1).add_xy(11.4, 24.6);
        assert!(!slow.is_convex());
        b.fill_polygon(&slow, Gray(255), 0);

        assert_eq!(a.pixeldata(), b.pixeldata());
    }

    #[test]
    fn partially_visible_polygon() {
        let mut c = Canvas::<Gray8, 10, 10>::new();
        let mut sq = Polygon::new();
        sq.rectangle(Point::new(-20.5, 4.5), Point::new(30.5, 30.5));
        c.fill_polygon(&sq, Gray(90), 0);
        for y in 0 .. 10 {
            for x in 0 .. 10 {
                let want = if y >= 5 { 90 } else { 0 };
                assert_eq!(c.get((x, y)), Some(Gray(want)), "({},{})", x, y);
            }
        }
        let mut far = Polygon::new();
        far.rectangle(Point::new(50.0, 50.0), Point::new(60.0, 60.0));
        let before = c.pixeldata().to_vec();
        c.fill_polygon(&far, Gray(1), 0);
        assert_eq!(c.pixeldata(), &before[..]);
    }

    #[test]
    fn dots_and_transparent_draws() {
        let mut c = Canvas::<Gray8, 4, 4>::new();
        c.draw_dot(Point::new(1.4, 2.6), Gray(50), 0);
        assert_eq!(c.get((1, 3)), Some(Gray(50)));
        c.draw_dot(Point::new(-3.0, 1.0), Gray(50), 0);
        c.draw_dot(Point::new(4.0, 1.0), Gray(50), 0);
        c.draw_line(Point::new(0.0, 0.0), Point::new(3.0, 3.0), 2.0, Gray(50), 128);
        assert_eq!(c.pixeldata().iter().filter(|&&v| v != 0).count(), 1);
    }
}
