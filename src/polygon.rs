//! Polygon storage with incremental convexity tracking

use crate::clip::Rectangle;
use crate::coord::*;
use crate::point::Point;
use crate::VertexSource;

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Number of vertices used by [`Polygon::circle`]
pub const CIRCLE_VERTICES: usize = 24;

/// Closed polygon
///
/// Vertices are kept in insertion order; the last vertex connects back to
/// the first. The bounding box is kept exact on every insertion and the
/// polygon classifies itself as convex or not while it is built.
///
///     use polycanvas::{Point, Polygon};
///
///     let mut p = Polygon::new();
///     p.add_xy(0.0, 0.0).add_xy(10.0, 0.0).add_xy(10.0, 10.0);
///     assert!(p.is_convex());
///     p.add_xy(8.0, 2.0); // reflex vertex
///     assert!(!p.is_convex());
///     p.add_xy(0.0, 10.0);
///     assert!(!p.is_convex());
///
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Polygon {
    pub(crate) vertices: Vec<Point>,
    pub(crate) min_x: Coord,
    pub(crate) max_x: Coord,
    pub(crate) min_y: Coord,
    pub(crate) max_y: Coord,
    convex: bool,
    /// Turn direction fixed by the first three vertices: -1, 0 or +1
    turn: i8,
}

fn sign(v: CoordSq) -> i8 {
    if v > 0 as CoordSq {
        1
    } else if v < 0 as CoordSq {
        -1
    } else {
        0
    }
}

impl Polygon {
    /// Create an empty polygon
    pub fn new() -> Self {
        Self::default()
    }
    /// Remove all vertices
    pub fn clear(&mut self) -> &mut Self {
        self.vertices.clear();
        self.min_x = 0 as Coord;
        self.max_x = 0 as Coord;
        self.min_y = 0 as Coord;
        self.max_y = 0 as Coord;
        self.convex = false;
        self.turn = 0;
        self
    }
    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    /// Check if there are no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// Check if the polygon, as built so far, turns one way at every vertex
    ///
    /// Collinear first three vertices classify the polygon as not convex.
    /// Once false, stays false until [`Polygon::clear`].
    pub fn is_convex(&self) -> bool {
        self.convex
    }
    /// Vertex `i`, or the last vertex when `i` is past the end
    pub fn point(&self, i: usize) -> Option<Point> {
        self.vertices.get(i).or_else(|| self.vertices.last()).copied()
    }
    /// Bounding box in user coordinates
    pub fn bounds(&self) -> Rectangle<f32> {
        Rectangle::new(to_user(self.min_x), to_user(self.min_y),
                       to_user(self.max_x), to_user(self.max_y))
    }

    /// Append a vertex
    ///
    /// Updates the bounding box and re-checks only the vertex triples touched
    /// by the new vertex: `(n-3, n-2, n-1)`, `(n-2, n-1, 0)` and `(n-1, 0, 1)`.
    pub fn add_point(&mut self, p: Point) -> &mut Self {
        if self.vertices.is_empty() {
            self.min_x = p.x;
            self.max_x = p.x;
            self.min_y = p.y;
            self.max_y = p.y;
        } else {
            if p.x < self.min_x { self.min_x = p.x; }
            if p.x > self.max_x { self.max_x = p.x; }
            if p.y < self.min_y { self.min_y = p.y; }
            if p.y > self.max_y { self.max_y = p.y; }
        }
        self.vertices.push(p);

        let n = self.vertices.len();
        if n == 3 {
            self.turn = sign(self.turn_at(0, 1, 2));
            self.convex = self.turn != 0;
        } else if n > 3 {
            for &(i0, i1, i2) in &[(n - 3, n - 2, n - 1), (n - 2, n - 1, 0), (n - 1, 0, 1)] {
                if !self.convex {
                    break;
                }
                self.check_convex(i0, i1, i2);
            }
        }
        self
    }
    /// Append a vertex given in user coordinates
    pub fn add_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.add_point(Point::new(x, y))
    }
    fn turn_at(&self, i0: usize, i1: usize, i2: usize) -> CoordSq {
        let v0 = self.vertices[i1] - self.vertices[i0];
        let v1 = self.vertices[i2] - self.vertices[i1];
        v0.cross(v1)
    }
    // Collinear triples after the third vertex leave the flag alone
    fn check_convex(&mut self, i0: usize, i1: usize, i2: usize) {
        let s = sign(self.turn_at(i0, i1, i2));
        if s != 0 && s != self.turn {
            self.turn = 0;
            self.convex = false;
        }
    }
    /// Append all vertices of `other` in order
    pub fn concat(&mut self, other: &Polygon) -> &mut Self {
        for &p in &other.vertices {
            self.add_point(p);
        }
        self
    }
    /// Append all vertices of `other` in reverse order
    pub fn concat_reversed(&mut self, other: &Polygon) -> &mut Self {
        for &p in other.vertices.iter().rev() {
            self.add_point(p);
        }
        self
    }

    /// Replace contents with the axis aligned rectangle spanned by `p0` and `p1`
    pub fn rectangle(&mut self, p0: Point, p1: Point) -> &mut Self {
        self.clear();
        self.add_point(p0)
            .add_point(Point::raw(p1.x, p0.y))
            .add_point(p1)
            .add_point(Point::raw(p0.x, p1.y))
    }
    /// Replace contents with the quad covering the segment `p0`-`p1` with
    /// thickness `weight`
    pub fn line_segment(&mut self, p0: Point, p1: Point, weight: f32) -> &mut Self {
        let mut d = p1 - p0;
        d.normalize();
        let n = d.perp() * (weight * 0.5);
        self.clear();
        self.add_point(p0 + n)
            .add_point(p1 + n)
            .add_point(p1 - n)
            .add_point(p0 - n)
    }
    /// Replace contents with a regular 24-gon inscribed in the circle
    pub fn circle(&mut self, center: Point, radius: f32) -> &mut Self {
        self.clear();
        let step = 360.0 / CIRCLE_VERTICES as f32;
        for k in 0 .. CIRCLE_VERTICES {
            let a = (k as f32 * step).to_radians();
            let (s, c) = a.sin_cos();
            self.add_point(center + Point::new(radius * c, radius * s));
        }
        self
    }

    /// Rotate about the origin by `deg` degrees
    pub fn rotate_mut(&mut self, deg: f32) -> &mut Self {
        let (s, c) = deg.to_radians().sin_cos();
        self.rotate_cos_sin_mut(c, s)
    }
    /// Rotate about `center` by `deg` degrees
    pub fn rotate_about_mut(&mut self, deg: f32, center: Point) -> &mut Self {
        *self -= center;
        self.rotate_mut(deg);
        *self += center;
        self
    }
    /// Rotate about the origin with a precomputed cosine and sine
    ///
    /// The bounding box is recomputed, convexity is unchanged.
    pub fn rotate_cos_sin_mut(&mut self, cos_t: f32, sin_t: f32) -> &mut Self {
        for v in self.vertices.iter_mut() {
            let (x, y) = (to_f32(v.x), to_f32(v.y));
            *v = Point::raw_f32(cos_t * x - sin_t * y, sin_t * x + cos_t * y);
        }
        self.update_bounds();
        self
    }
    /// Copy rotated about the origin by `deg` degrees
    pub fn rotate(&self, deg: f32) -> Polygon {
        let mut p = self.clone();
        p.rotate_mut(deg);
        p
    }
    /// Copy rotated about `center` by `deg` degrees
    pub fn rotate_about(&self, deg: f32, center: Point) -> Polygon {
        let mut p = self.clone();
        p.rotate_about_mut(deg, center);
        p
    }
    fn update_bounds(&mut self) {
        let first = match self.vertices.first() {
            Some(p) => *p,
            None => return,
        };
        let (mut x1, mut x2, mut y1, mut y2) = (first.x, first.x, first.y, first.y);
        for p in &self.vertices[1..] {
            if p.x < x1 { x1 = p.x; }
            if p.x > x2 { x2 = p.x; }
            if p.y < y1 { y1 = p.y; }
            if p.y > y2 { y2 = p.y; }
        }
        self.min_x = x1;
        self.max_x = x2;
        self.min_y = y1;
        self.max_y = y2;
    }
}

impl VertexSource for Polygon {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

impl std::iter::FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut p = Polygon::new();
        p.extend(iter);
        p
    }
}
impl Extend<Point> for Polygon {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for v in iter {
            self.add_point(v);
        }
    }
}

impl AddAssign<Point> for Polygon {
    fn add_assign(&mut self, p: Point) {
        for v in self.vertices.iter_mut() {
            *v += p;
        }
        self.min_x += p.x;
        self.max_x += p.x;
        self.min_y += p.y;
        self.max_y += p.y;
    }
}
impl SubAssign<Point> for Polygon {
    fn sub_assign(&mut self, p: Point) {
        for v in self.vertices.iter_mut() {
            *v -= p;
        }
        self.min_x -= p.x;
        self.max_x -= p.x;
        self.min_y -= p.y;
        self.max_y -= p.y;
    }
}
impl MulAssign<f32> for Polygon {
    /// Scale about the origin; a negative factor swaps the box extremes
    fn mul_assign(&mut self, f: f32) {
        for v in self.vertices.iter_mut() {
            *v *= f;
        }
        let lo = Point::raw(self.min_x, self.min_y) * f;
        let hi = Point::raw(self.max_x, self.max_y) * f;
        if f < 0.0 {
            self.min_x = hi.x; self.max_x = lo.x;
            self.min_y = hi.y; self.max_y = lo.y;
        } else {
            self.min_x = lo.x; self.max_x = hi.x;
            self.min_y = lo.y; self.max_y = hi.y;
        }
    }
}
impl DivAssign<f32> for Polygon {
    fn div_assign(&mut self, f: f32) {
        *self *= 1.0 / f;
    }
}

impl Add<Point> for Polygon {
    type Output = Polygon;
    fn add(mut self, p: Point) -> Polygon {
        self += p;
        self
    }
}
impl Sub<Point> for Polygon {
    type Output = Polygon;
    fn sub(mut self, p: Point) -> Polygon {
        self -= p;
        self
    }
}
impl Mul<f32> for Polygon {
    type Output = Polygon;
    fn mul(mut self, f: f32) -> Polygon {
        self *= f;
        self
    }
}
impl Div<f32> for Polygon {
    type Output = Polygon;
    fn div(mut self, f: f32) -> Polygon {
        self /= f;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        let mut p = Polygon::new();
        p.rectangle(Point::new(1.0, 2.0), Point::new(5.0, 8.0));
        p
    }

    #[test]
    fn triangle_orientation() {
        let mut ccw = Polygon::new();
        ccw.add_xy(0.0, 0.0).add_xy(4.0, 0.0).add_xy(0.0, 4.0);
        assert!(ccw.is_convex());
        assert_eq!(ccw.turn, 1);

        let mut cw = Polygon::new();
        cw.add_xy(0.0, 0.0).add_xy(0.0, 4.0).add_xy(4.0, 0.0);
        assert!(cw.is_convex());
        assert_eq!(cw.turn, -1);

        let mut line = Polygon::new();
        line.add_xy(0.0, 0.0).add_xy(1.0, 1.0).add_xy(2.0, 2.0);
        assert!(!line.is_convex());
        line.add_xy(0.0, 5.0);
        assert!(!line.is_convex());
    }

    #[test]
    fn wrap_around_breaks_convexity() {
        // Only the turn at vertex 0 reverses
        let mut p = Polygon::new();
        p.add_xy(0.0, 0.0).add_xy(10.0, 0.0).add_xy(10.0, 10.0);
        assert!(p.is_convex());
        p.add_xy(-5.0, 10.0);
        assert!(p.is_convex());
        p.add_xy(-4.0, -6.0);
        assert!(!p.is_convex());
    }

    #[test]
    fn collinear_later_vertex_keeps_convexity() {
        let mut p = Polygon::new();
        p.add_xy(0.0, 0.0).add_xy(4.0, 0.0).add_xy(4.0, 4.0);
        p.add_xy(4.0, 8.0);
        assert!(p.is_convex());
    }

    #[test]
    fn shapes() {
        let r = square();
        assert_eq!(r.len(), 4);
        assert!(r.is_convex());
        assert_eq!(r.bounds(), Rectangle::new(1.0, 2.0, 5.0, 8.0));

        let mut l = Polygon::new();
        l.line_segment(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 2.0);
        assert!(l.is_convex());
        assert_eq!(l.bounds(), Rectangle::new(0.0, -1.0, 10.0, 1.0));

        let mut c = Polygon::new();
        c.circle(Point::new(20.0, 20.0), 10.0);
        assert_eq!(c.len(), CIRCLE_VERTICES);
        assert!(c.is_convex());
        let b = c.bounds();
        assert!((b.x1 - 10.0).abs() < 0.2 && (b.x2 - 30.0).abs() < 0.2);
        assert!((b.y1 - 10.0).abs() < 0.2 && (b.y2 - 30.0).abs() < 0.2);
    }

    #[test]
    fn point_index_clamps() {
        let r = square();
        assert_eq!(r.point(0), Some(Point::new(1.0, 2.0)));
        assert_eq!(r.point(100), r.point(3));
        assert_eq!(Polygon::new().point(0), None);
    }

    #[test]
    fn transforms_keep_bounds() {
        let r = square() + Point::new(1.0, -2.0);
        assert_eq!(r.bounds(), Rectangle::new(2.0, 0.0, 6.0, 6.0));
        let r = r * -2.0;
        assert_eq!(r.bounds(), Rectangle::new(-12.0, -12.0, -4.0, 0.0));
        let r = r / -2.0;
        assert_eq!(r.bounds(), Rectangle::new(2.0, 0.0, 6.0, 6.0));
        let r = r - Point::new(1.0, -2.0);
        assert_eq!(r, square());
    }

    #[test]
    fn rotation_updates_bounds() {
        let r = square().rotate_about(90.0, Point::new(1.0, 2.0));
        let b = r.bounds();
        assert!((b.x1 - -5.0).abs() < 0.11);
        assert!((b.x2 - 1.0).abs() < 0.11);
        assert!((b.y1 - 2.0).abs() < 0.11);
        assert!((b.y2 - 6.0).abs() < 0.11);
        assert!(r.is_convex());
    }

    #[test]
    fn concatenation() {
        let mut a = Polygon::new();
        a.add_xy(0.0, 0.0).add_xy(4.0, 0.0);
        let mut b = Polygon::new();
        b.add_xy(0.0, 4.0).add_xy(4.0, 4.0);
        let mut fwd = a.clone();
        fwd.concat(&b);
        // 0,0 -> 4,0 -> 0,4 -> 4,4 crosses itself
        assert!(!fwd.is_convex());
        let mut rev = a.clone();
        rev.concat_reversed(&b);
        assert!(rev.is_convex());
        assert_eq!(rev.point(2), Some(Point::new(4.0, 4.0)));
        let collected: Polygon = rev.vertices.iter().copied().collect();
        assert_eq!(collected, rev);
    }
}
