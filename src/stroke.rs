//! Path Stroking
//!
//! Builds the outline of a wide polyline as a single polygon. Each vertex
//! gets a miter join; open paths get butt ends.
//!
//! # Example
//!
//!     use polycanvas::{Point, Polygon, StrokeOutline, Closing};
//!
//!     // Input Path
//!     let path : Polygon = vec![Point::new(10.0, 10.0),
//!                               Point::new(50.0, 10.0),
//!                               Point::new(50.0, 40.0)].into_iter().collect();
//!     // Stroke
//!     let mut stroke = StrokeOutline::new(4.0);
//!     stroke.miter_limit(2.0);
//!     let outline = stroke.outline(&path, Closing::Open);
//!
//!     // Right chain then reversed left chain, 3 points each
//!     assert_eq!(outline.len(), 6);
//!     assert_eq!(outline.point(0), Some(Point::new(10.0, 12.0)));
//!     assert_eq!(outline.point(5), Some(Point::new(10.0, 8.0)));
//!
//!     // Inner corner of the miter
//!     let p = outline.point(1).unwrap();
//!     assert!((p.x() - 48.0).abs() < 1e-3 && (p.y() - 12.0).abs() < 1e-3);
//!

use crate::point::Point;
use crate::polygon::Polygon;
use crate::VertexSource;

use log::trace;

/// Treatment of the last vertex of a path
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Closing {
    /// Path ends at the last vertex
    Open,
    /// Path returns from the last vertex to the first
    Close,
}

/// Miter-joined stroke of a polyline
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct StrokeOutline {
    /// Full width of the stroke
    width: f32,
    /// Maximum length of a miter in half widths, 4.0
    miter_limit: f32,
}

impl Default for StrokeOutline {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl StrokeOutline {
    /// Create a new stroke of `width`
    pub fn new(width: f32) -> Self {
        Self { width, miter_limit: 4.0 }
    }
    /// Set the Stroke Width
    pub fn width(&mut self, width: f32) {
        self.width = width;
    }
    /// Set the Miter Limit, in multiples of half the width
    pub fn miter_limit(&mut self, miter_limit: f32) {
        self.miter_limit = miter_limit;
    }

    /// Outline polygon of `path`
    ///
    /// Paths with fewer than 2 vertices give an empty polygon. A closed
    /// path yields two loops joined by a bridge edge and must be filled
    /// even-odd. Two vertex paths are always treated as open.
    pub fn outline<V: VertexSource>(&self, path: &V, closing: Closing) -> Polygon {
        let v = path.vertices();
        let n = v.len();
        let mut right = Polygon::new();
        let mut left = Polygon::new();
        if n < 2 {
            return right;
        }
        if closing == Closing::Close && n > 2 {
            for k in 0 ..= n {
                let (r, l) = self.join(v[(k + n - 1) % n], v[k % n], v[(k + 1) % n]);
                right.add_point(r);
                left.add_point(l);
            }
            right.concat(&left);
        } else {
            let (r, l) = self.cap(v[0], v[1] - v[0]);
            right.add_point(r);
            left.add_point(l);
            for k in 1 .. n - 1 {
                let (r, l) = self.join(v[k - 1], v[k], v[k + 1]);
                right.add_point(r);
                left.add_point(l);
            }
            let (r, l) = self.cap(v[n - 1], v[n - 1] - v[n - 2]);
            right.add_point(r);
            left.add_point(l);
            right.concat_reversed(&left);
        }
        right
    }

    // Butt end at p for a segment heading along dir
    fn cap(&self, p: Point, dir: Point) -> (Point, Point) {
        let (dx, dy) = (dir.x(), dir.y());
        let r = dx.hypot(dy);
        if r == 0.0 {
            return (p, p);
        }
        let hw = self.width / 2.0;
        let t = Point::new(-dy / r * hw, dx / r * hw);
        (p + t, p - t)
    }

    // Miter offset at p1 between edges p0-p1 and p1-p2, as (right, left)
    fn join(&self, p0: Point, p1: Point, p2: Point) -> (Point, Point) {
        let hw = self.width / 2.0;
        let limit = self.miter_limit * hw;
        let (x01, y01) = (p0.x() - p1.x(), p0.y() - p1.y());
        let (x12, y12) = (p1.x() - p2.x(), p1.y() - p2.y());
        let r01 = x01.hypot(y01);
        let r12 = x12.hypot(y12);

        let (tx, ty) = if r01 == 0.0 && r12 == 0.0 {
            return (p1, p1);
        } else if r01 == 0.0 {
            (y12 / r12 * hw, -x12 / r12 * hw)
        } else if r12 == 0.0 {
            (y01 / r01 * hw, -x01 / r01 * hw)
        } else {
            let cross = x01 * y12 - y01 * x12;
            if cross.abs() <= 1e-6 * r01 * r12 {
                if x01 * x12 + y01 * y12 > 0.0 {
                    (y01 / r01 * hw, -x01 / r01 * hw)
                } else {
                    trace!("stroke folds back at ({}, {})", p1.x(), p1.y());
                    (x01 / r01 * limit, y01 / r01 * limit)
                }
            } else {
                let s = hw / cross.abs();
                let mut tx = (x01 * r12 - x12 * r01) * s;
                let mut ty = (y01 * r12 - y12 * r01) * s;
                let len = tx.hypot(ty);
                if len > limit {
                    trace!("miter limited at ({}, {}): {} > {}", p1.x(), p1.y(), len, limit);
                    tx *= limit / len;
                    ty *= limit / len;
                }
                (tx, ty)
            }
        };
        let t = Point::new(tx, ty);
        if -x01 * ty + y01 * tx >= 0.0 {
            (p1 + t, p1 - t)
        } else {
            (p1 - t, p1 + t)
        }
    }
}
