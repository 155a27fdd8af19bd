//! Points and vectors in the plane

use crate::coord::*;

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Point or vector stored in internal coordinates
///
/// Construct with [`Point::new`] from user coordinates. Arithmetic between
/// points stays in internal units, so results are never scaled twice.
///
///     use polycanvas::Point;
///
///     let a = Point::new(1.0, 2.0);
///     let b = Point::new(3.0, 5.0);
///     let d = b - a;
///     assert_eq!(d, Point::new(2.0, 3.0));
///     assert!((d.length() - 13f32.sqrt()).abs() < 1e-5);
///
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    /// Horizontal coordinate, internal units
    pub(crate) x: Coord,
    /// Vertical coordinate, internal units
    pub(crate) y: Coord,
}

impl Point {
    /// Create a point from user coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x: from_user(x), y: from_user(y) }
    }
    /// Create a point from values already in internal units
    pub(crate) fn raw(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
    /// Create a point from internal units computed in `f32`
    pub(crate) fn raw_f32(x: f32, y: f32) -> Self {
        Self { x: from_f32(x), y: from_f32(y) }
    }
    /// Horizontal coordinate in user units
    pub fn x(&self) -> f32 {
        to_user(self.x)
    }
    /// Vertical coordinate in user units
    pub fn y(&self) -> f32 {
        to_user(self.y)
    }
    /// Dot product in user units
    pub fn dot(&self, other: Point) -> f32 {
        let s = to_f32(INTERNAL_SCALE);
        (to_f32(self.x) * to_f32(other.x) + to_f32(self.y) * to_f32(other.y)) / s / s
    }
    /// Cross product `self.x * other.y - self.y * other.x` in internal units
    pub fn cross(&self, other: Point) -> CoordSq {
        self.x as CoordSq * other.y as CoordSq - self.y as CoordSq * other.x as CoordSq
    }
    /// Euclidean length in user units
    pub fn length(&self) -> f32 {
        let (x, y) = (to_f32(self.x), to_f32(self.y));
        (x * x + y * y).sqrt() / to_f32(INTERNAL_SCALE)
    }
    /// Scale to unit length in user units, returning the previous length
    ///
    /// A zero vector is left untouched and 0 is returned.
    ///
    ///     use polycanvas::Point;
    ///
    ///     let mut p = Point::new(3.0, 4.0);
    ///     assert_eq!(p.normalize(), 5.0);
    ///     assert!((p.length() - 1.0).abs() < 0.05);
    ///
    ///     let mut z = Point::new(0.0, 0.0);
    ///     assert_eq!(z.normalize(), 0.0);
    ///     assert_eq!(z, Point::new(0.0, 0.0));
    ///
    pub fn normalize(&mut self) -> f32 {
        let r = self.length();
        if r != 0.0 {
            *self /= r;
        }
        r
    }
    /// Vector rotated a quarter turn, `(-y, x)`
    pub fn perp(&self) -> Point {
        Point::raw(-self.y, self.x)
    }
    /// Multiply by `n / 128`
    pub fn mul_int(&self, n: i16) -> Point {
        Point::raw(mul_128(self.x, n), mul_128(self.y, n))
    }
    /// Divide by `n / 128`; `n == 0` returns the point unchanged
    pub fn div_int(&self, n: i16) -> Point {
        if n == 0 {
            return *self;
        }
        Point::raw(div_128(self.x, n), div_128(self.y, n))
    }
    /// In place [`Point::mul_int`]
    pub fn mul_int_mut(&mut self, n: i16) -> &mut Self {
        *self = self.mul_int(n);
        self
    }
    /// In place [`Point::div_int`]
    pub fn div_int_mut(&mut self, n: i16) -> &mut Self {
        *self = self.div_int(n);
        self
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, p: Point) -> Point {
        Point::raw(self.x + p.x, self.y + p.y)
    }
}
impl Sub for Point {
    type Output = Point;
    fn sub(self, p: Point) -> Point {
        Point::raw(self.x - p.x, self.y - p.y)
    }
}
impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::raw(-self.x, -self.y)
    }
}
impl AddAssign for Point {
    fn add_assign(&mut self, p: Point) {
        self.x += p.x;
        self.y += p.y;
    }
}
impl SubAssign for Point {
    fn sub_assign(&mut self, p: Point) {
        self.x -= p.x;
        self.y -= p.y;
    }
}
impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, f: f32) -> Point {
        Point::raw_f32(to_f32(self.x) * f, to_f32(self.y) * f)
    }
}
impl Div<f32> for Point {
    type Output = Point;
    fn div(self, f: f32) -> Point {
        let inv = 1.0 / f;
        self * inv
    }
}
impl MulAssign<f32> for Point {
    fn mul_assign(&mut self, f: f32) {
        *self = *self * f;
    }
}
impl DivAssign<f32> for Point {
    fn div_assign(&mut self, f: f32) {
        *self = *self / f;
    }
}
