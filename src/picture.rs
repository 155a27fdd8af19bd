//! Colored polygons and pictures made of them

use crate::color::Rgb;
use crate::math::OPAQUE;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::Color;
use crate::VertexSource;

/// Polygon carrying its own color and alpha
///
/// Alpha is inverted like everywhere else: 0 is opaque, 128 transparent.
#[derive(Debug,Default,Clone,PartialEq)]
pub struct ColoredPolygon<C: Color = Rgb> {
    pub polygon: Polygon,
    pub color: C,
    pub alpha: u8,
}

impl<C: Color> ColoredPolygon<C> {
    /// Create an empty, opaque polygon of `color`
    pub fn new(color: C) -> Self {
        Self::with_alpha(color, OPAQUE)
    }
    /// Create an empty polygon of `color` and `alpha`
    pub fn with_alpha(color: C, alpha: u8) -> Self {
        Self { polygon: Polygon::new(), color, alpha }
    }
    /// Wrap an existing polygon
    pub fn from_polygon(polygon: Polygon, color: C, alpha: u8) -> Self {
        Self { polygon, color, alpha }
    }
    /// Change the color and alpha
    pub fn set_color(&mut self, color: C, alpha: u8) -> &mut Self {
        self.color = color;
        self.alpha = alpha;
        self
    }
    /// Append a vertex
    pub fn add_point(&mut self, p: Point) -> &mut Self {
        self.polygon.add_point(p);
        self
    }
}

impl<C: Color> VertexSource for ColoredPolygon<C> {
    fn vertices(&self) -> &[Point] {
        self.polygon.vertices()
    }
}

/// Ordered list of colored polygons, drawn first to last
///
///     use polycanvas::{ColoredPolygon, Point, Polygon, Rgb, VectorPicture};
///
///     let mut square = Polygon::new();
///     square.rectangle(Point::new(0.0, 0.0), Point::new(4.0, 4.0));
///
///     let mut pic = VectorPicture::new();
///     pic.add(ColoredPolygon::from_polygon(square, Rgb::new(255, 0, 0), 0));
///     assert_eq!(pic.len(), 1);
///
#[derive(Debug,Clone,PartialEq)]
pub struct VectorPicture<C: Color = Rgb> {
    pub polygons: Vec<ColoredPolygon<C>>,
}

impl<C: Color> Default for VectorPicture<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Color> VectorPicture<C> {
    /// Create an empty picture
    pub fn new() -> Self {
        Self { polygons: vec![] }
    }
    /// Append a polygon on top of the others
    pub fn add(&mut self, p: ColoredPolygon<C>) -> &mut Self {
        self.polygons.push(p);
        self
    }
    /// Polygons in drawing order
    pub fn iter(&self) -> std::slice::Iter<'_, ColoredPolygon<C>> {
        self.polygons.iter()
    }
    /// Number of polygons
    pub fn len(&self) -> usize {
        self.polygons.len()
    }
    /// Check for an empty picture
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl<'a, C: Color> IntoIterator for &'a VectorPicture<C> {
    type Item = &'a ColoredPolygon<C>;
    type IntoIter = std::slice::Iter<'a, ColoredPolygon<C>>;
    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}

impl<C: Color> std::iter::FromIterator<ColoredPolygon<C>> for VectorPicture<C> {
    fn from_iter<I: IntoIterator<Item = ColoredPolygon<C>>>(iter: I) -> Self {
        Self { polygons: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Gray;

    #[test]
    fn colored_polygon() {
        let mut p = ColoredPolygon::new(Gray(200));
        assert_eq!(p.alpha, OPAQUE);
        p.add_point(Point::new(0.0, 0.0))
            .add_point(Point::new(5.0, 0.0))
            .add_point(Point::new(0.0, 5.0));
        assert_eq!(p.vertices().len(), 3);
        assert!(p.polygon.is_convex());
        p.set_color(Gray(10), 64);
        assert_eq!((p.color, p.alpha), (Gray(10), 64));
    }

    #[test]
    fn picture_order() {
        let pic: VectorPicture<Gray> = (0 .. 3u8)
            .map(|i| ColoredPolygon::with_alpha(Gray(i), i))
            .collect();
        assert_eq!(pic.len(), 3);
        let alphas: Vec<u8> = pic.iter().map(|p| p.alpha).collect();
        assert_eq!(alphas, vec![0, 1, 2]);
        assert!(VectorPicture::<Rgb>::new().is_empty());
    }
}
