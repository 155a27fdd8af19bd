//! Clipping Region

/// Rectangle
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rectangle<T: std::cmp::PartialOrd + Copy> {
    /// Minimum x value
    pub x1: T,
    /// Minimum y value
    pub y1: T,
    /// Maximum x value
    pub x2: T,
    /// Maximum y value
    pub y2: T,
}
impl<T> Rectangle<T> where T: std::cmp::PartialOrd + Copy {
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    ///
    ///     use polycanvas::Rectangle;
    ///
    ///     let r = Rectangle::new(5, 9, 1, 2);
    ///     assert_eq!((r.x1, r.y1, r.x2, r.y2), (1, 2, 5, 9));
    ///
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (x1, x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (y1, y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { x1,y1,x2,y2 }
    }
    /// Check if the point (x,y) lies inside, edges included
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
    /// Expand if the point (x,y) is outside
    pub fn expand(&mut self, x: T, y: T) {
        if x < self.x1 { self.x1 = x; }
        if x > self.x2 { self.x2 = x; }
        if y < self.y1 { self.y1 = y; }
        if y > self.y2 { self.y2 = y; }
    }
    /// Intersection with `clip`, `None` when they do not overlap
    pub fn clipped(&self, clip: &Rectangle<T>) -> Option<Rectangle<T>> {
        let x1 = if self.x1 < clip.x1 { clip.x1 } else { self.x1 };
        let y1 = if self.y1 < clip.y1 { clip.y1 } else { self.y1 };
        let x2 = if self.x2 > clip.x2 { clip.x2 } else { self.x2 };
        let y2 = if self.y2 > clip.y2 { clip.y2 } else { self.y2 };
        if x1 > x2 || y1 > y2 {
            None
        } else {
            Some(Self { x1, y1, x2, y2 })
        }
    }
}

/// Limit `v` to `[min, max]`
pub fn clip_min_max<T: PartialOrd>(v: T, min: T, max: T) -> T {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}
