
use polycanvas::{Point, Polygon, VertexSource};

fn tolerance() -> f32 {
    if cfg!(feature = "fixed-point") { 0.25 } else { 1e-3 }
}

fn assert_close(a: &Polygon, b: &Polygon) {
    assert_eq!(a.len(), b.len());
    for (p, q) in a.vertices().iter().zip(b.vertices()) {
        assert!((p.x() - q.x()).abs() <= tolerance() && (p.y() - q.y()).abs() <= tolerance(),
                "{:?} != {:?}", p, q);
    }
}

#[test]
fn t03_rotate_roundtrip() {
    let mut p = Polygon::new();
    p.add_xy(3.0, 4.0).add_xy(20.5, 6.0).add_xy(14.0, 22.0).add_xy(2.0, 15.0);
    for &deg in &[0.0, 15.0, 37.0, 90.0, 181.0, -73.0] {
        let back = p.rotate(deg).rotate(-deg);
        assert_close(&p, &back);
        assert_eq!(back.is_convex(), p.is_convex());
    }
}

#[test]
fn t03_rotate_about_roundtrip() {
    let mut p = Polygon::new();
    p.circle(Point::new(30.0, 20.0), 8.0);
    let c = Point::new(25.0, 25.0);
    let back = p.rotate_about(123.0, c).rotate_about(-123.0, c);
    assert_close(&p, &back);

    let mut q = p.clone();
    q.rotate_about_mut(360.0, c);
    assert_close(&p, &q);
}

#[test]
fn t03_quarter_turn_moves_bounds() {
    let mut p = Polygon::new();
    p.rectangle(Point::new(10.0, 0.0), Point::new(20.0, 4.0));
    let r = p.rotate(90.0);
    let b = r.bounds();
    let t = tolerance();
    assert!((b.x1 + 4.0).abs() <= t && b.x2.abs() <= t, "{:?}", b);
    assert!((b.y1 - 10.0).abs() <= t && (b.y2 - 20.0).abs() <= t, "{:?}", b);
}
