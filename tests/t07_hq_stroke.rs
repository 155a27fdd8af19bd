
use polycanvas::{Canvas, Closing, Gray, Gray8, Point, Polygon, VertexSource};

fn dist_to_segment(p: (f32, f32), a: Point, b: Point) -> f32 {
    let (ax, ay, bx, by) = (a.x(), a.y(), b.x(), b.y());
    let (dx, dy) = (bx - ax, by - ay);
    let t = (((p.0 - ax) * dx + (p.1 - ay) * dy) / (dx * dx + dy * dy)).max(0.0).min(1.0);
    ((p.0 - ax - t * dx).powi(2) + (p.1 - ay - t * dy).powi(2)).sqrt()
}

fn midpoint_pixel(a: Point, b: Point) -> (usize, usize) {
    (((a.x() + b.x()) / 2.0).round() as usize, ((a.y() + b.y()) / 2.0).round() as usize)
}

#[test]
fn t07_hq_triangle_stroke() {
    let weight = 4.0;
    let mut tri = Polygon::new();
    tri.add_xy(8.0, 8.0).add_xy(56.0, 10.0).add_xy(30.0, 52.0);

    let mut canvas = Canvas::<Gray8, 64, 64>::new();
    canvas.draw_polygon_hq(&tri, weight, Gray(255), 0);

    let v = tri.vertices();
    let edges: Vec<_> = (0 .. 3).map(|i| (v[i], v[(i + 1) % 3])).collect();
    for &(a, b) in &edges {
        let (x, y) = midpoint_pixel(a, b);
        assert_eq!(canvas.get((x, y)), Some(Gray(255)), "midpoint ({},{})", x, y);
    }
    // Default miter limit is 4 half widths
    let corner = 4.0 * weight / 2.0 + 1.0;
    for y in 0 .. 64 {
        for x in 0 .. 64 {
            let p = (x as f32, y as f32);
            let d = edges.iter().map(|&(a, b)| dist_to_segment(p, a, b)).fold(f32::MAX, f32::min);
            let dv = v.iter().map(|q| ((p.0 - q.x()).powi(2) + (p.1 - q.y()).powi(2)).sqrt())
                .fold(f32::MAX, f32::min);
            if d > weight / 2.0 + 1.0 && dv > corner {
                assert_eq!(canvas.get((x, y)), Some(Gray(0)), "pixel ({},{})", x, y);
            }
        }
    }
}

#[test]
fn t07_open_path_is_not_closed() {
    let mut path = Polygon::new();
    path.add_xy(6.0, 50.0).add_xy(32.0, 12.0).add_xy(58.0, 50.0);

    let mut canvas = Canvas::<Gray8, 64, 64>::new();
    canvas.draw_segments_hq(&path, 3.0, Gray(255), 0, Closing::Open);
    let v = path.vertices();
    assert_eq!(canvas.get(midpoint_pixel(v[0], v[1])), Some(Gray(255)));
    assert_eq!(canvas.get(midpoint_pixel(v[1], v[2])), Some(Gray(255)));
    assert_eq!(canvas.get(midpoint_pixel(v[2], v[0])), Some(Gray(0)));
    // Butt ends do not reach past the end points
    assert_eq!(canvas.get((3, 52)), Some(Gray(0)));

    let mut closed = Canvas::<Gray8, 64, 64>::new();
    closed.draw_segments_hq(&path, 3.0, Gray(255), 0, Closing::Close);
    assert_eq!(closed.get(midpoint_pixel(v[2], v[0])), Some(Gray(255)));
}

#[test]
fn t07_fast_stroke() {
    let mut sq = Polygon::new();
    sq.rectangle(Point::new(10.0, 10.0), Point::new(50.0, 40.0));
    let mut canvas = Canvas::<Gray8, 64, 64>::new();
    canvas.draw_polygon(&sq, 3.0, Gray(200), 0);
    assert_eq!(canvas.get((30, 10)), Some(Gray(200)));
    assert_eq!(canvas.get((50, 25)), Some(Gray(200)));
    assert_eq!(canvas.get((30, 40)), Some(Gray(200)));
    assert_eq!(canvas.get((10, 25)), Some(Gray(200)));
    assert_eq!(canvas.get((30, 25)), Some(Gray(0)));

    let mut open = Canvas::<Gray8, 64, 64>::new();
    open.draw_segments(&sq, 3.0, Gray(200), 0, Closing::Open);
    assert_eq!(open.get((10, 25)), Some(Gray(0)));
    assert_eq!(open.get((30, 40)), Some(Gray(200)));
}

#[test]
fn t07_thin_straight_stroke() {
    let mut path = Polygon::new();
    path.add_xy(2.0, 10.0).add_xy(12.0, 10.0).add_xy(22.0, 10.0);

    let mut hq = Canvas::<Gray8, 32, 20>::new();
    hq.draw_segments_hq(&path, 0.8, Gray(255), 0, Closing::Open);
    let mut line = Canvas::<Gray8, 32, 20>::new();
    line.draw_line(Point::new(2.0, 10.0), Point::new(22.0, 10.0), 0.8, Gray(255), 0);

    for x in 0 .. 32 {
        assert_eq!(hq.get((x, 9)), Some(Gray(0)), "pixel ({},9)", x);
        assert_eq!(hq.get((x, 11)), Some(Gray(0)), "pixel ({},11)", x);
    }
    let lit = |c: &Canvas<Gray8, 32, 20>| (0 .. 32).filter(|&x| c.get((x, 10)) != Some(Gray(0))).count();
    assert_eq!(lit(&line), 21);
    assert_eq!(lit(&hq), 21);
    for x in 2 ..= 22 {
        assert_ne!(hq.get((x, 10)), Some(Gray(0)), "pixel ({},10)", x);
    }
}
