
use polycanvas::{blend, Canvas, Gray, Gray8, Point, Polygon, Rgb, Rgb565};

fn square() -> Polygon {
    let mut sq = Polygon::new();
    sq.rectangle(Point::new(1.5, 1.5), Point::new(5.5, 5.5));
    sq
}

#[test]
fn t04_blend_extremes() {
    let bg = Rgb::new(12, 40, 7);
    let fg = Rgb::new(31, 0, 20);
    assert_eq!(blend(&bg, &fg, 0), fg);
    assert_eq!(blend(&bg, &fg, 128), bg);
    assert_eq!(blend(&Gray(100), &Gray(200), 64), Gray(150));
}

#[test]
fn t04_fill_over_background() {
    let mut canvas = Canvas::<Gray8, 8, 8>::new();
    canvas.clear(100);
    canvas.fill_polygon(&square(), Gray(200), 64);
    assert_eq!(canvas.get((3, 3)), Some(Gray(150)));
    assert_eq!(canvas.get((0, 0)), Some(Gray(100)));
    assert_eq!(canvas.get((6, 3)), Some(Gray(100)));

    // Transparent draws leave everything as is
    let before = canvas.clone();
    canvas.fill_polygon(&square(), Gray(0), 128);
    canvas.fill_polygon(&square(), Gray(0), 200);
    assert_eq!(canvas.get((3, 3)), before.get((3, 3)));
}

#[test]
fn t04_rgb565_channels() {
    let mut canvas = Canvas::<Rgb565, 8, 8>::new();
    canvas.fill_polygon(&square(), Rgb::new(31, 63, 31), 0);
    canvas.fill_polygon(&square(), Rgb::new(0, 0, 31), 64);
    // ((64 * (31 - 0)) >> 7) + 0 = 15, ((64 * (63 - 0)) >> 7) = 31
    assert_eq!(canvas.get((4, 4)), Some(Rgb::new(15, 31, 31)));
}
