
use polycanvas::{BufferState, Canvas, Closing, ColoredPolygon, Gray, Gray8, PixelData, Point,
                 Polygon, VectorPicture};

#[test]
fn t10_readable_canvas_ignores_drawing() {
    let mut canvas = Canvas::<Gray8, 16, 16>::new();
    assert_eq!(canvas.state(), BufferState::Writable);
    let mut sq = Polygon::new();
    sq.rectangle(Point::new(2.0, 2.0), Point::new(12.0, 12.0));
    let mut pic = VectorPicture::new();
    pic.add(ColoredPolygon::from_polygon(sq.clone(), Gray(30), 0));

    canvas.mark_readable();
    assert!(canvas.is_readable() && !canvas.is_writable());
    canvas.clear(5);
    canvas.fill_polygon(&sq, Gray(255), 0);
    canvas.draw_line(Point::new(0.0, 0.0), Point::new(15.0, 15.0), 3.0, Gray(255), 0);
    canvas.draw_dot(Point::new(1.0, 1.0), Gray(255), 0);
    canvas.draw_polygon(&sq, 2.0, Gray(255), 0);
    canvas.draw_polygon_hq(&sq, 2.0, Gray(255), 0);
    canvas.draw_segments(&sq, 2.0, Gray(255), 0, Closing::Open);
    canvas.draw_segments_hq(&sq, 2.0, Gray(255), 0, Closing::Open);
    canvas.fill_colored_polygon(&pic.polygons[0]);
    canvas.draw_colored_polygon(&pic.polygons[0], 2.0);
    canvas.draw_picture(&pic, Point::new(1.0, 1.0));
    canvas.set((3, 3), Gray(1));
    assert!(canvas.pixeldata().iter().all(|&v| v == 0));

    canvas.mark_writable();
    canvas.fill_polygon(&sq, Gray(255), 0);
    assert_eq!(canvas.get((7, 7)), Some(Gray(255)));
}
