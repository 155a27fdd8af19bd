
use polycanvas::{DisplayController, FrameSink, Gray, Gray8, PixelLayout, Point, Polygon};
use std::time::Duration;

#[derive(Default)]
struct Panel {
    frames: Vec<Vec<u8>>,
}

impl FrameSink for Panel {
    fn send_frame(&mut self, frame: &[u8], layout: PixelLayout) {
        assert_eq!(layout, PixelLayout::Gray8);
        self.frames.push(frame.to_vec());
    }
}

#[test]
fn t09_display_ring() {
    let mut dc = DisplayController::<Gray8, Panel, 16, 8>::new(Panel::default(), 3);
    dc.set_poll_delay(Duration::from_millis(0));
    assert_eq!(dc.sink().frames.len(), 1);
    assert!(dc.sink().frames[0].iter().all(|&v| v == 0));

    let mut drawn = 0;
    for frame in 0 .. 7u8 {
        let mut sq = Polygon::new();
        let x = frame as f32 * 2.0;
        sq.rectangle(Point::new(x - 0.5, 1.5), Point::new(x + 1.5, 5.5));
        match dc.producer_canvas() {
            Some(canvas) => {
                canvas.clear(0);
                canvas.fill_polygon(&sq, Gray(10 + frame), 0);
                assert!(dc.submit());
                drawn += 1;
            },
            None => {
                // Ring full, let the display catch up
                assert!(dc.service(2) > 0);
            }
        }
        if frame % 3 == 2 {
            dc.service(1);
        }
    }
    while dc.poll() {}
    let frames = &dc.sink().frames[1 ..];
    assert_eq!(frames.len(), drawn);
    // Frames arrive in drawing order
    let firsts: Vec<u8> = frames.iter()
        .map(|f| f.iter().copied().find(|&v| v != 0).unwrap_or(0))
        .collect();
    let mut sorted = firsts.clone();
    sorted.sort();
    assert_eq!(firsts, sorted);
    assert!((0 .. dc.len()).all(|i| dc.canvas(i).map_or(false, |c| c.is_writable())));
}
