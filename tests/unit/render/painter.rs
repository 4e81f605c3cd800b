use super::*;
use crate::foundation::core::{Point, Rect, Rgba8, Viewport};

fn pixel(frame: &crate::foundation::core::FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

#[test]
fn begin_frame_clears_to_the_given_color() {
    let mut p = Painter::new(Viewport::new(16, 16)).unwrap();
    p.begin_frame(Rgba8::opaque(255, 0, 0));
    let frame = p.finish_frame().unwrap();
    assert_eq!(frame.width, 16);
    assert_eq!(frame.data.len(), 16 * 16 * 4);
    assert!(frame.premultiplied);
    assert_eq!(pixel(&frame, 0, 0), [255, 0, 0, 255]);
    assert_eq!(pixel(&frame, 15, 15), [255, 0, 0, 255]);
}

#[test]
fn fill_rect_paints_only_inside_the_rect() {
    let mut p = Painter::new(Viewport::new(32, 32)).unwrap();
    p.begin_frame(Rgba8::opaque(0, 0, 0));
    p.fill_rect(Rect::new(8.0, 8.0, 24.0, 24.0), Rgba8::opaque(0, 255, 0));
    let frame = p.finish_frame().unwrap();
    assert_eq!(pixel(&frame, 16, 16), [0, 255, 0, 255]);
    assert_eq!(pixel(&frame, 2, 2), [0, 0, 0, 255]);
}

#[test]
fn fill_outside_circle_clips_rather_than_dims() {
    let mut p = Painter::new(Viewport::new(64, 64)).unwrap();
    p.begin_frame(Rgba8::opaque(255, 255, 255));
    p.fill_outside_circle(Point::new(32.0, 32.0), 16.0, Rgba8::opaque(0, 0, 0));
    let frame = p.finish_frame().unwrap();
    // Center survives untouched; corners are solid darkness.
    assert_eq!(pixel(&frame, 32, 32), [255, 255, 255, 255]);
    assert_eq!(pixel(&frame, 1, 1), [0, 0, 0, 255]);
    assert_eq!(pixel(&frame, 62, 1), [0, 0, 0, 255]);
    assert_eq!(pixel(&frame, 1, 62), [0, 0, 0, 255]);
    assert_eq!(pixel(&frame, 62, 62), [0, 0, 0, 255]);
}

#[test]
fn stroke_line_leaves_marks_along_the_segment() {
    let mut p = Painter::new(Viewport::new(32, 32)).unwrap();
    p.begin_frame(Rgba8::opaque(0, 0, 0));
    p.stroke_line(
        Point::new(0.0, 16.0),
        Point::new(32.0, 16.0),
        4.0,
        Rgba8::opaque(255, 255, 255),
    );
    let frame = p.finish_frame().unwrap();
    assert_eq!(pixel(&frame, 16, 16), [255, 255, 255, 255]);
    assert_eq!(pixel(&frame, 16, 2), [0, 0, 0, 255]);
}

#[test]
fn degenerate_viewport_paints_nothing_and_yields_an_empty_frame() {
    let mut p = Painter::new(Viewport::new(0, 48)).unwrap();
    p.begin_frame(Rgba8::opaque(255, 0, 0));
    p.fill_circle(Point::new(1.0, 1.0), 10.0, Rgba8::opaque(255, 255, 255));
    let frame = p.finish_frame().unwrap();
    assert_eq!(frame.width, 0);
    assert_eq!(frame.height, 48);
    assert!(frame.data.is_empty());
}

#[test]
fn zero_alpha_draws_are_skipped() {
    let mut p = Painter::new(Viewport::new(8, 8)).unwrap();
    p.begin_frame(Rgba8::opaque(10, 10, 10));
    p.fill_rect(
        Rect::new(0.0, 0.0, 8.0, 8.0),
        Rgba8::new(255, 255, 255, 0),
    );
    let frame = p.finish_frame().unwrap();
    assert_eq!(pixel(&frame, 4, 4), [10, 10, 10, 255]);
}
