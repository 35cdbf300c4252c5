use crate::{EdgeInsets, Rect};

#[test]
fn translate_keeps_height() {
    let rect = Rect::new(0, 10, 100, 60).translate_y(-25);
    assert_eq!(rect, Rect::new(0, -15, 100, 35));
    assert_eq!(rect.height(), 50);
}

#[test]
fn outset_grows_every_edge() {
    let rect = Rect::new(0, 100, 200, 150).outset(EdgeInsets::new(1, 2, 3, 4));
    assert_eq!(rect, Rect::new(-1, 98, 203, 154));
    assert_eq!(rect.width(), 204);
}
