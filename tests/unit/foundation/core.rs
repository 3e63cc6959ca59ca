use super::*;

#[test]
fn irect_edges_and_area() {
    let r = IRect::new(2, 3, 10, 4);
    assert_eq!(r.right(), 12);
    assert_eq!(r.bottom(), 7);
    assert_eq!(r.area(), 40);
    assert!(!r.is_empty());
    assert!(IRect::new(0, 0, 0, 5).is_empty());
}

#[test]
fn irect_intersect() {
    let a = IRect::new(0, 0, 10, 10);
    let b = IRect::new(5, 8, 10, 10);
    assert_eq!(a.intersect(b), Some(IRect::new(5, 8, 5, 2)));
    assert_eq!(a.intersect(IRect::new(10, 0, 3, 3)), None);
}

#[test]
fn irect_to_kurbo_rect() {
    let r = IRect::new(1, 2, 3, 4).to_rect();
    assert_eq!(r, Rect::new(1.0, 2.0, 4.0, 6.0));
}

#[test]
fn axis_display_is_lowercase() {
    assert_eq!(Axis::Horizontal.to_string(), "horizontal");
    assert_eq!(Axis::Vertical.to_string(), "vertical");
    assert_eq!(IRect::new(1, 2, 3, 4).to_string(), "3x4+1+2");
}
