use super::*;

#[test]
fn tick_len_is_inclusive() {
    assert_eq!(Tick::new(3, 3).len(), 1);
    assert_eq!(Tick::new(5, 10).len(), 6);
    assert!(Tick::new(4, 2).is_empty());
}

#[test]
fn content_area_defaults_to_full_interior() {
    let model = PatchModel::new(74, 52);
    assert_eq!(model.content_area(), IRect::new(0, 0, 72, 50));
}

#[test]
fn disjoint_content_ticks_collapse_to_envelope() {
    let split = PatchModel::new(40, 40)
        .with_horizontal_content(vec![Tick::new(5, 10), Tick::new(20, 25)]);
    let single = PatchModel::new(40, 40).with_horizontal_content(vec![Tick::new(5, 25)]);

    let area = split.content_area();
    assert_eq!(area.x, 5);
    assert_eq!(area.right() - 1, 25);
    assert_eq!(area, single.content_area());
    // Vertical axis untouched.
    assert_eq!((area.y, area.height), (0, 38));
}

#[test]
fn content_area_clamps_to_interior() {
    let model = PatchModel::new(12, 12)
        .with_vertical_content(vec![Tick::new(4, 30)])
        .with_horizontal_content(vec![Tick::new(50, 60)]);
    let area = model.content_area();
    assert_eq!((area.y, area.height), (4, 6));
    assert_eq!((area.x, area.width), (10, 0));
}

#[test]
fn axis_accessors_pick_matching_edges() {
    let model = PatchModel::new(10, 20)
        .with_horizontal_ticks(vec![Tick::new(1, 2)])
        .with_vertical_ticks(vec![Tick::new(3, 4)])
        .with_horizontal_content(vec![Tick::new(5, 6)])
        .with_vertical_content(vec![Tick::new(7, 8)])
        .with_valid(false);
    assert_eq!(model.stretch_ticks(Axis::Horizontal), &[Tick::new(1, 2)]);
    assert_eq!(model.stretch_ticks(Axis::Vertical), &[Tick::new(3, 4)]);
    assert_eq!(model.content_ticks(Axis::Horizontal), &[Tick::new(5, 6)]);
    assert_eq!(model.content_ticks(Axis::Vertical), &[Tick::new(7, 8)]);
    assert_eq!(model.interior_len(Axis::Horizontal), 8);
    assert_eq!(model.interior_len(Axis::Vertical), 18);
    assert!(!model.is_valid());
}

#[test]
fn model_serializes_to_json() {
    let model = PatchModel::new(6, 6).with_horizontal_ticks(vec![Tick::new(1, 2)]);
    let json = serde_json::to_value(&model).unwrap();
    assert_eq!(json["horizontal_ticks"][0]["start"], 1);
    assert_eq!(json["valid"], true);
    let back: PatchModel = serde_json::from_value(json).unwrap();
    assert_eq!(back, model);
}
