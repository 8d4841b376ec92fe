use spread_layout::constants::mm_to_px;
use spread_layout::*;

const EPSILON: f64 = 1e-6;

fn text(transform: ObjectTransform) -> CanvasObject {
    CanvasObject::Text { transform }
}

fn shape(transform: ObjectTransform) -> CanvasObject {
    CanvasObject::Shape { transform }
}

fn group(children: Vec<CanvasObject>) -> CanvasObject {
    CanvasObject::Group {
        transform: ObjectTransform::new(0.0, 0.0, 10.0, 10.0),
        children,
    }
}

#[test]
fn test_strategy_table() {
    let cases = [
        ("text", ResizeStrategy::Text),
        ("image", ResizeStrategy::Image),
        ("group-with-text", ResizeStrategy::GroupWithText),
        ("group-without-text", ResizeStrategy::Default),
        ("other", ResizeStrategy::Default),
        ("path", ResizeStrategy::Default),
        ("", ResizeStrategy::Default),
    ];
    for (name, expected) in cases {
        let category: ObjectCategory = name.parse().unwrap();
        assert_eq!(get_spine_resize_strategy(category), expected, "category {:?}", name);
    }
}

#[test]
fn test_text_policies_never_scale() {
    for category in [ObjectCategory::Text, ObjectCategory::GroupWithText] {
        let strategy = get_spine_resize_strategy(category);
        assert!(!strategy.supports_scale());
        assert!(strategy.supports_recenter());
        assert!(!strategy.corrects_stroke());
    }
}

#[test]
fn test_image_policy_scales_with_stroke_correction() {
    let strategy = get_spine_resize_strategy(ObjectCategory::Image);
    assert!(strategy.supports_scale());
    assert!(strategy.corrects_stroke());
    assert_eq!(strategy.name(), "ImageResizeStrategy");

    let default = get_spine_resize_strategy(ObjectCategory::GroupWithoutText);
    assert!(default.supports_scale());
    assert!(!default.corrects_stroke());
}

#[test]
fn test_selection_is_idempotent() {
    for name in ["text", "image", "group-with-text", "group-without-text", "other"] {
        let category: ObjectCategory = name.parse().unwrap();
        assert_eq!(
            get_spine_resize_strategy(category),
            get_spine_resize_strategy(category)
        );
    }
}

#[test]
fn test_classify_objects() {
    let frame = ObjectTransform::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(classify(&text(frame)), ObjectCategory::Text);
    assert_eq!(classify(&CanvasObject::Image { transform: frame }), ObjectCategory::Image);
    assert_eq!(classify(&shape(frame)), ObjectCategory::Other);
    assert_eq!(
        classify(&group(vec![shape(frame), group(vec![text(frame)])])),
        ObjectCategory::GroupWithText
    );
    assert_eq!(
        classify(&group(vec![shape(frame), CanvasObject::Image { transform: frame }])),
        ObjectCategory::GroupWithoutText
    );
}

#[test]
fn test_spine_title_stays_centered_and_unscaled() {
    let spec = SpreadSpec::default();
    let before = compute_layout(&spec).unwrap();
    let after = compute_resized_layout(&before, &spec.with_spine_width_mm(24.0)).unwrap();

    let spine = before.region(RegionId::Spine).unwrap();
    let width = 20.0;
    let title = ObjectTransform::new(spine.position.center() - width / 2.0, 100.0, width, 400.0);
    let anchor = ObjectAnchor::capture(&before, title.center_x()).unwrap();
    assert_eq!(anchor.region, RegionId::Spine);

    let moved = apply_spine_resize(&text(title), &anchor, &before, &after);
    let new_spine = after.region(RegionId::Spine).unwrap();
    assert!((moved.center_x() - new_spine.position.center()).abs() < EPSILON);
    assert_eq!(moved.scale_x, 1.0);
    assert_eq!(moved.scale_y, 1.0);
    assert_eq!(moved.top, 100.0);
}

#[test]
fn test_spine_pattern_scales_with_spine() {
    let spec = SpreadSpec::default();
    let before = compute_layout(&spec).unwrap();
    let after = compute_resized_layout(&before, &spec.with_spine_width_mm(20.0)).unwrap();

    let spine = before.region(RegionId::Spine).unwrap();
    let pattern = ObjectTransform::new(spine.position.left, 0.0, spine.position.width, 50.0)
        .with_stroke(1.0, false);
    let anchor = ObjectAnchor::capture(&before, pattern.left).unwrap();

    let scaled = apply_spine_resize(&shape(pattern), &anchor, &before, &after);
    assert!((scaled.scale_x - 2.0).abs() < EPSILON);
    assert!((scaled.scaled_width() - mm_to_px(20.0, spec.dpi)).abs() < EPSILON);
    assert_eq!(scaled.stroke_width, 1.0);
}

#[test]
fn test_lost_anchor_keeps_absolute_position() {
    let spec = SpreadSpec::default().with_wings(70.0);
    let before = compute_layout(&spec).unwrap();
    let after = compute_resized_layout(&before, &spec.without_wings()).unwrap();

    let wing = before.region(RegionId::WingRight).unwrap();
    let logo = ObjectTransform::new(wing.position.left + 5.0, 5.0, 40.0, 40.0).with_stroke(2.0, false);
    let anchor = ObjectAnchor::capture(&before, logo.left).unwrap();

    let object = CanvasObject::Image { transform: logo };
    assert_eq!(apply_spine_resize(&object, &anchor, &before, &after), logo);
}

#[test]
fn test_cover_image_moves_without_scaling() {
    let spec = SpreadSpec::default();
    let before = compute_layout(&spec).unwrap();
    let after = compute_resized_layout(&before, &spec.with_spine_width_mm(16.0)).unwrap();

    let front = before.region(RegionId::FrontCover).unwrap();
    let photo = ObjectTransform::new(front.position.left + 40.0, 80.0, 300.0, 200.0).with_stroke(3.0, false);
    let anchor = ObjectAnchor::capture(&before, photo.left).unwrap();

    let mut object = CanvasObject::Image { transform: photo };
    let moved = apply_spine_resize(&object, &anchor, &before, &after);
    object.set_transform(moved);

    let delta = mm_to_px(6.0, spec.dpi);
    assert!((object.transform().left - (photo.left + delta)).abs() < EPSILON);
    assert!((object.transform().scale_x - 1.0).abs() < EPSILON);
    assert!((object.transform().stroke_width - 3.0).abs() < EPSILON);
}
