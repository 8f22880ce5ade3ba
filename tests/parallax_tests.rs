// Host-side tests for pointer offsets and layer transforms.
// The web crate is wasm-only, so these exercise the shared core directly.

use folio_core::*;

#[test]
fn pointer_at_center_leaves_hero_in_place() {
    let offset = PointerOffset::from_sample(&PointerSample::center_of(1440.0, 900.0));
    assert_eq!(offset, PointerOffset::ZERO);
    assert_eq!(layer_transform(offset, hero_weight()), LayerTransform::IDENTITY);
}

#[test]
fn top_left_corner_moves_projects_layer_by_three_eighths() {
    let offset = PointerOffset::from_sample(&PointerSample::new(0.0, 0.0, 1000.0, 1000.0));
    assert_eq!(offset, PointerOffset::new(-10.0, -10.0));

    let model = ContentModel::portfolio();
    let index = model
        .sections()
        .iter()
        .position(|s| s.id == "projects")
        .unwrap();
    assert_eq!(index, 2);
    assert_eq!(section_weight(index), 3.0 / 8.0);

    let t = layer_transform(offset, section_weight(index));
    assert_eq!(t, LayerTransform { dx: -3.75, dy: -3.75 });
}

#[test]
fn offsets_within_viewport_stay_in_range() {
    let viewports = [(1.0, 1.0), (320.0, 640.0), (1920.0, 1080.0), (3840.0, 2160.0)];
    for (w, h) in viewports {
        for step in 0..=10 {
            let f = step as f32 / 10.0;
            let o = PointerOffset::from_sample(&PointerSample::new(w * f, h * (1.0 - f), w, h));
            assert!(o.x >= -10.0 && o.x <= 10.0, "x={} for {}x{}", o.x, w, h);
            assert!(o.y >= -10.0 && o.y <= 10.0, "y={} for {}x{}", o.y, w, h);
        }
    }
}

#[test]
fn transform_law_holds_for_arbitrary_inputs() {
    let offsets = [
        PointerOffset::new(-10.0, 10.0),
        PointerOffset::new(0.5, -0.25),
        PointerOffset::new(7.3, 2.9),
    ];
    let weights = [0.0, 0.125, 1.0, -2.0, 12.5];
    for o in offsets {
        for w in weights {
            let t = layer_transform(o, w);
            assert_eq!(t.dx, o.x * w);
            assert_eq!(t.dy, o.y * w);
            assert_eq!(t, layer_transform(o, w));
        }
    }
}

#[test]
fn zero_sized_viewport_never_publishes_non_finite_offsets() {
    let samples = [
        PointerSample::new(0.0, 0.0, 0.0, 0.0),
        PointerSample::new(120.0, 80.0, 0.0, 600.0),
        PointerSample::new(120.0, 80.0, 800.0, 0.0),
    ];
    for s in samples {
        let o = PointerOffset::from_sample(&s);
        assert!(o.x.is_finite() && o.y.is_finite(), "{:?} -> {:?}", s, o);
    }
    let o = PointerOffset::from_sample(&samples[1]);
    assert_eq!(o.x, 0.0);
}

#[test]
fn custom_params_change_range_and_weights() {
    let params = ParallaxParams {
        range: 40.0,
        hero_weight: 0.5,
        section_weight_divisor: 4.0,
    };
    let o = PointerOffset::from_sample_with(&PointerSample::new(0.0, 100.0, 100.0, 100.0), &params);
    assert_eq!(o, PointerOffset::new(-20.0, 20.0));
    assert_eq!(params.section_weight(1), 0.5);
}
