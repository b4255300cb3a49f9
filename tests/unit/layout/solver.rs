use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn linear_all_stages_evenly_spaced_at_1200() {
    let l = layout(&StageId::ALL, LayoutMode::Linear, canvas(1200, 800)).unwrap();
    assert_eq!(l.len(), 8);
    let xs: Vec<f64> = l.slots.iter().map(|(_, p)| p.x).collect();
    let step = 1200.0 / 9.0;
    for (i, x) in xs.iter().enumerate() {
        assert!((x - step * (i as f64 + 1.0)).abs() < 1e-9);
    }
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
    assert!(l.slots.iter().all(|(_, p)| p.y == 400.0));
    assert_eq!(
        l.stages().collect::<Vec<_>>(),
        StageId::ALL.to_vec(),
        "canonical order"
    );
}

#[test]
fn linear_center_is_span_midpoint() {
    let l = layout(
        &[StageId::Observation, StageId::Testing],
        LayoutMode::Linear,
        canvas(300, 100),
    )
    .unwrap();
    assert_eq!(l.position_of(StageId::Observation), Some(Point::new(100.0, 50.0)));
    assert_eq!(l.position_of(StageId::Testing), Some(Point::new(200.0, 50.0)));
    assert_eq!(l.center, Point::new(150.0, 50.0));
    assert_eq!(l.position_of(StageId::Audit), None);
}

#[test]
fn input_order_is_canonicalized() {
    let a = layout(
        &[StageId::Audit, StageId::Observation],
        LayoutMode::Linear,
        canvas(300, 100),
    )
    .unwrap();
    assert_eq!(a.slots[0].0, StageId::Observation);
    assert_eq!(a.slots[1].0, StageId::Audit);
}

#[test]
fn radial_starts_at_twelve_oclock_and_goes_clockwise() {
    let l = layout(&StageId::ALL, LayoutMode::Radial, canvas(1000, 1000)).unwrap();
    assert_eq!(l.center, Point::new(500.0, 500.0));
    let r = 1000.0 * RADIAL_RADIUS_FRACTION;
    let first = l.slots[0].1;
    assert!((first.x - 500.0).abs() < 1e-9);
    assert!((first.y - (500.0 - r)).abs() < 1e-9);
    // Quarter turn clockwise lands at 3 o'clock.
    let third = l.slots[2].1;
    assert!((third.x - (500.0 + r)).abs() < 1e-9);
    assert!((third.y - 500.0).abs() < 1e-9);
    for (_, p) in &l.slots {
        assert!((p.distance(l.center) - r).abs() < 1e-9);
    }
}

#[test]
fn positions_never_collide() {
    for (w, h) in [(1, 1), (9, 3), (1200, 800), (640, 2000)] {
        for mode in [LayoutMode::Linear, LayoutMode::Radial] {
            for n in 1..=8 {
                let ids = &StageId::ALL[..n];
                let l = layout(ids, mode, canvas(w, h)).unwrap();
                for (i, (_, a)) in l.slots.iter().enumerate() {
                    for (_, b) in l.slots.iter().skip(i + 1) {
                        assert_ne!(a, b, "collision at {w}x{h} {mode:?} n={n}");
                    }
                }
            }
        }
    }
}

#[test]
fn empty_and_duplicate_inputs_fail() {
    let err = layout(&[], LayoutMode::Radial, canvas(10, 10)).unwrap_err();
    assert!(matches!(err, CanvasError::EmptyStageSet));

    let err = layout(
        &[StageId::Testing, StageId::Testing],
        LayoutMode::Linear,
        canvas(10, 10),
    )
    .unwrap_err();
    assert!(matches!(err, CanvasError::Validation(_)));
}

#[test]
fn zero_canvas_fails() {
    let c = Canvas {
        width: 0,
        height: 10,
    };
    assert!(layout(&StageId::ALL, LayoutMode::Linear, c).is_err());
}

#[test]
fn mode_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&LayoutMode::Radial).unwrap(), "\"radial\"");
    let m: LayoutMode = serde_json::from_str("\"linear\"").unwrap();
    assert_eq!(m, LayoutMode::Linear);
}
