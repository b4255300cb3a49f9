use super::*;

#[test]
fn radius_grows_and_opacity_decays_for_every_depth() {
    for depth in 1..=MAX_AUDIT_DEPTH {
        let rings = generate_chain(depth, 280.0).unwrap();
        assert_eq!(rings.len(), depth as usize);
        for w in rings.windows(2) {
            assert!(w[0].radius < w[1].radius, "depth {depth}");
            assert!(w[0].opacity > w[1].opacity, "depth {depth}");
            assert!(w[1].opacity > 0.0);
        }
    }
}

#[test]
fn first_ring_matches_formula() {
    let rings = generate_chain(3, 100.0).unwrap();
    assert_eq!(rings[0].level, 1);
    assert_eq!(rings[0].radius, 130.0);
    assert_eq!(rings[0].opacity, MAX_OPACITY);
    assert_eq!(rings[2].radius, 190.0);
    assert!((rings[2].opacity - MAX_OPACITY * DECAY_FACTOR * DECAY_FACTOR).abs() < 1e-12);
}

#[test]
fn zero_depth_fails() {
    let err = generate_chain(0, 10.0).unwrap_err();
    assert!(matches!(err, CanvasError::NonPositiveDepth(0)));
}

#[test]
fn excessive_depth_and_bad_radius_fail() {
    assert!(matches!(
        generate_chain(MAX_AUDIT_DEPTH + 1, 10.0),
        Err(CanvasError::Validation(_))
    ));
    assert!(generate_chain(1, f64::NAN).is_err());
    assert!(generate_chain(1, -1.0).is_err());
}
