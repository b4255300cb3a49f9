use super::*;

#[test]
fn endpoints_are_fixed() {
    for e in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
        assert_eq!(e.apply(0.0), 0.0, "{e:?}");
        assert_eq!(e.apply(1.0), 1.0, "{e:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Easing::Linear.apply(-2.0), 0.0);
    assert_eq!(Easing::EaseOut.apply(3.0), 1.0);
}

#[test]
fn curves_bend_the_expected_way() {
    assert!(Easing::EaseIn.apply(0.5) < 0.5);
    assert!(Easing::EaseOut.apply(0.5) > 0.5);
    assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn css_names_match_serde() {
    for e in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, format!("\"{}\"", e.css_name()));
    }
}
