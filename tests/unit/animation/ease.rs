use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::Hop,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn hop_front_loads_progress() {
    // Most of the travel happens in the first half.
    assert!(Ease::Hop.apply(0.25) > 0.6);
    assert!(Ease::Hop.apply(0.5) > 0.9);
}

#[test]
fn hop_passes_through_segment_joint() {
    assert!((Ease::Hop.apply(0.413) - 0.908).abs() < 1e-6);
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-1.0), 0.0);
    assert_eq!(Ease::Linear.apply(2.0), 1.0);
}

#[test]
fn serde_uses_snake_case_names() {
    let e: Ease = serde_json::from_str("\"out_quad\"").unwrap();
    assert_eq!(e, Ease::OutQuad);
    assert_eq!(serde_json::to_string(&Ease::Hop).unwrap(), "\"hop\"");
}
