use super::*;

#[test]
fn defaults_match_gallery_tuning() {
    let cfg = SliderConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.duration_secs, 2.0);
    assert_eq!(cfg.ease, Ease::Hop);
    assert_eq!(cfg.wheel_threshold, 100.0);
    assert_eq!(cfg.min_swipe_distance, 50.0);
    assert!((cfg.text.stagger_secs() - 0.5).abs() < 1e-12);
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = SliderConfig::from_json(r#"{"duration_secs":1.0,"text":{"rise":30.0}}"#).unwrap();
    assert_eq!(cfg.duration_secs, 1.0);
    assert_eq!(cfg.text.rise, 30.0);
    assert_eq!(cfg.text.duration_secs, 0.8);
    assert_eq!(cfg.reveal, RevealStyle::Directional);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(matches!(
        SliderConfig::from_json(r#"{"duraton":1.0}"#).unwrap_err(),
        SliderError::Serde(_)
    ));
}

#[test]
fn invalid_values_are_validation_errors() {
    let mut cfg = SliderConfig::default();
    cfg.wheel_threshold = 0.0;
    assert!(matches!(cfg.validate().unwrap_err(), SliderError::Validation(_)));

    let mut cfg = SliderConfig::default();
    cfg.text_reveal_at = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = SliderConfig::default();
    cfg.duration_secs = f64::NAN;
    assert!(cfg.validate().is_err());

    let mut cfg = SliderConfig::default();
    cfg.text.overlap_secs = 0.8;
    assert!(cfg.validate().is_err());
}

#[test]
fn thresholds_are_forwarded() {
    let cfg = SliderConfig::default();
    let t = cfg.thresholds();
    assert_eq!(t.wheel, 100.0);
    assert_eq!(t.min_swipe, 50.0);
}
