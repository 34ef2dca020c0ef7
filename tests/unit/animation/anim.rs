use super::*;

fn ramp(repeat: f64) -> Animation<f64> {
    Animation::new(
        vec![Keyframe::new(0.0, 0.0), Keyframe::new(10.0, 100.0)],
        repeat,
        Sensor::clock(1_000.0, 10.0),
    )
}

fn at(offset: f64) -> SampleCtx {
    SampleCtx::at(1_000.0 + offset)
}

#[test]
fn samples_within_first_iteration() {
    let anim = ramp(1.0);
    assert_eq!(anim.sample(at(2.5)).unwrap(), 25.0);
}

#[test]
fn wraps_while_repeating() {
    let anim = ramp(3.0);
    assert_eq!(anim.sample(at(12.5)).unwrap(), 25.0);
    assert_eq!(anim.sample(at(27.5)).unwrap(), 75.0);
}

#[test]
fn holds_end_of_span_after_last_iteration() {
    let anim = ramp(2.0);
    assert_eq!(anim.sample(at(25.0)).unwrap(), 100.0);
    assert_eq!(anim.sample(at(1_000.0)).unwrap(), 100.0);
}

#[test]
fn infinite_repeat_never_stops() {
    let anim = ramp(f64::INFINITY);
    assert_eq!(anim.sample(at(1_000_005.0)).unwrap(), 50.0);
}

#[test]
fn before_start_wraps_into_span() {
    let anim = ramp(1.0);
    assert_eq!(anim.sample(at(-2.5)).unwrap(), 75.0);
}

#[test]
fn single_keyframe_is_constant() {
    let anim = Animation::new(vec![Keyframe::new(0.0, 7.0)], 1.0, Sensor::clock(0.0, 0.0));
    assert_eq!(anim.sample(SampleCtx::at(123.0)).unwrap(), 7.0);
}

#[test]
fn validate_checks_repeat_and_keys() {
    assert!(ramp(1.0).validate().is_ok());
    assert!(ramp(f64::INFINITY).validate().is_ok());
    assert!(ramp(-1.0).validate().is_err());
    assert!(ramp(f64::NAN).validate().is_err());

    let empty: Animation<f64> = Animation::new(vec![], 1.0, Sensor::clock(0.0, 0.0));
    assert!(empty.validate().is_err());
    assert!(empty.sample(SampleCtx::at(0.0)).is_err());
}

#[test]
fn repeat_defaults_to_one_in_json() {
    let anim: Animation<f64> = serde_json::from_str(
        r#"{"keyframes":[{"position":0,"value":1}],"sensor":{"kind":"clock","reference":0}}"#,
    )
    .unwrap();
    assert_eq!(anim.repeat, 1.0);
}
