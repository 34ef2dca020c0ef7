use super::*;

#[test]
fn clock_reads_elapsed_seconds() {
    let s = Sensor::clock(1_000.0, 5.0);
    assert_eq!(s.value(SampleCtx::at(1_002.5)), 2.5);
    assert_eq!(s.value(SampleCtx::at(990.0)), -10.0);
}

#[test]
fn sensor_json_is_tagged_by_kind() {
    let s: Sensor = serde_json::from_str(r#"{"kind":"clock","reference":3}"#).unwrap();
    assert_eq!(s, Sensor::clock(3.0, 0.0));
}

#[test]
fn wall_clock_is_after_epoch() {
    assert!(SampleCtx::wall_clock().now > 0.0);
}
