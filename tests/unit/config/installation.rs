use super::*;
use crate::{
    color::rgbwa::Color,
    device::strip::StripType,
    scene::model::{Image, Layer},
};

fn installation() -> Installation {
    let mut inst = Installation::default();
    inst.devices.insert(
        "shelf".to_string(),
        Device {
            name: "Shelf".to_string(),
            led_count: 3,
            gpio_pin: 21,
            strip_type: StripType::Sk6812Rgbw,
            scene: None,
        },
    );
    inst.scenes.insert(
        "warm".to_string(),
        Scene {
            name: "Warm".to_string(),
            layers: vec![Layer::full(Image::Color(Color::rgbw(255.0, 80.0, 0.0, 40.0)))],
        },
    );
    inst
}

#[test]
fn set_scene_assigns_and_clears() {
    let mut inst = installation();
    let d = inst.set_scene("shelf", Some("warm")).unwrap();
    assert_eq!(d.scene.as_deref(), Some("warm"));
    assert_eq!(inst.scene_for("shelf").unwrap().unwrap().name, "Warm");

    inst.set_scene("shelf", None).unwrap();
    assert!(inst.scene_for("shelf").unwrap().is_none());
}

#[test]
fn set_scene_rejects_unknown_keys() {
    let mut inst = installation();
    assert!(inst.set_scene("nope", Some("warm")).is_err());
    assert!(inst.set_scene("shelf", Some("nope")).is_err());
    assert_eq!(inst.devices["shelf"].scene, None);
}

#[test]
fn render_device_without_scene_is_dark() {
    let inst = installation();
    let frame = inst.render_device("shelf", SampleCtx::at(0.0)).unwrap();
    assert_eq!(frame.pixels, vec![Color::transparent(); 3]);
}

#[test]
fn render_device_samples_its_scene() {
    let mut inst = installation();
    inst.set_scene("shelf", Some("warm")).unwrap();
    let frame = inst.render_device("shelf", SampleCtx::at(0.0)).unwrap();
    assert_eq!(frame.pixels, vec![Color::rgbw(255.0, 80.0, 0.0, 40.0); 3]);
}

#[test]
fn validate_catches_dangling_scene_reference() {
    let mut inst = installation();
    inst.devices.get_mut("shelf").unwrap().scene = Some("gone".to_string());
    let err = inst.validate().unwrap_err().to_string();
    assert!(err.contains("gone"));
}

#[test]
fn json_roundtrip_preserves_installation() {
    let mut inst = installation();
    inst.set_scene("shelf", Some("warm")).unwrap();
    let json = inst.to_json_pretty().unwrap();
    assert_eq!(Installation::from_json_str(&json).unwrap(), inst);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Installation::from_json_str("{").unwrap_err();
    assert!(matches!(err, LedError::Serde(_)));
}

#[test]
fn missing_file_names_the_path() {
    let err = Installation::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
    let LedError::Other(inner) = &err else {
        panic!("expected an IO error, got {err:?}");
    };
    let io = inner.root_cause().downcast_ref::<std::io::Error>();
    assert_eq!(io.map(std::io::Error::kind), Some(std::io::ErrorKind::NotFound));
}
