use super::*;

#[test]
fn white_capable_strips() {
    assert!(StripType::Sk6812Rgbw.has_white());
    assert!(StripType::Sk6812W.has_white());
    assert!(!StripType::Ws2811Rgb.has_white());
    assert!(!StripType::Ws2812.has_white());
}

#[test]
fn device_json_defaults() {
    let d: Device =
        serde_json::from_str(r#"{"name":"desk","led_count":150,"gpio_pin":21}"#).unwrap();
    assert_eq!(d.strip_type, StripType::Sk6812Rgbw);
    assert_eq!(d.scene, None);
    d.validate().unwrap();
}

#[test]
fn zero_leds_is_invalid() {
    let d = Device {
        name: "empty".to_string(),
        led_count: 0,
        gpio_pin: 18,
        strip_type: StripType::Ws2812,
        scene: None,
    };
    assert!(d.validate().unwrap_err().to_string().contains("empty"));
}
