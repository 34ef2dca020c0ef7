use super::*;
use crate::{
    animation::anim::Animation,
    animation::keyframe::Keyframe,
    animation::sensor::Sensor,
    scene::model::{Image, Layer},
};

fn gradient_scene() -> Scene {
    Scene {
        name: "fade".to_string(),
        layers: vec![Layer::full(Image::Gradient {
            colorstops: vec![
                Keyframe::new(0.0, Color::rgb(0.0, 0.0, 0.0)),
                Keyframe::new(1.0, Color::rgb(200.0, 0.0, 0.0)),
            ],
        })],
    }
}

#[test]
fn pixels_sample_led_centers() {
    let frame = render_frame(&gradient_scene(), 4, SampleCtx::at(0.0)).unwrap();
    let reds: Vec<f64> = frame.pixels.iter().map(|c| c.red).collect();
    assert_eq!(reds, vec![25.0, 75.0, 125.0, 175.0]);
}

#[test]
fn zero_leds_is_rejected() {
    assert!(render_frame(&gradient_scene(), 0, SampleCtx::at(0.0)).is_err());
}

#[test]
fn rgb_strips_drop_the_white_byte() {
    let frame = Frame {
        at: 0.0,
        pixels: vec![Color::rgbw(1.0, 2.0, 3.0, 4.0)],
    };
    assert_eq!(frame.to_ws281x(StripType::Sk6812Rgbw), vec![0x0401_0203]);
    assert_eq!(frame.to_ws281x(StripType::Ws2812), vec![0x0001_0203]);
}

#[test]
fn blank_frame_is_transparent() {
    let frame = Frame::blank(3, SampleCtx::at(1.0));
    assert_eq!(frame.pixels, vec![Color::transparent(); 3]);
    assert_eq!(frame.to_ws281x(StripType::Sk6812Rgbw), vec![0; 3]);
}

#[test]
fn parallel_frames_keep_input_order() {
    let scene = Scene {
        name: "pulse".to_string(),
        layers: vec![Layer::full(Image::ColorAnimation(Animation::new(
            vec![
                Keyframe::new(0.0, Color::rgb(0.0, 0.0, 0.0)),
                Keyframe::new(10.0, Color::rgb(100.0, 0.0, 0.0)),
            ],
            1.0,
            Sensor::clock(0.0, 10.0),
        )))],
    };
    let times: Vec<SampleCtx> = (0..8).map(|t| SampleCtx::at(f64::from(t))).collect();

    let serial = render_frames(&scene, 2, &times, &RenderThreading::default()).unwrap();
    let parallel = render_frames(
        &scene,
        2,
        &times,
        &RenderThreading {
            parallel: true,
            threads: Some(2),
        },
    )
    .unwrap();

    assert_eq!(serial, parallel);
    assert_eq!(parallel[5].pixels[0].red, 50.0);
}

#[test]
fn zero_threads_is_rejected() {
    let err = render_frames(
        &gradient_scene(),
        1,
        &[SampleCtx::at(0.0)],
        &RenderThreading {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, LedError::Validation(_)));
}
