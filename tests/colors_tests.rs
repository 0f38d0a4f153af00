//! Integration tests for colors module

use palette::Srgb;
use palette_animator::Rgb555;
use palette_animator::colors::{self, CHANNEL_MAX};

#[test]
fn hsv_creates_primary_colors() {
    // Red (hue = 0)
    assert_eq!(colors::hsv(0.0, 1.0, 1.0), Rgb555::RED);

    // Green (hue = 120)
    assert_eq!(colors::hsv(120.0, 1.0, 1.0), Rgb555::GREEN);

    // Blue (hue = 240)
    assert_eq!(colors::hsv(240.0, 1.0, 1.0), Rgb555::BLUE);
}

#[test]
fn hsv_handles_saturation_and_value() {
    // Zero saturation is white at full value
    assert_eq!(colors::hsv(0.0, 0.0, 1.0), Rgb555::WHITE);

    // Zero value is black regardless of hue
    assert_eq!(colors::hsv(200.0, 1.0, 0.0), Rgb555::BLACK);
}

#[test]
fn hue_is_fully_saturated() {
    assert_eq!(colors::hue(0.0), colors::hsv(0.0, 1.0, 1.0));
    assert_eq!(colors::hue(360.0), Rgb555::RED);
}

#[test]
fn srgb_conversion_drops_low_three_bits() {
    let color = Rgb555::from(Srgb::new(0xffu8, 0x87, 0x07));
    assert_eq!(color, Rgb555::new(CHANNEL_MAX, 0x10, 0));

    let back: Srgb<u8> = color.into();
    assert_eq!((back.red, back.green, back.blue), (0xf8, 0x80, 0x00));
}

#[test]
fn float_srgb_converts_through_eight_bits() {
    assert_eq!(Rgb555::from(Srgb::new(1.0f32, 0.0, 1.0)), Rgb555::new(31, 0, 31));
}

#[test]
fn raw_words_round_trip_including_unused_bit() {
    let raw: u16 = 0x8000 | 0x7c1f;
    assert_eq!(u16::from(Rgb555::from(raw)), raw);
    assert_eq!(Rgb555::from_raw(raw).red(), 31);
    assert_eq!(Rgb555::from_raw(raw).green(), 0);
    assert_eq!(Rgb555::from_raw(raw).blue(), 31);
}

#[test]
fn lerp_endpoint_is_bit_exact_for_any_source() {
    let to = Rgb555::from_raw(0x2a55);
    for raw in (0..=0x7fffu16).step_by(97) {
        let from = Rgb555::from_raw(raw);
        assert_eq!(from.lerp(to, 16, 16), to);
        assert_eq!(from.lerp(to, 255, 16), to);
    }
}

#[test]
fn lerp_stays_between_endpoints() {
    let from = Rgb555::new(31, 0, 12);
    let to = Rgb555::new(0, 31, 12);
    for step in 0..8 {
        let mid = from.lerp(to, step, 8);
        // truncation moves both channels by the same amount
        assert_eq!(mid.red() + mid.green(), 31);
        assert_eq!(mid.blue(), 12);
    }
}
