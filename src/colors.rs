//! 15-bit console colors and the arithmetic the animators run on them.
//!
//! [`Rgb555`] packs three 5-bit channels the way GBA palette RAM does: red in
//! bits 0-4, green in bits 5-9, blue in bits 10-14. Conversions to and from
//! `palette::Srgb` are provided for authoring colors in a familiar space, and
//! [`hsv`] builds a palette color from HSV components.

use palette::{FromColor, Hsv, Srgb};

/// Largest value a single 5-bit channel can hold.
pub const CHANNEL_MAX: u8 = 0x1f;

const RED_WEIGHT: u16 = 30;
const GREEN_WEIGHT: u16 = 59;
const BLUE_WEIGHT: u16 = 11;
const WEIGHT_SCALE: u16 = 100;

/// A packed 15-bit RGB color as stored in palette RAM.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb555(pub u16);

impl Rgb555 {
    pub const BLACK: Rgb555 = Rgb555::new(0, 0, 0);
    pub const WHITE: Rgb555 = Rgb555::new(CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX);
    pub const RED: Rgb555 = Rgb555::new(CHANNEL_MAX, 0, 0);
    pub const GREEN: Rgb555 = Rgb555::new(0, CHANNEL_MAX, 0);
    pub const BLUE: Rgb555 = Rgb555::new(0, 0, CHANNEL_MAX);

    /// Packs three channels, each truncated to 5 bits.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        let (r, g, b) = (
            (red & CHANNEL_MAX) as u16,
            (green & CHANNEL_MAX) as u16,
            (blue & CHANNEL_MAX) as u16,
        );
        Self(r | (g << 5) | (b << 10))
    }

    /// Wraps a raw palette word unchanged.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 & 0x1f) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x1f) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        ((self.0 >> 10) & 0x1f) as u8
    }

    /// Blends `self` toward `to` by `step / total_steps`.
    ///
    /// Each channel is computed as `from + ((to - from) * step) / total_steps`
    /// with truncating division, so small step counts do not move in even
    /// increments. Once `step >= total_steps` the result is `to`, bit for bit.
    #[must_use]
    pub fn lerp(self, to: Rgb555, step: u8, total_steps: u8) -> Rgb555 {
        if step >= total_steps {
            return to;
        }

        let blend = |from: u8, to: u8| -> u8 {
            let from = i16::from(from);
            let delta = i16::from(to) - from;
            (from + delta * i16::from(step) / i16::from(total_steps)) as u8
        };

        Rgb555::new(
            blend(self.red(), to.red()),
            blend(self.green(), to.green()),
            blend(self.blue(), to.blue()),
        )
    }

    /// Luma-weighted desaturation: `(r*30 + g*59 + b*11) / 100` on every channel.
    #[must_use]
    pub const fn to_grayscale(self) -> Rgb555 {
        let weighted = self.red() as u16 * RED_WEIGHT
            + self.green() as u16 * GREEN_WEIGHT
            + self.blue() as u16 * BLUE_WEIGHT;
        let gray = (weighted / WEIGHT_SCALE) as u8;
        Rgb555::new(gray, gray, gray)
    }
}

impl core::fmt::Debug for Rgb555 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Rgb555({}, {}, {})", self.red(), self.green(), self.blue())
    }
}

impl From<u16> for Rgb555 {
    fn from(raw: u16) -> Self {
        Rgb555(raw)
    }
}

impl From<Rgb555> for u16 {
    fn from(color: Rgb555) -> Self {
        color.0
    }
}

impl From<Srgb<u8>> for Rgb555 {
    fn from(color: Srgb<u8>) -> Self {
        Rgb555::new(color.red >> 3, color.green >> 3, color.blue >> 3)
    }
}

impl From<Srgb> for Rgb555 {
    fn from(color: Srgb) -> Self {
        Rgb555::from(color.into_format::<u8>())
    }
}

impl From<Rgb555> for Srgb<u8> {
    fn from(color: Rgb555) -> Self {
        Srgb::new(color.red() << 3, color.green() << 3, color.blue() << 3)
    }
}

/// Creates a palette color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Rgb555 {
    let hsv = Hsv::new(hue, saturation, value);
    Rgb555::from(Srgb::from_color(hsv))
}

/// Creates a palette color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Rgb555 {
    hsv(hue, 1.0, 1.0)
}
