//! Packed channel values
//!
//! A light color travels through the system as one `u32` holding up to four
//! 8-bit channels:
//!
//! ```text
//! 0xWWRRGGBB
//! ```
//!
//! Three-channel devices simply leave the white byte at zero.

use serde::Deserialize;
use smart_leds::{RGB8, RGBW, White};

/// One independent intensity component of the light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    White,
}

impl Channel {
    pub const COUNT: usize = 4;

    /// Position of the channel in per-channel tables.
    pub(crate) const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::White => 3,
        }
    }

    /// Bit position of the channel inside a packed value.
    pub const fn shift(self) -> u32 {
        match self {
            Channel::Red => 16,
            Channel::Green => 8,
            Channel::Blue => 0,
            Channel::White => 24,
        }
    }
}

/// Packed multi-channel value (`0xWWRRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChannelValue(u32);

impl ChannelValue {
    pub const BLACK: Self = Self(0);

    /// Create a value from its raw packed representation
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::BLACK
            .with(Channel::Red, r)
            .with(Channel::Green, g)
            .with(Channel::Blue, b)
    }

    pub const fn from_rgbw(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self::from_rgb(r, g, b).with(Channel::White, w)
    }

    /// Raw packed representation
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Extract a single channel level.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn get(self, channel: Channel) -> u8 {
        ((self.0 >> channel.shift()) & 0xFF) as u8
    }

    /// Return a copy with one channel replaced.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn with(self, channel: Channel, level: u8) -> Self {
        let shift = channel.shift();
        let cleared = self.0 & !(0xFF << shift);
        Self(cleared | ((level as u32) << shift))
    }

    pub const fn to_rgb8(self) -> RGB8 {
        RGB8 {
            r: self.get(Channel::Red),
            g: self.get(Channel::Green),
            b: self.get(Channel::Blue),
        }
    }

    pub const fn to_rgbw(self) -> RGBW<u8> {
        RGBW {
            r: self.get(Channel::Red),
            g: self.get(Channel::Green),
            b: self.get(Channel::Blue),
            a: White(self.get(Channel::White)),
        }
    }
}

impl From<u32> for ChannelValue {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<ChannelValue> for u32 {
    fn from(value: ChannelValue) -> Self {
        value.0
    }
}

impl From<RGB8> for ChannelValue {
    fn from(color: RGB8) -> Self {
        Self::from_rgb(color.r, color.g, color.b)
    }
}

impl From<RGBW<u8>> for ChannelValue {
    fn from(color: RGBW<u8>) -> Self {
        Self::from_rgbw(color.r, color.g, color.b, color.a.0)
    }
}

/// Number of channels the device drives.
///
/// Decides which sliders the page shows and how the page script encodes
/// updates (`#rrggbb` or `#wwrrggbb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelLayout {
    Rgb,
    Rgbw,
}

impl ChannelLayout {
    /// Layout selected by the `rgbw` build feature.
    #[cfg(feature = "rgbw")]
    pub const DEFAULT: Self = ChannelLayout::Rgbw;
    /// Layout selected by the `rgbw` build feature.
    #[cfg(not(feature = "rgbw"))]
    pub const DEFAULT: Self = ChannelLayout::Rgb;

    /// Channels in the order their sliders appear on the page.
    pub const fn channels(self) -> &'static [Channel] {
        match self {
            ChannelLayout::Rgb => &[Channel::Red, Channel::Green, Channel::Blue],
            ChannelLayout::Rgbw => &[Channel::Red, Channel::Green, Channel::Blue, Channel::White],
        }
    }

    pub const fn channel_count(self) -> usize {
        self.channels().len()
    }

    pub fn contains(self, channel: Channel) -> bool {
        self.channels().contains(&channel)
    }
}

impl Default for ChannelLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}
