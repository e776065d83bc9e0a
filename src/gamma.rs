//! Gamma correction
//!
//! LEDs respond linearly to their drive level while the eye does not, so
//! slider values are remapped through a 256-entry lookup table before they
//! reach the driver. Tables are precomputed and live in flash.

use smart_leds::{RGB8, RGBW};

use crate::channel::{ChannelLayout, ChannelValue};

/// 256-entry lookup table indexed by the uncorrected level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GammaTable([u8; 256]);

impl GammaTable {
    pub const fn new(entries: [u8; 256]) -> Self {
        Self(entries)
    }

    /// Corrected level for `raw`.
    #[inline]
    #[allow(clippy::cast_lossless)]
    pub const fn lookup(&self, raw: u8) -> u8 {
        self.0[raw as usize]
    }

    pub const fn entries(&self) -> &[u8; 256] {
        &self.0
    }
}

/// Gamma 2.2, the default curve.
#[rustfmt::skip]
pub static GAMMA_2_2: GammaTable = GammaTable::new([
      0,   0,   0,   0,   0,   0,   0,   0,   0,   1,   1,   1,   1,   1,   1,   1,
      1,   1,   1,   1,   1,   1,   2,   2,   2,   2,   2,   2,   2,   2,   3,   3,
      3,   3,   3,   3,   4,   4,   4,   4,   4,   5,   5,   5,   5,   6,   6,   6,
      6,   7,   7,   7,   8,   8,   8,   9,   9,   9,  10,  10,  11,  11,  11,  12,
     12,  13,  13,  13,  14,  14,  15,  15,  16,  16,  17,  17,  18,  18,  19,  19,
     20,  20,  21,  22,  22,  23,  23,  24,  25,  25,  26,  26,  27,  28,  28,  29,
     30,  30,  31,  32,  33,  33,  34,  35,  35,  36,  37,  38,  39,  39,  40,  41,
     42,  43,  43,  44,  45,  46,  47,  48,  49,  49,  50,  51,  52,  53,  54,  55,
     56,  57,  58,  59,  60,  61,  62,  63,  64,  65,  66,  67,  68,  69,  70,  71,
     73,  74,  75,  76,  77,  78,  79,  81,  82,  83,  84,  85,  87,  88,  89,  90,
     91,  93,  94,  95,  97,  98,  99, 100, 102, 103, 105, 106, 107, 109, 110, 111,
    113, 114, 116, 117, 119, 120, 121, 123, 124, 126, 127, 129, 130, 132, 133, 135,
    137, 138, 140, 141, 143, 145, 146, 148, 149, 151, 153, 154, 156, 158, 159, 161,
    163, 165, 166, 168, 170, 172, 173, 175, 177, 179, 181, 182, 184, 186, 188, 190,
    192, 194, 196, 197, 199, 201, 203, 205, 207, 209, 211, 213, 215, 217, 219, 221,
    223, 225, 227, 229, 231, 234, 236, 238, 240, 242, 244, 246, 248, 251, 253, 255,
]);

/// Gamma 2.8. Darker low end, for strips that look washed out with 2.2.
#[rustfmt::skip]
pub static GAMMA_2_8: GammaTable = GammaTable::new([
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   1,   1,   1,   1,   1,   1,   1,   1,
      1,   1,   1,   1,   1,   1,   1,   1,   2,   2,   2,   2,   2,   2,   2,   2,
      2,   3,   3,   3,   3,   3,   3,   3,   4,   4,   4,   4,   4,   5,   5,   5,
      5,   6,   6,   6,   6,   7,   7,   7,   7,   8,   8,   8,   9,   9,   9,  10,
     10,  10,  11,  11,  11,  12,  12,  13,  13,  13,  14,  14,  15,  15,  16,  16,
     17,  17,  18,  18,  19,  19,  20,  20,  21,  21,  22,  22,  23,  24,  24,  25,
     25,  26,  27,  27,  28,  29,  29,  30,  31,  32,  32,  33,  34,  35,  35,  36,
     37,  38,  39,  39,  40,  41,  42,  43,  44,  45,  46,  47,  48,  49,  50,  50,
     51,  52,  54,  55,  56,  57,  58,  59,  60,  61,  62,  63,  64,  66,  67,  68,
     69,  70,  72,  73,  74,  75,  77,  78,  79,  81,  82,  83,  85,  86,  87,  89,
     90,  92,  93,  95,  96,  98,  99, 101, 102, 104, 105, 107, 109, 110, 112, 114,
    115, 117, 119, 120, 122, 124, 126, 127, 129, 131, 133, 135, 137, 138, 140, 142,
    144, 146, 148, 150, 152, 154, 156, 158, 160, 162, 164, 167, 169, 171, 173, 175,
    177, 180, 182, 184, 186, 189, 191, 193, 196, 198, 200, 203, 205, 208, 210, 213,
    215, 218, 220, 223, 225, 228, 231, 233, 236, 239, 241, 244, 247, 249, 252, 255,
]);

/// Maps raw channel levels to perceptually corrected ones.
#[derive(Debug, Clone, Copy)]
pub struct GammaCorrector {
    table: &'static GammaTable,
}

impl Default for GammaCorrector {
    fn default() -> Self {
        Self::new(&GAMMA_2_2)
    }
}

impl GammaCorrector {
    pub const fn new(table: &'static GammaTable) -> Self {
        Self { table }
    }

    pub const fn table(&self) -> &'static GammaTable {
        self.table
    }

    /// Correct a single level.
    #[inline]
    pub const fn correct(&self, raw: u8) -> u8 {
        self.table.lookup(raw)
    }

    /// Correct every channel the layout drives.
    ///
    /// Channels outside the layout keep their packed bits unchanged.
    pub fn correct_value(&self, value: ChannelValue, layout: ChannelLayout) -> ChannelValue {
        layout.channels().iter().fold(value, |acc, &channel| {
            acc.with(channel, self.correct(acc.get(channel)))
        })
    }

    /// Correct a frame in place
    pub fn apply(&self, frame: &mut [RGB8]) {
        for pixel in frame.iter_mut() {
            pixel.r = self.correct(pixel.r);
            pixel.g = self.correct(pixel.g);
            pixel.b = self.correct(pixel.b);
        }
    }

    /// Correct a frame of four-channel pixels in place, white included.
    pub fn apply_rgbw(&self, frame: &mut [RGBW<u8>]) {
        for pixel in frame.iter_mut() {
            pixel.r = self.correct(pixel.r);
            pixel.g = self.correct(pixel.g);
            pixel.b = self.correct(pixel.b);
            pixel.a.0 = self.correct(pixel.a.0);
        }
    }
}
