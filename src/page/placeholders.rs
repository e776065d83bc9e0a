//! Placeholder bookkeeping
//!
//! Digit fields are found by offset, never by searching the page. Offsets are
//! running sums over the same segment list `render` walks, so the two can't
//! disagree as long as both go through [`Placeholders::from_segments`].

use crate::channel::Channel;

/// Width of a channel level in the page (`000`..=`255`).
pub const LEVEL_WIDTH: usize = 3;

/// Building block of a page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Static page text
    Text(&'static str),
    /// Three-digit level of a channel
    Slot(Channel),
    /// Device hostname
    Hostname,
}

/// Byte offsets of the channel digit fields in a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    offsets: [Option<usize>; Channel::COUNT],
    /// Page length without the hostname
    fixed_len: usize,
}

impl Placeholders {
    /// Walk a segment list and record where each slot lands.
    ///
    /// Panics (at compile time when used in a `const`) if a slot follows the
    /// hostname or a channel has two slots.
    pub const fn from_segments(segments: &[Segment]) -> Self {
        let mut offsets = [None; Channel::COUNT];
        let mut offset = 0;
        let mut hostname_seen = false;

        let mut i = 0;
        while i < segments.len() {
            match segments[i] {
                Segment::Text(text) => offset += text.len(),
                Segment::Slot(channel) => {
                    assert!(!hostname_seen, "channel slot after hostname");
                    assert!(offsets[channel.index()].is_none(), "duplicate channel slot");
                    offsets[channel.index()] = Some(offset);
                    offset += LEVEL_WIDTH;
                }
                Segment::Hostname => {
                    assert!(!hostname_seen, "duplicate hostname");
                    hostname_seen = true;
                }
            }
            i += 1;
        }

        Self {
            offsets,
            fixed_len: offset,
        }
    }

    /// Offset of the channel's digit field, if the layout has one.
    pub const fn offset(&self, channel: Channel) -> Option<usize> {
        self.offsets[channel.index()]
    }

    pub const fn fixed_len(&self) -> usize {
        self.fixed_len
    }
}

/// Format a level as three zero-padded ASCII digits.
pub const fn format_level(level: u8) -> [u8; LEVEL_WIDTH] {
    [
        b'0' + level / 100,
        b'0' + (level / 10) % 10,
        b'0' + level % 10,
    ]
}

/// Parse a three-digit field back into a level.
pub(crate) fn parse_level(field: &[u8]) -> Option<u8> {
    if field.len() != LEVEL_WIDTH {
        return None;
    }
    let mut level: u16 = 0;
    for &digit in field {
        if !digit.is_ascii_digit() {
            return None;
        }
        level = level * 10 + u16::from(digit - b'0');
    }
    u8::try_from(level).ok()
}
