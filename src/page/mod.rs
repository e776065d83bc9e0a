//! Control page rendering
//!
//! The page is rendered once per viewer and then kept up to date by
//! rewriting only the three-digit level fields in place:
//!
//! ```ignore
//! let template = PageTemplate::new(ChannelLayout::Rgb);
//! let mut page = template.render(ChannelValue::new(0x10_20_30), "lamp1")?;
//! // ... later, on a color change
//! template.patch(&mut page, ChannelValue::new(0x40_50_60));
//! ```
//!
//! `patch` trusts the page to come from `render` of the same template. Pages
//! rendered for another layout or edited by hand are not detected in release
//! builds.

mod fragments;
mod placeholders;

use core::ops::Deref;

use heapless::Vec;

pub use placeholders::{LEVEL_WIDTH, Placeholders, Segment, format_level};

use self::{
    fragments::{RGB_PLACEHOLDERS, RGB_SEGMENTS, RGBW_PLACEHOLDERS, RGBW_SEGMENTS},
    placeholders::parse_level,
};
use crate::{
    channel::{Channel, ChannelLayout, ChannelValue},
    config::HOSTNAME_CAPACITY,
    error::Error,
};

const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

/// Capacity of a rendered page: the longest layout plus the longest hostname.
pub const PAGE_CAPACITY: usize =
    max(RGB_PLACEHOLDERS.fixed_len(), RGBW_PLACEHOLDERS.fixed_len()) + HOSTNAME_CAPACITY;

/// A fully rendered control page, owned by the connection serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    buf: Vec<u8, PAGE_CAPACITY>,
}

impl RenderedPage {
    const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn push(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.buf
            .extend_from_slice(bytes)
            .map_err(|()| Error::HostnameTooLong)
    }
}

impl Deref for RenderedPage {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for RenderedPage {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Renders and patches the control page for one channel layout.
#[derive(Debug, Clone, Copy)]
pub struct PageTemplate {
    layout: ChannelLayout,
    segments: &'static [Segment],
    placeholders: Placeholders,
}

impl PageTemplate {
    pub const fn new(layout: ChannelLayout) -> Self {
        let (segments, placeholders) = match layout {
            ChannelLayout::Rgb => (RGB_SEGMENTS, RGB_PLACEHOLDERS),
            ChannelLayout::Rgbw => (RGBW_SEGMENTS, RGBW_PLACEHOLDERS),
        };
        Self {
            layout,
            segments,
            placeholders,
        }
    }

    pub const fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Byte offset of the channel's digit field in pages of this template.
    pub const fn placeholder_offset(&self, channel: Channel) -> Option<usize> {
        self.placeholders.offset(channel)
    }

    /// Render the full page.
    ///
    /// Fails only when the hostname is longer than [`HOSTNAME_CAPACITY`].
    pub fn render(&self, value: ChannelValue, hostname: &str) -> Result<RenderedPage, Error> {
        if hostname.len() > HOSTNAME_CAPACITY {
            #[cfg(feature = "log")]
            log::warn!("page: hostname of {} bytes does not fit", hostname.len());
            return Err(Error::HostnameTooLong);
        }

        let mut page = RenderedPage::new();
        for segment in self.segments {
            match *segment {
                Segment::Text(text) => page.push(text.as_bytes())?,
                Segment::Slot(channel) => {
                    debug_assert_eq!(Some(page.len()), self.placeholders.offset(channel));
                    page.push(&format_level(0))?;
                }
                Segment::Hostname => page.push(hostname.as_bytes())?,
            }
        }
        self.patch(&mut page, value);

        #[cfg(feature = "log")]
        log::debug!("page: rendered {} bytes for {:?}", page.len(), self.layout);
        Ok(page)
    }

    /// Rewrite every channel field of a page rendered by this template.
    pub fn patch(&self, page: &mut RenderedPage, value: ChannelValue) {
        for &channel in self.layout.channels() {
            self.patch_channel(page, channel, value.get(channel));
        }
    }

    /// Rewrite a single channel field. No-op for channels outside the layout.
    pub fn patch_channel(&self, page: &mut RenderedPage, channel: Channel, level: u8) {
        let Some(offset) = self.placeholders.offset(channel) else {
            return;
        };
        let field = &mut page.buf[offset..offset + LEVEL_WIDTH];
        debug_assert!(
            field.iter().all(u8::is_ascii_digit),
            "page was not rendered by this template"
        );
        field.copy_from_slice(&format_level(level));
    }

    /// Decode the channel fields of a page back into a packed value.
    ///
    /// Channels outside the layout read as zero.
    pub fn read(&self, page: &RenderedPage) -> Option<ChannelValue> {
        self.layout
            .channels()
            .iter()
            .try_fold(ChannelValue::BLACK, |acc, &channel| {
                let offset = self.placeholders.offset(channel)?;
                let field = page.as_bytes().get(offset..offset + LEVEL_WIDTH)?;
                Some(acc.with(channel, parse_level(field)?))
            })
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::new(ChannelLayout::DEFAULT)
    }
}
