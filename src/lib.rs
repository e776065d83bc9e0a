//! Light control page for embedded devices
//!
//! Serves a small page with one slider per light channel and keeps it in
//! sync with the device without re-rendering it:
//!
//! - `channel` - Packed channel values (`0xWWRRGGBB`) and layouts
//! - `gamma` - Perceptual correction tables for channel levels
//! - `page` - Page rendering and in-place patching of the level fields
//! - `command` - Messages the page script sends back
//! - `config` - Hostname and layout configuration
//!
//! # Example
//!
//! ```ignore
//! use myrtio_light_page::{ChannelLayout, ChannelValue, Command, GammaCorrector, PageTemplate};
//!
//! let template = PageTemplate::new(ChannelLayout::Rgb);
//! let mut page = template.render(ChannelValue::new(0x10_20_30), "lamp1")?;
//!
//! if let Ok(Command::SetChannels(value)) = Command::parse("#405060", template.layout()) {
//!     template.patch(&mut page, value);
//!     let output = GammaCorrector::default().correct_value(value, template.layout());
//!     // hand `output` to the driver
//! }
//! ```

#![no_std]

pub mod channel;
pub mod command;
pub mod config;
pub mod error;
pub mod gamma;
pub mod page;

pub use channel::{Channel, ChannelLayout, ChannelValue};
pub use command::Command;
pub use config::{HOSTNAME_CAPACITY, PageConfig, WEBSOCKET_PORT};
pub use error::Error;
pub use gamma::{GAMMA_2_2, GAMMA_2_8, GammaCorrector, GammaTable};
pub use page::{PAGE_CAPACITY, PageTemplate, RenderedPage, format_level};
