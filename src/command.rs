//! Control page messages
//!
//! The page script talks back over a websocket with plain text frames:
//!
//! - `Connect <date>` once the socket opens
//! - `#rrggbb` / `#wwrrggbb` on every slider move
//! - `Effect ON` / `Normal Mode` when the effect button is toggled

use crate::{
    channel::{ChannelLayout, ChannelValue},
    error::Error,
};

const CONNECT: &str = "Connect";
const EFFECT_ON: &str = "Effect ON";
const NORMAL_MODE: &str = "Normal Mode";

/// A message sent by the control page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Page opened its socket
    Connect,
    /// New slider levels
    SetChannels(ChannelValue),
    /// Hand the light over to the effect engine
    EffectOn,
    /// Back to slider control
    NormalMode,
}

impl Command {
    /// Parse a text frame sent by a page of the given layout.
    pub fn parse(text: &str, layout: ChannelLayout) -> Result<Self, Error> {
        let text = text.trim();
        if let Some(hex) = text.strip_prefix('#') {
            return parse_color(hex, layout).map(Command::SetChannels);
        }

        match text {
            EFFECT_ON => Ok(Command::EffectOn),
            NORMAL_MODE => Ok(Command::NormalMode),
            _ if is_connect(text) => Ok(Command::Connect),
            _ => {
                #[cfg(feature = "log")]
                log::warn!("command: unknown message {:?}", text);
                Err(Error::UnknownCommand)
            }
        }
    }
}

/// `Connect` alone or followed by a space and the page's timestamp.
fn is_connect(text: &str) -> bool {
    text.strip_prefix(CONNECT)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(' '))
}

/// Decode the hex part of a color message.
///
/// The page sends white first (`wwrrggbb`), which is exactly the packed
/// channel order.
fn parse_color(hex: &str, layout: ChannelLayout) -> Result<ChannelValue, Error> {
    if hex.len() != layout.channel_count() * 2 {
        return Err(Error::InvalidLength);
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex);
    }
    let raw = u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidHex)?;
    Ok(ChannelValue::new(raw))
}
